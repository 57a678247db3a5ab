use {
    crate::Dictionary,
    itertools::Itertools,
    std::collections::{BTreeSet, HashMap},
    unicase::UniCase,
};

/// An in-memory dictionary: a word list for suggestions and a synonym table.
///
/// # Example
///
/// ```rust
/// use scribe::{DefaultDictionary, Dictionary};
///
/// let mut dictionary = DefaultDictionary::default();
/// dictionary.insert(vec!["batman".into(), "batmobile".into(), "robin".into()]);
/// dictionary.insert_synonyms("big", vec!["large".into(), "huge".into()]);
///
/// assert_eq!(dictionary.find_suggestion("batm"), Some("batman".into()));
/// assert_eq!(
///     dictionary.find_synonyms("Big"),
///     Some(vec!["large".to_string(), "huge".to_string()])
/// );
/// ```
#[derive(Debug, Clone)]
pub struct DefaultDictionary {
    words: BTreeSet<String>,
    synonyms: HashMap<UniCase<String>, Vec<String>>,
    min_word_len: usize,
}

impl Default for DefaultDictionary {
    fn default() -> Self {
        Self {
            words: BTreeSet::new(),
            synonyms: HashMap::new(),
            min_word_len: 2,
        }
    }
}

impl Dictionary for DefaultDictionary {
    /// First word, in alphabetical order, that extends `word`
    fn find_suggestion(&self, word: &str) -> Option<String> {
        if word.chars().count() < self.min_word_len {
            return None;
        }
        let prefix = word.to_lowercase();
        self.words
            .range(prefix.clone()..)
            .take_while(|candidate| candidate.starts_with(&prefix))
            .find(|candidate| candidate.len() > prefix.len())
            .cloned()
    }

    fn find_synonyms(&self, word: &str) -> Option<Vec<String>> {
        self.synonyms.get(&UniCase::new(word.to_string())).cloned()
    }
}

impl DefaultDictionary {
    /// Construct the dictionary with a word list
    pub fn new(words: Vec<String>) -> Self {
        let mut dictionary = DefaultDictionary::default();
        dictionary.insert(words);
        dictionary
    }

    /// Minimum number of typed characters before a suggestion is offered
    #[must_use]
    pub fn set_min_word_len(mut self, min_word_len: usize) -> Self {
        self.min_word_len = min_word_len;
        self
    }

    /// Insert words available as suggestions; they are stored lowercased
    pub fn insert(&mut self, words: Vec<String>) {
        self.words
            .extend(words.into_iter().map(|word| word.to_lowercase()));
    }

    /// Register `synonyms` for `word`, duplicates dropped, order kept
    pub fn insert_synonyms(&mut self, word: &str, synonyms: Vec<String>) {
        let synonyms = synonyms.into_iter().unique().collect_vec();
        if !synonyms.is_empty() {
            self.synonyms.insert(UniCase::new(word.to_string()), synonyms);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn dictionary() -> DefaultDictionary {
        DefaultDictionary::new(
            ["bat", "batcave", "batman", "Robin", "a"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
    }

    #[rstest]
    #[case("bat", Some("batcave"))]
    #[case("batm", Some("batman"))]
    #[case("BATM", Some("batman"))]
    #[case("rob", Some("robin"))]
    #[case("batman", None)]
    #[case("b", None)]
    #[case("xyz", None)]
    fn suggestion_extends_the_word(#[case] word: &str, #[case] expected: Option<&str>) {
        assert_eq!(
            dictionary().find_suggestion(word).as_deref(),
            expected
        );
    }

    #[test]
    fn min_word_len_is_configurable() {
        let dictionary = dictionary().set_min_word_len(1);
        assert_eq!(dictionary.find_suggestion("b"), Some("bat".into()));
    }

    #[test]
    fn synonyms_are_case_insensitive_and_unique() {
        let mut dictionary = DefaultDictionary::default();
        dictionary.insert_synonyms(
            "Quick",
            vec!["fast".into(), "rapid".into(), "fast".into()],
        );

        assert_eq!(
            dictionary.find_synonyms("quick"),
            Some(vec!["fast".to_string(), "rapid".to_string()])
        );
        assert_eq!(dictionary.find_synonyms("slow"), None);
    }

    #[test]
    fn empty_synonym_lists_are_not_stored() {
        let mut dictionary = DefaultDictionary::default();
        dictionary.insert_synonyms("lonely", vec![]);
        assert_eq!(dictionary.find_synonyms("lonely"), None);
    }
}
