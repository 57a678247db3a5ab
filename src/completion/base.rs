use {crate::core_editor::locator::EOL, unicase::UniCase};

/// Word lookups the core needs from a dictionary service.
///
/// Both lookups receive the active word as typed; implementations decide how
/// to treat its case.
pub trait Dictionary: Send {
    /// A complete word the user is likely typing, if any
    fn find_suggestion(&self, word: &str) -> Option<String>;

    /// Alternative words, in the order they should be cycled through
    fn find_synonyms(&self, word: &str) -> Option<Vec<String>>;
}

/// Suggestions are only offered when nothing but a space, a line separator or
/// the end of the buffer follows the caret.
pub fn at_word_boundary(text: &str, caret: usize) -> bool {
    matches!(text.chars().nth(caret), None | Some(' ') | Some(EOL))
}

/// Text completing `word` into `suggestion`, trailing space included.
///
/// `None` when the word is blank, there is no suggestion, or the suggestion is
/// the word itself in any casing.
pub fn completion_suffix(word: &str, suggestion: Option<&str>) -> Option<String> {
    let suggestion = suggestion?;
    if word.trim().is_empty() || UniCase::new(suggestion) == UniCase::new(word) {
        return None;
    }
    let mut suffix: String = suggestion.chars().skip(word.chars().count()).collect();
    suffix.push(' ');
    Some(suffix)
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("", 0, true)]
    #[case("word", 4, true)]
    #[case("word next", 4, true)]
    #[case("word\nnext", 4, true)]
    #[case("word", 2, false)]
    #[case("word.", 4, false)]
    fn at_word_boundary_works(#[case] text: &str, #[case] caret: usize, #[case] expected: bool) {
        assert_eq!(at_word_boundary(text, caret), expected);
    }

    #[rstest]
    #[case("hel", Some("hello"), Some("lo "))]
    #[case("Hel", Some("hello"), Some("lo "))]
    #[case("hello", Some("Hello"), None)]
    #[case("   ", Some("hello"), None)]
    #[case("hel", None, None)]
    fn completion_suffix_works(
        #[case] word: &str,
        #[case] suggestion: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(
            completion_suffix(word, suggestion).as_deref(),
            expected
        );
    }
}
