//! Buffer-wide search, literal or by regular expression.
//!
//! User input of the form `r/<body>/` selects regex mode, anything else is a
//! literal. The input is parsed once into a [`SearchPattern`].

use {
    crate::result::{Result, ScribeErrorVariants},
    regex::RegexBuilder,
};

/// A found occurrence, in characters
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Match {
    /// Offset of the first matched character
    pub offset: usize,

    /// Number of matched characters
    pub len: usize,
}

impl Match {
    /// Creates a match at `offset` spanning `len` characters
    pub const fn new(offset: usize, len: usize) -> Self {
        Match { offset, len }
    }
}

impl From<(usize, usize)> for Match {
    fn from((offset, len): (usize, usize)) -> Self {
        Match { offset, len }
    }
}

/// What to look for
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum SearchPattern {
    /// Case-insensitive substring
    Literal(String),

    /// Case-insensitive regular expression, applied globally
    Regex(String),
}

impl SearchPattern {
    /// Parse raw user input: `r/<body>/` is a regex, everything else a literal.
    ///
    /// `r//` and `r/` carry an empty body, which matches at every offset.
    pub fn parse(input: &str) -> Self {
        let body = input
            .strip_prefix("r/")
            .and_then(|rest| rest.strip_suffix('/').or(rest.is_empty().then_some(rest)));
        match body {
            Some(body) => SearchPattern::Regex(body.to_string()),
            None => SearchPattern::Literal(input.to_string()),
        }
    }

    /// Every occurrence in `text`, left to right.
    ///
    /// An invalid regex is logged and yields no matches.
    pub fn find_matches(&self, text: &str) -> Vec<Match> {
        self.try_find_matches(text).unwrap_or_else(|err| {
            tracing::warn!("search failed: {err}");
            Vec::new()
        })
    }

    /// Like [`SearchPattern::find_matches`] but reports pattern errors
    pub fn try_find_matches(&self, text: &str) -> Result<Vec<Match>> {
        match self {
            SearchPattern::Literal(needle) => Ok(find_literal(text, needle)),
            SearchPattern::Regex(body) => find_regex(text, body),
        }
    }
}

impl From<&str> for SearchPattern {
    fn from(input: &str) -> Self {
        SearchPattern::parse(input)
    }
}

/// Parse `input` and search `text` with it
pub fn search(text: &str, input: &str) -> Vec<Match> {
    SearchPattern::parse(input).find_matches(text)
}

fn fold_case(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Non-overlapping, case-insensitive occurrences of `needle`.
///
/// Case folding is per character so offsets into the folded text stay
/// valid offsets into the original.
fn find_literal(text: &str, needle: &str) -> Vec<Match> {
    let haystack: Vec<char> = text.chars().map(fold_case).collect();
    let needle: Vec<char> = needle.chars().map(fold_case).collect();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut matches = Vec::new();
    let mut i = 0;
    while i + needle.len() <= haystack.len() {
        if haystack[i..i + needle.len()] == needle[..] {
            matches.push(Match::new(i, needle.len()));
            i += needle.len();
        } else {
            i += 1;
        }
    }
    matches
}

fn find_regex(text: &str, body: &str) -> Result<Vec<Match>> {
    let regex = RegexBuilder::new(body)
        .case_insensitive(true)
        .build()
        .map_err(|source| ScribeErrorVariants::PatternError {
            pattern: body.to_string(),
            source,
        })?;

    // Byte offsets come in ascending order, convert them incrementally
    let mut matches = Vec::new();
    let mut last_byte = 0;
    let mut last_char = 0;
    for found in regex.find_iter(text) {
        last_char += text[last_byte..found.start()].chars().count();
        last_byte = found.start();
        matches.push(Match::new(last_char, found.as_str().chars().count()));
    }
    tracing::debug!(pattern = body, count = matches.len(), "regex search");
    Ok(matches)
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn pairs(matches: Vec<Match>) -> Vec<(usize, usize)> {
        matches.into_iter().map(|m| (m.offset, m.len)).collect()
    }

    #[rstest]
    #[case("r/a+/", SearchPattern::Regex("a+".into()))]
    #[case("r/[a-z]/", SearchPattern::Regex("[a-z]".into()))]
    #[case("r//", SearchPattern::Regex(String::new()))]
    #[case("r/", SearchPattern::Regex(String::new()))]
    #[case("r/abc", SearchPattern::Literal("r/abc".into()))]
    #[case("word", SearchPattern::Literal("word".into()))]
    fn parse_selects_mode(#[case] input: &str, #[case] expected: SearchPattern) {
        assert_eq!(SearchPattern::parse(input), expected);
    }

    #[rstest]
    #[case("ababab", "ab", vec![(0, 2), (2, 2), (4, 2)])]
    #[case("aaaa", "aa", vec![(0, 2), (2, 2)])]
    #[case("Hello hello HELLO", "hello", vec![(0, 5), (6, 5), (12, 5)])]
    #[case("nothing here", "xyz", vec![])]
    #[case("abc", "", vec![])]
    #[case("", "a", vec![])]
    #[case("ab", "ab", vec![(0, 2)])]
    #[case("héllo HÉLLO", "héllo", vec![(0, 5), (6, 5)])]
    fn literal_search_works(
        #[case] text: &str,
        #[case] needle: &str,
        #[case] expected: Vec<(usize, usize)>,
    ) {
        assert_eq!(pairs(search(text, needle)), expected);
    }

    #[rstest]
    #[case("aaabaa", "r/a+/", vec![(0, 3), (4, 2)])]
    #[case("Foo fOO", "r/foo/", vec![(0, 3), (4, 3)])]
    #[case("é1 é22", r"r/\d+/", vec![(1, 1), (4, 2)])]
    #[case("abc", "r/x/", vec![])]
    fn regex_search_works(
        #[case] text: &str,
        #[case] input: &str,
        #[case] expected: Vec<(usize, usize)>,
    ) {
        assert_eq!(pairs(search(text, input)), expected);
    }

    #[test]
    fn zero_width_regex_matches_terminate() {
        let matches = search("abc", "r/x*/");
        assert_eq!(pairs(matches), vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
    }

    #[rstest]
    #[case("r//")]
    #[case("r/")]
    fn empty_regex_body_matches_everywhere(#[case] input: &str) {
        assert_eq!(pairs(search("ab", input)), vec![(0, 0), (1, 0), (2, 0)]);
    }

    #[test]
    fn invalid_regex_yields_no_matches() {
        assert!(search("abc", "r/(/").is_empty());
    }

    #[test]
    fn invalid_regex_reports_pattern_error() {
        let err = SearchPattern::parse("r/[a-/")
            .try_find_matches("abc")
            .unwrap_err();
        assert!(matches!(
            err.0,
            ScribeErrorVariants::PatternError { ref pattern, .. } if pattern == "[a-"
        ));
    }
}
