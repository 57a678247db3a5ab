//! Pure lookups over buffer text and a caret position.
//!
//! Nothing in here touches a widget: every function takes the text and a
//! character offset and computes the word, line or URL the caret is on.

use {
    crate::{
        result::{Result, ScribeError},
        utils::text_manipulation::char_slice,
    },
    std::ops::Range,
};

/// The line separator. All offset arithmetic assumes it is a single character.
pub const EOL: char = '\n';

/// Size of the forward scan window when locating a word.
///
/// The window is counted from the character in front of the word, so at most
/// `WORD_SCAN_WINDOW - 1` letters are located. Longer runs get truncated.
pub const WORD_SCAN_WINDOW: usize = 30;

/// Offset span of the letter run containing or adjacent to a position.
///
/// Empty (`from == to`) when the position is surrounded by non-letters.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Hash)]
pub struct WordLocation {
    /// Offset of the first letter
    pub from: usize,

    /// Offset behind the last located letter
    pub to: usize,
}

impl WordLocation {
    /// Number of located characters
    pub fn len(&self) -> usize {
        self.to - self.from
    }

    /// No letters at this position
    pub fn is_empty(&self) -> bool {
        self.from == self.to
    }

    /// Located span as `Range<usize>`
    pub fn range(&self) -> Range<usize> {
        self.from..self.to
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Locate the word around `position`.
///
/// Scans backwards from `position - 1` over letters to find the start, then
/// forwards from the start over letters, bounded by [`WORD_SCAN_WINDOW`].
/// When the character in front of `position` is not a letter, the word
/// starting at `position` is located instead.
pub fn word_location(text: &str, position: usize) -> WordLocation {
    let chars: Vec<char> = text.chars().collect();
    let position = position.min(chars.len());

    let from = chars[..position]
        .iter()
        .rposition(|c| !is_word_char(*c))
        .map_or(0, |i| i + 1);

    let to = from
        + chars[from..]
            .iter()
            .take(WORD_SCAN_WINDOW - 1)
            .take_while(|c| is_word_char(**c))
            .count();

    WordLocation { from, to }
}

/// Zero-based index of the line the caret is on
pub fn active_line_id(text: &str, caret: usize) -> usize {
    text.chars().take(caret).filter(|c| *c == EOL).count()
}

/// Content of the line the caret is on, without its separator
pub fn active_line(text: &str, caret: usize) -> &str {
    text.split(EOL)
        .nth(active_line_id(text, caret))
        .unwrap_or_default()
}

/// The word the caret is on
pub fn active_word(text: &str, caret: usize) -> &str {
    let location = word_location(text, caret);
    char_slice(text, location.from, location.to)
}

/// First URL-like token on the active line.
///
/// Tokens are separated by single spaces. A token qualifies if it contains
/// `://` or starts with `www.`; no further validation is done.
pub fn active_url(text: &str, caret: usize) -> Option<&str> {
    active_line(text, caret)
        .split(' ')
        .find(|token| token.contains("://") || token.starts_with("www."))
}

/// Character right in front of the active word
pub fn prev_character(text: &str, caret: usize) -> Option<char> {
    word_location(text, caret)
        .from
        .checked_sub(1)
        .and_then(|i| text.chars().nth(i))
}

/// Counts the number of lines in the buffer
pub fn num_lines(text: &str) -> usize {
    text.split(EOL).count()
}

/// Character span of line `id`, separator excluded.
///
/// Fails with a bounds violation when the buffer has no such line.
pub fn line_span(text: &str, id: usize) -> Result<Range<usize>> {
    let mut from = 0;
    for (i, line) in text.split(EOL).enumerate() {
        let len = line.chars().count();
        if i == id {
            return Ok(from..from + len);
        }
        from += len + 1;
    }
    Err(ScribeError::line_out_of_bounds(id, num_lines(text)))
}
