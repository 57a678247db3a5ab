/// Number of characters in `text`; all public offsets count characters, not bytes.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Byte index of the character at `offset`, or `text.len()` past the end.
pub fn byte_index(text: &str, offset: usize) -> usize {
    text.char_indices()
        .nth(offset)
        .map_or(text.len(), |(i, _)| i)
}

/// Character offset of the byte index `index` (must sit on a char boundary).
pub fn char_offset(text: &str, index: usize) -> usize {
    char_len(&text[..index])
}

/// Slice `text` by character offsets, clamping both ends to the text.
pub fn char_slice(text: &str, start: usize, end: usize) -> &str {
    let start = byte_index(text, start);
    let end = byte_index(text, end).max(start);
    &text[start..end]
}

/// Replace the characters in `start..end` with `replacement`.
pub fn splice(text: &str, start: usize, end: usize, replacement: &str) -> String {
    let start = byte_index(text, start);
    let end = byte_index(text, end).max(start);
    let mut result = String::with_capacity(text.len() - (end - start) + replacement.len());
    result.push_str(&text[..start]);
    result.push_str(replacement);
    result.push_str(&text[end..]);
    result
}

/// Uppercase the first character of `word`, leaving the rest untouched.
pub fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("", 0, 0)]
    #[case("abc", 1, 1)]
    #[case("abc", 9, 3)]
    #[case("aé😊b", 3, 7)]
    fn byte_index_counts_characters(
        #[case] text: &str,
        #[case] offset: usize,
        #[case] expected: usize,
    ) {
        assert_eq!(byte_index(text, offset), expected);
    }

    #[test]
    fn char_offset_inverts_byte_index() {
        let text = "aé😊b";
        assert_eq!(char_offset(text, byte_index(text, 3)), 3);
    }

    #[rstest]
    #[case("hello world", 0, 5, "", " world")]
    #[case("hello world", 6, 11, "there", "hello there")]
    #[case("héllo", 1, 2, "e", "hello")]
    #[case("abc", 3, 3, "d", "abcd")]
    fn splice_replaces_char_range(
        #[case] text: &str,
        #[case] start: usize,
        #[case] end: usize,
        #[case] replacement: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(splice(text, start, end, replacement), expected);
    }

    #[rstest]
    #[case("", "")]
    #[case("hello", "Hello")]
    #[case("Hello", "Hello")]
    #[case("éclair", "Éclair")]
    fn capitalize_first_works(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(capitalize_first(input), expected);
    }

    #[test]
    fn char_slice_clamps() {
        assert_eq!(char_slice("abc", 1, 10), "bc");
        assert_eq!(char_slice("abc", 5, 10), "");
    }
}
