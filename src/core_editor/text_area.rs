use {
    crate::utils::text_manipulation::{char_len, char_slice, splice},
    std::{convert::From, ops::Range},
};

/// Caret or highlighted range, as character offsets into the buffer.
///
/// `start == end` denotes a caret.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Hash)]
pub struct Selection {
    /// Offset of the first selected character
    pub start: usize,

    /// Offset behind the last selected character
    pub end: usize,
}

impl Selection {
    /// Creates a selection, ordering the bounds if they are reversed
    pub fn new(start: usize, end: usize) -> Self {
        if start > end {
            Selection {
                start: end,
                end: start,
            }
        } else {
            Selection { start, end }
        }
    }

    /// A zero-length selection at `offset`
    pub fn caret(offset: usize) -> Self {
        Selection {
            start: offset,
            end: offset,
        }
    }

    /// Checks if nothing is highlighted
    pub fn is_caret(&self) -> bool {
        self.start == self.end
    }

    /// Number of selected characters
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Checks if the selection is a caret
    pub fn is_empty(&self) -> bool {
        self.is_caret()
    }

    /// Clamps both bounds into `0..=len`
    pub fn clamped(self, len: usize) -> Self {
        Selection::new(self.start.min(len), self.end.min(len))
    }

    /// Moves both bounds by `delta`, saturating at zero
    pub fn shifted(self, delta: isize) -> Self {
        Selection {
            start: self.start.saturating_add_signed(delta),
            end: self.end.saturating_add_signed(delta),
        }
    }

    /// Selected range as `Range<usize>`
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Read/write access to the text content of an editing surface.
///
/// This mirrors what a native text widget offers. [`BufferAccess::set_text`] is the
/// only place content changes and, like the widget, it resets the selection and the
/// scroll offset. Callers that want to keep them must capture and restore them
/// around the call.
pub trait BufferAccess: Send {
    /// The full document text
    fn text(&self) -> &str;

    /// Replace the whole content.
    ///
    /// Puts the caret at the end of the new text and scrolls back to the top.
    fn set_text(&mut self, text: String);

    /// Current selection
    fn selection(&self) -> Selection;

    /// Set the selection, clamping out-of-range offsets into `0..=len`
    fn set_selection(&mut self, start: usize, end: usize);

    /// Current scroll offset of the viewport
    fn scroll(&self) -> usize;

    /// Set the scroll offset of the viewport
    fn set_scroll(&mut self, scroll: usize);

    /// Length of the text in characters
    fn len(&self) -> usize {
        char_len(self.text())
    }

    /// Check to see if the buffer is empty
    fn is_empty(&self) -> bool {
        self.text().is_empty()
    }

    /// Text covered by the current selection
    fn selected(&self) -> &str {
        let selection = self.selection();
        char_slice(self.text(), selection.start, selection.end)
    }

    /// Replace the selected text with `text`, caret lands behind the insertion.
    ///
    /// Native insertion semantics: the scroll offset is left alone.
    fn insert_text(&mut self, text: &str) {
        let selection = self.selection();
        let scroll = self.scroll();
        let new_content = splice(self.text(), selection.start, selection.end, text);
        self.set_text(new_content);
        let caret = selection.start + char_len(text);
        self.set_selection(caret, caret);
        self.set_scroll(scroll);
    }
}

/// In memory text widget: content, selection and scroll offset.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct TextArea {
    text: String,
    selection: Selection,
    scroll: usize,
}

impl From<&str> for TextArea {
    fn from(input: &str) -> Self {
        let mut text_area = TextArea::new();
        text_area.set_text(input.to_string());
        text_area
    }
}

impl TextArea {
    /// Create an empty text area
    pub fn new() -> TextArea {
        Self::default()
    }

    /// Builder style variant of [`BufferAccess::set_selection`]
    #[must_use]
    pub fn with_selection(mut self, start: usize, end: usize) -> Self {
        self.set_selection(start, end);
        self
    }

    /// Builder style variant of [`BufferAccess::set_scroll`]
    #[must_use]
    pub fn with_scroll(mut self, scroll: usize) -> Self {
        self.scroll = scroll;
        self
    }

    #[cfg(test)]
    pub(crate) fn assert_valid(&self) {
        let len = char_len(&self.text);
        assert!(
            self.selection.start <= self.selection.end,
            "Selection bounds are reversed"
        );
        assert!(self.selection.end <= len, "Selection beyond buffer end");
    }
}

impl BufferAccess for TextArea {
    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: String) {
        self.text = text;
        self.selection = Selection::caret(char_len(&self.text));
        self.scroll = 0;
    }

    fn selection(&self) -> Selection {
        self.selection
    }

    fn set_selection(&mut self, start: usize, end: usize) {
        self.selection = Selection::new(start, end).clamped(char_len(&self.text));
    }

    fn scroll(&self) -> usize {
        self.scroll
    }

    fn set_scroll(&mut self, scroll: usize) {
        self.scroll = scroll;
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_new_text_area_is_empty() {
        let text_area = TextArea::new();
        assert!(text_area.is_empty());
        assert_eq!(text_area.selection(), Selection::caret(0));
        text_area.assert_valid();
    }

    #[rstest]
    #[case("new string", 10)]
    #[case("new line1\nnew line 2", 20)]
    #[case("héllo", 5)]
    fn set_text_moves_caret_to_end_and_resets_scroll(
        #[case] content: &str,
        #[case] expected_caret: usize,
    ) {
        let mut text_area = TextArea::from("test string")
            .with_selection(1, 3)
            .with_scroll(40);

        text_area.set_text(content.to_string());

        assert_eq!(text_area.selection(), Selection::caret(expected_caret));
        assert_eq!(text_area.scroll(), 0);
        text_area.assert_valid();
    }

    #[rstest]
    #[case(2, 4, Selection::new(2, 4))]
    #[case(4, 2, Selection::new(2, 4))]
    #[case(3, 99, Selection::new(3, 5))]
    #[case(99, 99, Selection::caret(5))]
    fn set_selection_clamps(#[case] start: usize, #[case] end: usize, #[case] expected: Selection) {
        let mut text_area = TextArea::from("hello");
        text_area.set_selection(start, end);

        assert_eq!(text_area.selection(), expected);
        text_area.assert_valid();
    }

    #[rstest]
    #[case("hello world", 6, 11, "there", "hello there", 11)]
    #[case("hello", 5, 5, "!", "hello!", 6)]
    #[case("héllo", 0, 2, "Ha", "Hallo", 2)]
    fn insert_text_replaces_selection(
        #[case] input: &str,
        #[case] start: usize,
        #[case] end: usize,
        #[case] text: &str,
        #[case] expected: &str,
        #[case] caret: usize,
    ) {
        let mut text_area = TextArea::from(input)
            .with_selection(start, end)
            .with_scroll(12);

        text_area.insert_text(text);

        assert_eq!(text_area.text(), expected);
        assert_eq!(text_area.selection(), Selection::caret(caret));
        assert_eq!(text_area.scroll(), 12);
        text_area.assert_valid();
    }

    #[test]
    fn selected_returns_highlighted_text() {
        let text_area = TextArea::from("foo\nbar baz").with_selection(4, 7);
        assert_eq!(text_area.selected(), "bar");
    }

    #[test]
    fn selection_shift_saturates() {
        assert_eq!(Selection::new(2, 5).shifted(-3), Selection::new(0, 2));
        assert_eq!(Selection::new(2, 5).shifted(4), Selection::new(6, 9));
    }
}
