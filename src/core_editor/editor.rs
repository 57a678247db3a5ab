use {
    super::{
        locator::{self, EOL},
        text_area::{BufferAccess, Selection, TextArea},
    },
    crate::{
        enums::EditCommand,
        result::Result,
        utils::text_manipulation::{capitalize_first, char_len, char_offset, char_slice, splice},
    },
    std::ops::Range,
};

/// Where the selection goes once new content is in place
enum SelectionPolicy {
    /// Keep the old selection, shifted by the length change if it lay
    /// strictly behind the edited span
    Preserve,

    /// Caret right behind the inserted text
    CaretAt(usize),
}

/// A computed content change, ready to be swapped in
struct Mutation {
    content: String,
    edited: Range<usize>,
    policy: SelectionPolicy,
}

/// Applies content changes to a [`BufferAccess`] while keeping the caret,
/// the selection and the scroll offset where the user expects them.
pub struct Editor {
    text_area: Box<dyn BufferAccess>,
    autoindent: bool,
}

impl Default for Editor {
    fn default() -> Self {
        Editor {
            text_area: Box::new(TextArea::new()),
            autoindent: true,
        }
    }
}

impl Editor {
    /// Edit the given widget
    pub fn new<B: BufferAccess + 'static>(text_area: B) -> Self {
        Editor {
            text_area: Box::new(text_area),
            autoindent: true,
        }
    }

    pub fn from_boxed(text_area: Box<dyn BufferAccess>) -> Self {
        Editor {
            text_area,
            autoindent: true,
        }
    }

    pub fn text_area(&self) -> &dyn BufferAccess {
        self.text_area.as_ref()
    }

    /// The widget itself, for input the host applies directly
    pub fn text_area_mut(&mut self) -> &mut dyn BufferAccess {
        self.text_area.as_mut()
    }

    pub fn get_buffer(&self) -> &str {
        self.text_area.text()
    }

    pub fn selection(&self) -> Selection {
        self.text_area.selection()
    }

    /// Offset behind the selection, where the caret is drawn
    pub fn caret(&self) -> usize {
        self.text_area.selection().end
    }

    pub fn scroll(&self) -> usize {
        self.text_area.scroll()
    }

    /// Record a scroll event from the host
    pub fn set_scroll(&mut self, scroll: usize) {
        self.text_area.set_scroll(scroll);
    }

    /// Text covered by the selection
    pub fn selected(&self) -> &str {
        self.text_area.selected()
    }

    pub fn autoindent(&self) -> bool {
        self.autoindent
    }

    pub fn set_autoindent(&mut self, autoindent: bool) {
        self.autoindent = autoindent;
    }

    /// Replace the document: caret at the start, viewport at the top
    pub fn load(&mut self, text: String) {
        self.text_area.set_text(text);
        self.text_area.set_selection(0, 0);
        self.text_area.set_scroll(0);
    }

    /// Set the selection, clamped to the buffer
    pub fn select(&mut self, start: usize, end: usize) {
        self.text_area.set_selection(start, end);
    }

    pub fn run_edit_command(&mut self, command: &EditCommand) -> Result<()> {
        tracing::debug!(?command, "edit command");
        match command {
            EditCommand::ReplaceLine { id, text, delete } => self.replace_line(*id, text, *delete),
            EditCommand::InjectAtCaret(chars) => {
                self.inject_at_caret(chars);
                Ok(())
            }
            EditCommand::InjectOnLine(chars) => {
                self.inject_on_line(chars);
                Ok(())
            }
            EditCommand::InjectMultiline(chars) => {
                self.inject_multiline(chars);
                Ok(())
            }
            EditCommand::ReplaceActiveWord(word) => {
                self.replace_active_word(word);
                Ok(())
            }
            EditCommand::ReplaceSelection(text) => {
                self.replace_selection(text);
                Ok(())
            }
            EditCommand::InsertNewline => {
                self.insert_newline();
                Ok(())
            }
            EditCommand::Select { start, end } => {
                self.select(*start, *end);
                Ok(())
            }
            EditCommand::SelectLine(id) => self.select_line(*id),
            EditCommand::SelectWord(target) => {
                self.select_word(target);
                Ok(())
            }
        }
    }

    /// Runs one mutation: capture, transform, apply, restore.
    ///
    /// The widget resets selection and scroll when its content is replaced,
    /// both are put back afterwards according to the mutation's policy.
    fn mutate<F>(&mut self, transform: F)
    where
        F: FnOnce(&str, Selection) -> Mutation,
    {
        let selection = self.text_area.selection();
        let scroll = self.text_area.scroll();
        let old_len = self.text_area.len();

        let mutation = transform(self.text_area.text(), selection);

        self.text_area.set_text(mutation.content);

        let restored = match mutation.policy {
            SelectionPolicy::Preserve if selection.start > mutation.edited.end => {
                let delta = self.text_area.len() as isize - old_len as isize;
                selection.shifted(delta)
            }
            SelectionPolicy::Preserve => selection,
            SelectionPolicy::CaretAt(caret) => Selection::caret(caret),
        };
        self.text_area.set_scroll(scroll);
        self.text_area.set_selection(restored.start, restored.end);
    }

    /// Replace line `id` with `new_text`, or delete it together with a separator.
    ///
    /// The selection only moves when it started after the end of the line.
    pub fn replace_line(&mut self, id: usize, new_text: &str, delete: bool) -> Result<()> {
        let span = locator::line_span(self.text_area.text(), id)?;
        self.mutate(|text, _| {
            let len = char_len(text);
            let (start, end) = match (delete, span.start) {
                (false, _) => (span.start, span.end),
                // First line has no separator in front, eat the one behind it
                (true, 0) => (0, (span.end + 1).min(len)),
                (true, start) => (start - 1, span.end),
            };
            Mutation {
                content: splice(text, start, end, new_text),
                edited: span,
                policy: SelectionPolicy::Preserve,
            }
        });
        Ok(())
    }

    /// Collapse the selection to its start and insert `chars` there
    pub fn inject_at_caret(&mut self, chars: &str) {
        let caret = self.text_area.selection().start;
        self.text_area.set_selection(caret, caret);
        self.replace_selection(chars);
    }

    /// Insert `chars` at the start of the active line
    pub fn inject_on_line(&mut self, chars: &str) {
        let text = self.text_area.text();
        let id = locator::active_line_id(text, self.caret());
        // The active line always exists
        if let Ok(span) = locator::line_span(text, id) {
            self.text_area.set_selection(span.start, span.end);
        }
        self.inject_at_caret(chars);
    }

    /// Prefix every non-empty selected line with `chars`.
    ///
    /// Each line is terminated with a separator, blank lines are dropped.
    pub fn inject_multiline(&mut self, chars: &str) {
        let prefixed: String = self
            .selected()
            .split(['\r', EOL])
            .filter(|line| !line.is_empty())
            .map(|line| format!("{chars}{line}{EOL}"))
            .collect();
        self.replace_selection(&prefixed);
    }

    /// Replace the active word with `word`.
    ///
    /// When the replaced word starts with an uppercase letter, so does the replacement.
    pub fn replace_active_word(&mut self, word: &str) {
        let text = self.text_area.text();
        let location = locator::word_location(text, self.caret());
        let starts_upper = char_slice(text, location.from, location.to)
            .chars()
            .next()
            .is_some_and(char::is_uppercase);

        let word = if starts_upper {
            capitalize_first(word)
        } else {
            word.to_string()
        };
        self.text_area.set_selection(location.from, location.to);
        self.replace_selection(&word);
    }

    /// Replace the selected range with `text`, caret behind it
    pub fn replace_selection(&mut self, text: &str) {
        self.mutate(|content, selection| Mutation {
            content: splice(content, selection.start, selection.end, text),
            edited: selection.range(),
            policy: SelectionPolicy::CaretAt(selection.start + char_len(text)),
        });
    }

    /// Break the line at the caret, carrying the indentation over when autoindent is on
    pub fn insert_newline(&mut self) {
        let mut newline = EOL.to_string();
        if self.autoindent {
            let line = locator::active_line(self.text_area.text(), self.caret());
            newline.extend(line.chars().take_while(|c| matches!(c, ' ' | '\t' | '\u{a0}')));
        }
        self.replace_selection(&newline);
    }

    /// Select the content of line `id`
    pub fn select_line(&mut self, id: usize) -> Result<()> {
        let span = locator::line_span(self.text_area.text(), id)?;
        self.text_area.set_selection(span.start, span.end);
        Ok(())
    }

    /// Select the first occurrence of `target`; selects the buffer end if absent
    pub fn select_word(&mut self, target: &str) {
        let text = self.text_area.text();
        let from = text
            .find(target)
            .map_or_else(|| char_len(text), |index| char_offset(text, index));
        self.text_area.set_selection(from, from + char_len(target));
    }
}
