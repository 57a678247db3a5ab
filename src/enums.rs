use serde::{Deserialize, Serialize};
use strum::EnumDiscriminants;

/// Editing actions which can be mapped to host commands or key bindings.
///
/// Executed by the [`Editor`](crate::Editor).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, EnumDiscriminants)]
#[strum_discriminants(derive(strum::Display, strum::EnumIter))]
pub enum EditCommand {
    /// Replace line `id` with `text`; with `delete` the line and its separator vanish
    ReplaceLine {
        /// Zero-based line index
        id: usize,
        /// Replacement content, without separator
        text: String,
        /// Remove the line instead of leaving an empty one
        delete: bool,
    },

    /// Collapse the selection to its start and insert there
    InjectAtCaret(String),

    /// Insert at the start of the active line
    InjectOnLine(String),

    /// Prefix every non-empty selected line, each followed by a separator
    InjectMultiline(String),

    /// Replace the active word, keeping a leading capital
    ReplaceActiveWord(String),

    /// Replace the selected text
    ReplaceSelection(String),

    /// Insert a line separator, repeating the indentation if autoindent is on
    InsertNewline,

    /// Select a character range
    Select {
        /// First selected offset
        start: usize,
        /// Offset behind the selection
        end: usize,
    },

    /// Select the content of line `id`
    SelectLine(usize),

    /// Select the first occurrence of a string
    SelectWord(String),
}

/// How an [`EditCommand`] affects the buffer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditType {
    /// Only the selection moves
    MoveCursor,

    /// The content changes
    EditText,
}

impl EditCommand {
    /// Whether the command changes content or only the selection
    pub fn edit_type(&self) -> EditType {
        match self {
            EditCommand::Select { .. } | EditCommand::SelectLine(_) | EditCommand::SelectWord(_) => {
                EditType::MoveCursor
            }
            EditCommand::ReplaceLine { .. }
            | EditCommand::InjectAtCaret(_)
            | EditCommand::InjectOnLine(_)
            | EditCommand::InjectMultiline(_)
            | EditCommand::ReplaceActiveWord(_)
            | EditCommand::ReplaceSelection(_)
            | EditCommand::InsertNewline => EditType::EditText,
        }
    }
}
