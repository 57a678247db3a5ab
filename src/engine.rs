use std::time::Instant;

use crate::{
    completion::{at_word_boundary, completion_suffix, Dictionary, SynonymCycle},
    config::CoreConfig,
    core_editor::{locator, BufferAccess, Editor, Selection},
    enums::{EditCommand, EditType},
    result::{Result, ScribeError, ScribeErrorVariants},
    search::{Match, SearchPattern},
    services::{Evaluator, OpenScheduler, Persistence, UrlOpener},
    utils::text_manipulation::char_slice,
};

mod builder;
mod commands;

pub use builder::EditorCoreBuilder;
pub use commands::{CommandHandler, CommandTable, CoreCommand};

/// Values derived from the buffer and the caret, recomputed after every event
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ActiveState {
    /// Word the caret is on
    pub word: String,

    /// Zero-based index of the line the caret is on
    pub line_id: usize,

    /// Content of that line
    pub line: String,

    /// First URL-like token on that line
    pub url: Option<String>,

    /// Character in front of the active word
    pub prev_character: Option<char>,

    /// Completion offered by the dictionary, only at word boundaries
    pub suggestion: Option<String>,

    /// Synonyms of the active word
    pub synonyms: Option<Vec<String>>,
}

/// Text manipulation core for one open document.
///
/// Owns the buffer through its [`Editor`] and the collaborators it calls
/// into. Every method runs to completion before the next event is handled.
///
/// ## Example usage
/// ```
/// use scribe::{DefaultDictionary, EditorCore};
///
/// let dictionary = DefaultDictionary::new(vec!["typewriter".into()]);
/// let mut core = EditorCore::create().with_dictionary(dictionary).build();
///
/// core.load("a typ");
/// core.on_selection_change(5, 5);
/// assert_eq!(core.active().suggestion.as_deref(), Some("typewriter"));
///
/// core.dispatch("select-autocomplete", None).unwrap();
/// assert_eq!(core.text(), "a typewriter ");
/// ```
pub struct EditorCore {
    editor: Editor,
    active: ActiveState,
    synonym_cycle: SynonymCycle,
    open_scheduler: OpenScheduler,
    config: CoreConfig,
    commands: CommandTable,

    dictionary: Option<Box<dyn Dictionary>>,
    persistence: Box<dyn Persistence>,
    evaluator: Box<dyn Evaluator>,
    url_opener: Box<dyn UrlOpener>,
}

impl Default for EditorCore {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorCore {
    /// Create a new [`EditorCore`] with the default collaborators
    pub fn new() -> Self {
        EditorCoreBuilder::new().build()
    }

    /// Create a new [`EditorCoreBuilder`] to configure the core
    pub fn create() -> EditorCoreBuilder {
        EditorCoreBuilder::new()
    }

    pub fn text(&self) -> &str {
        self.editor.get_buffer()
    }

    pub fn selection(&self) -> Selection {
        self.editor.selection()
    }

    pub fn scroll(&self) -> usize {
        self.editor.scroll()
    }

    /// Text covered by the selection
    pub fn selected(&self) -> &str {
        self.editor.selected()
    }

    /// Latest derived state
    pub fn active(&self) -> &ActiveState {
        &self.active
    }

    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    pub fn commands(&self) -> &CommandTable {
        &self.commands
    }

    /// Target waiting for the URL open delay to pass
    pub fn pending_url(&self) -> Option<&str> {
        self.open_scheduler.pending()
    }

    /// Switch to another document: caret at the start, viewport at the top
    pub fn load(&mut self, text: &str) {
        self.editor.load(text.to_string());
        self.synonym_cycle = SynonymCycle::default();
        self.open_scheduler.cancel();
        self.refresh();
    }

    /// Host reports a new selection
    pub fn on_selection_change(&mut self, start: usize, end: usize) {
        self.editor.select(start, end);
        self.refresh();
    }

    /// The widget, for keystrokes the host applies itself.
    ///
    /// Report the change with [`EditorCore::on_input`] afterwards.
    pub fn text_area_mut(&mut self) -> &mut dyn BufferAccess {
        self.editor.text_area_mut()
    }

    /// Host reports typed input: commit the buffer and recompute
    pub fn on_input(&mut self) {
        self.persistence.commit(self.editor.get_buffer());
        self.refresh();
    }

    /// Host reports a new scroll offset
    pub fn on_scroll(&mut self, scroll: usize) {
        self.editor.set_scroll(scroll);
    }

    /// Recompute the active word, line, URL, suggestion and synonyms
    pub fn refresh(&mut self) {
        let text = self.editor.get_buffer();
        let caret = self.editor.caret();

        let location = locator::word_location(text, caret);
        let word = char_slice(text, location.from, location.to);
        self.synonym_cycle.observe(word, location.from);

        let dictionary = self.dictionary.as_deref();
        let suggestion = if at_word_boundary(text, caret) {
            dictionary.and_then(|d| d.find_suggestion(word))
        } else {
            None
        };

        self.active = ActiveState {
            word: word.to_string(),
            line_id: locator::active_line_id(text, caret),
            line: locator::active_line(text, caret).to_string(),
            url: locator::active_url(text, caret).map(str::to_string),
            prev_character: location
                .from
                .checked_sub(1)
                .and_then(|i| text.chars().nth(i)),
            suggestion,
            synonyms: dictionary.and_then(|d| d.find_synonyms(word)),
        };
    }

    /// Every occurrence of `input` in the buffer; `r/<body>/` searches by regex
    pub fn find(&self, input: &str) -> Vec<Match> {
        SearchPattern::parse(input).find_matches(self.text())
    }

    /// Run a command against the buffer, then recompute the derived state
    pub fn run_edit_command(&mut self, command: &EditCommand) -> Result<()> {
        self.edit(command)?;
        self.refresh();
        Ok(())
    }

    fn edit(&mut self, command: &EditCommand) -> Result<()> {
        self.editor.run_edit_command(command)?;
        if command.edit_type() == EditType::EditText {
            self.persistence.commit(self.editor.get_buffer());
        }
        Ok(())
    }

    /// Run the command registered under `name`
    pub fn dispatch(&mut self, name: &str, argument: Option<&str>) -> Result<()> {
        let handler = self
            .commands
            .get(name)
            .ok_or_else(|| ScribeErrorVariants::UnknownCommand(name.to_string()))?;
        tracing::debug!(command = name, ?argument, "dispatch");
        handler(self, argument)
    }

    /// Register an additional command handler
    pub fn register_command(&mut self, name: impl Into<String>, handler: CommandHandler) {
        self.commands.register(name, handler);
    }

    /// Replace line `id`, or delete it with `delete`
    pub fn replace_line(&mut self, id: usize, text: &str, delete: bool) -> Result<()> {
        self.run_edit_command(&EditCommand::ReplaceLine {
            id,
            text: text.to_string(),
            delete,
        })
    }

    /// Insert `chars` (or the configured default) at the caret
    pub fn inject(&mut self, chars: Option<&str>) -> Result<()> {
        let chars = chars.unwrap_or(&self.config.default_injection).to_string();
        self.run_edit_command(&EditCommand::InjectAtCaret(chars))
    }

    /// Insert `chars` (or the configured default) at the start of the active line
    pub fn inject_line(&mut self, chars: Option<&str>) -> Result<()> {
        let chars = chars.unwrap_or(&self.config.default_injection).to_string();
        self.run_edit_command(&EditCommand::InjectOnLine(chars))
    }

    /// Prefix every selected line with `chars` (or the configured default)
    pub fn inject_multiline(&mut self, chars: Option<&str>) -> Result<()> {
        let chars = chars.unwrap_or(&self.config.default_injection).to_string();
        self.run_edit_command(&EditCommand::InjectMultiline(chars))
    }

    pub fn replace_active_word(&mut self, word: &str) -> Result<()> {
        self.run_edit_command(&EditCommand::ReplaceActiveWord(word.to_string()))
    }

    pub fn replace_selection(&mut self, text: &str) -> Result<()> {
        self.run_edit_command(&EditCommand::ReplaceSelection(text.to_string()))
    }

    /// Break the line at the caret
    pub fn insert_newline(&mut self) -> Result<()> {
        self.run_edit_command(&EditCommand::InsertNewline)
    }

    /// Complete the active word with the suggestion and a space.
    ///
    /// Without anything to complete the fallback indent is injected instead.
    pub fn accept_suggestion(&mut self) -> Result<()> {
        let chars = completion_suffix(&self.active.word, self.active.suggestion.as_deref())
            .unwrap_or_else(|| self.config.fallback_indent.clone());
        self.run_edit_command(&EditCommand::InjectAtCaret(chars))
    }

    /// Replace the active word with the next of its synonyms
    pub fn cycle_synonym(&mut self) -> Result<()> {
        let from = locator::word_location(self.editor.get_buffer(), self.editor.caret()).from;
        let dictionary = self.dictionary.as_deref();
        let Some(replacement) = self
            .synonym_cycle
            .advance(&self.active.word, from, |word| {
                dictionary.and_then(|d| d.find_synonyms(word))
            })
        else {
            return Ok(());
        };

        self.edit(&EditCommand::ReplaceActiveWord(replacement))?;
        let text = self.editor.get_buffer();
        let caret = self.editor.caret();
        let location = locator::word_location(text, caret);
        self.synonym_cycle
            .rekey(char_slice(text, location.from, location.to), location.from);
        self.refresh();
        Ok(())
    }

    /// Select `target` (or the active URL) and queue it for opening.
    ///
    /// Nothing happens without a target.
    pub fn open_url(&mut self, target: Option<&str>) -> Result<()> {
        self.open_url_at(target, Instant::now())
    }

    /// [`EditorCore::open_url`] with an explicit clock
    pub fn open_url_at(&mut self, target: Option<&str>, now: Instant) -> Result<()> {
        let Some(target) = target
            .map(str::to_string)
            .or_else(|| self.active.url.clone())
        else {
            return Ok(());
        };

        self.run_edit_command(&EditCommand::SelectWord(target.clone()))?;
        if !self.open_scheduler.schedule(&target, now) {
            tracing::debug!(url = %target, "open already pending");
        }
        Ok(())
    }

    /// Hand a queued URL to the opener once its delay has passed.
    ///
    /// Returns the opened target. Opener failures are logged and returned.
    pub fn poll_pending(&mut self, now: Instant) -> Result<Option<String>> {
        let Some(target) = self.open_scheduler.take_due(now) else {
            return Ok(None);
        };
        if let Err(err) = self.url_opener.open(&target) {
            tracing::warn!(url = %target, "failed to open: {err}");
            return Err(err.into());
        }
        Ok(Some(target))
    }

    /// Evaluate the selected snippet and replace it with the result.
    ///
    /// Evaluation failures are logged and leave the selection untouched.
    pub fn select_eval(&mut self) -> Result<()> {
        let snippet = self.editor.selected().to_string();
        if snippet.is_empty() {
            return Ok(());
        }

        match self.evaluator.evaluate(&snippet) {
            Ok(output) => self.replace_selection(&output),
            Err(reason) => {
                let err = ScribeError::from(ScribeErrorVariants::EvaluationError(reason));
                tracing::warn!("{err}");
                Ok(())
            }
        }
    }

    /// Forget the synonym rotation and any queued URL, then recompute
    pub fn reset(&mut self) {
        self.synonym_cycle = SynonymCycle::default();
        self.open_scheduler.cancel();
        self.refresh();
    }

    pub fn toggle_autoindent(&mut self) {
        self.config.autoindent = !self.config.autoindent;
        self.editor.set_autoindent(self.config.autoindent);
    }

    /// Insert the local time as `H:MM`
    pub fn insert_time(&mut self) -> Result<()> {
        let time = chrono::Local::now().format("%-H:%M").to_string();
        self.run_edit_command(&EditCommand::InjectAtCaret(time))
    }
}
