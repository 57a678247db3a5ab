use super::*;
use crate::{
    core_editor::BufferAccess,
    services::{LoggingUrlOpener, NoopPersistence, RejectingEvaluator},
};

pub struct EditorCoreBuilder {
    text_area: Option<Box<dyn BufferAccess>>,
    dictionary: Option<Box<dyn Dictionary>>,
    persistence: Option<Box<dyn Persistence>>,
    evaluator: Option<Box<dyn Evaluator>>,
    url_opener: Option<Box<dyn UrlOpener>>,
    config: CoreConfig,
    commands: CommandTable,
}

impl Default for EditorCoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorCoreBuilder {
    /// Create a new [`Builder`](EditorCoreBuilder) with default configuration.
    pub fn new() -> Self {
        Self {
            text_area: None,
            dictionary: None,
            persistence: None,
            evaluator: None,
            url_opener: None,
            config: CoreConfig::default(),
            commands: CommandTable::default(),
        }
    }

    /// Construct an [engine](crate::EditorCore).
    #[must_use]
    pub fn build(self) -> EditorCore {
        let mut editor = match self.text_area {
            Some(text_area) => Editor::from_boxed(text_area),
            None => Editor::default(),
        };
        editor.set_autoindent(self.config.autoindent);

        let mut core = EditorCore {
            editor,
            active: ActiveState::default(),
            synonym_cycle: SynonymCycle::default(),
            open_scheduler: OpenScheduler::new(self.config.open_url_delay()),
            config: self.config,
            commands: self.commands,

            dictionary: self.dictionary,
            persistence: self
                .persistence
                .unwrap_or_else(|| Box::<NoopPersistence>::default()),
            evaluator: self
                .evaluator
                .unwrap_or_else(|| Box::<RejectingEvaluator>::default()),
            url_opener: self
                .url_opener
                .unwrap_or_else(|| Box::<LoggingUrlOpener>::default()),
        };
        core.refresh();
        core
    }

    /// Edit a host provided buffer instead of a fresh [`TextArea`](crate::TextArea).
    #[must_use]
    pub fn with_text_area<B: BufferAccess + 'static>(mut self, text_area: B) -> Self {
        self.text_area = Some(Box::new(text_area));
        self
    }

    /// Use a [`Dictionary`](crate::Dictionary) for suggestions and synonyms.
    #[must_use]
    pub fn with_dictionary<D: Dictionary + 'static>(mut self, dictionary: D) -> Self {
        self.dictionary = Some(Box::new(dictionary));
        self
    }

    /// Remove the current [`Dictionary`](crate::Dictionary), if any.
    #[must_use]
    pub fn without_dictionary(mut self) -> Self {
        self.dictionary = None;
        self
    }

    pub fn dictionary(&self) -> Option<&dyn Dictionary> {
        self.dictionary.as_deref()
    }

    /// Use a [`Persistence`](crate::Persistence) that receives every edit.
    #[must_use]
    pub fn with_persistence<P: Persistence + 'static>(mut self, persistence: P) -> Self {
        self.persistence = Some(Box::new(persistence));
        self
    }

    /// Use an [`Evaluator`](crate::Evaluator) for `select-eval`.
    #[must_use]
    pub fn with_evaluator<E: Evaluator + 'static>(mut self, evaluator: E) -> Self {
        self.evaluator = Some(Box::new(evaluator));
        self
    }

    /// Use a [`UrlOpener`](crate::UrlOpener) for `open-url`.
    #[must_use]
    pub fn with_url_opener<O: UrlOpener + 'static>(mut self, url_opener: O) -> Self {
        self.url_opener = Some(Box::new(url_opener));
        self
    }

    /// Replace the whole [`CoreConfig`].
    #[must_use]
    pub fn with_config(mut self, config: CoreConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    /// Set whether a newline repeats the indentation of the active line.
    #[must_use]
    pub fn with_autoindent(mut self, enabled: bool) -> Self {
        self.config.autoindent = enabled;
        self
    }

    /// Add a command, or override a built-in one.
    #[must_use]
    pub fn with_command(mut self, name: impl Into<String>, handler: CommandHandler) -> Self {
        self.commands.register(name, handler);
        self
    }

    /// Start from a table without the built-in commands.
    #[must_use]
    pub fn without_default_commands(mut self) -> Self {
        self.commands = CommandTable::empty();
        self
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::TextArea;
    use pretty_assertions::assert_eq;

    #[test]
    fn build_refreshes_from_text_area() {
        let core = EditorCoreBuilder::new()
            .with_text_area(TextArea::from("one two").with_selection(5, 5))
            .build();

        assert_eq!(core.active().word, "two");
        assert_eq!(core.active().prev_character, Some(' '));
    }

    #[test]
    fn config_reaches_the_editor() {
        let core = EditorCoreBuilder::new()
            .with_config(CoreConfig {
                default_injection: "--".into(),
                ..CoreConfig::default()
            })
            .with_autoindent(false)
            .build();

        assert!(!core.config().autoindent);
        assert!(!core.editor.autoindent());
        assert_eq!(core.config().default_injection, "--");
    }

    #[test]
    fn without_default_commands_only_keeps_added_ones() {
        let core = EditorCoreBuilder::new()
            .without_default_commands()
            .with_command("noop", |_, _| Ok(()))
            .build();

        assert_eq!(core.commands().names(), vec!["noop"]);
    }

    #[test]
    fn dictionary_is_optional() {
        let builder = EditorCoreBuilder::new()
            .with_dictionary(crate::DefaultDictionary::default())
            .without_dictionary();
        assert!(builder.dictionary().is_none());
    }
}
