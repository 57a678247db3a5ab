use {
    super::EditorCore,
    crate::result::{Result, ScribeErrorVariants},
    std::collections::HashMap,
    strum::IntoEnumIterator,
};

/// Handler invoked for a named command, with its optional argument
pub type CommandHandler = fn(&mut EditorCore, Option<&str>) -> Result<()>;

/// Commands every [`EditorCore`] understands.
///
/// The kebab-case name is what a host sends, e.g. `select-autocomplete`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum CoreCommand {
    /// Complete the active word, or inject the fallback indent
    SelectAutocomplete,
    /// Replace the active word with its next synonym
    SelectSynonym,
    /// Insert the argument (or the default injection) at the caret
    Inject,
    /// Insert the argument at the start of the active line
    InjectLine,
    /// Prefix every selected line with the argument
    InjectMultiline,
    /// Select and open the argument, or the active URL
    OpenUrl,
    /// Drop transient state and recompute
    Reset,
    /// Flip autoindent
    ToggleAutoindent,
    /// Evaluate the selection and replace it with the result
    SelectEval,
    /// Replace the selection with the argument
    ReplaceSelection,
    /// Insert the current local time
    InsertTime,
}

impl CoreCommand {
    /// The built-in handler for this command
    pub fn handler(self) -> CommandHandler {
        match self {
            CoreCommand::SelectAutocomplete => select_autocomplete,
            CoreCommand::SelectSynonym => select_synonym,
            CoreCommand::Inject => inject,
            CoreCommand::InjectLine => inject_line,
            CoreCommand::InjectMultiline => inject_multiline,
            CoreCommand::OpenUrl => open_url,
            CoreCommand::Reset => reset,
            CoreCommand::ToggleAutoindent => toggle_autoindent,
            CoreCommand::SelectEval => select_eval,
            CoreCommand::ReplaceSelection => replace_selection,
            CoreCommand::InsertTime => insert_time,
        }
    }
}

fn select_autocomplete(core: &mut EditorCore, _: Option<&str>) -> Result<()> {
    core.accept_suggestion()
}

fn select_synonym(core: &mut EditorCore, _: Option<&str>) -> Result<()> {
    core.cycle_synonym()
}

fn inject(core: &mut EditorCore, chars: Option<&str>) -> Result<()> {
    core.inject(chars)
}

fn inject_line(core: &mut EditorCore, chars: Option<&str>) -> Result<()> {
    core.inject_line(chars)
}

fn inject_multiline(core: &mut EditorCore, chars: Option<&str>) -> Result<()> {
    core.inject_multiline(chars)
}

fn open_url(core: &mut EditorCore, target: Option<&str>) -> Result<()> {
    core.open_url(target)
}

fn reset(core: &mut EditorCore, _: Option<&str>) -> Result<()> {
    core.reset();
    Ok(())
}

fn toggle_autoindent(core: &mut EditorCore, _: Option<&str>) -> Result<()> {
    core.toggle_autoindent();
    Ok(())
}

fn select_eval(core: &mut EditorCore, _: Option<&str>) -> Result<()> {
    core.select_eval()
}

fn replace_selection(core: &mut EditorCore, text: Option<&str>) -> Result<()> {
    let text = text.ok_or(ScribeErrorVariants::MissingArgument("replace-selection"))?;
    core.replace_selection(text)
}

fn insert_time(core: &mut EditorCore, _: Option<&str>) -> Result<()> {
    core.insert_time()
}

/// Maps command names to handlers.
///
/// The default table holds every [`CoreCommand`]; hosts can register more or
/// override existing names.
#[derive(Clone)]
pub struct CommandTable {
    handlers: HashMap<String, CommandHandler>,
}

impl Default for CommandTable {
    fn default() -> Self {
        let handlers = CoreCommand::iter()
            .map(|command| (command.to_string(), command.handler()))
            .collect();
        CommandTable { handlers }
    }
}

impl CommandTable {
    /// A table without any commands
    pub fn empty() -> Self {
        CommandTable {
            handlers: HashMap::new(),
        }
    }

    /// Register `handler` under `name`, replacing any previous handler
    pub fn register(&mut self, name: impl Into<String>, handler: CommandHandler) {
        self.handlers.insert(name.into(), handler);
    }

    /// Handler registered for `name`
    pub fn get(&self, name: &str) -> Option<CommandHandler> {
        self.handlers.get(name).copied()
    }

    /// Registered command names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl std::fmt::Debug for CommandTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandTable")
            .field("names", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    #[case("select-autocomplete", CoreCommand::SelectAutocomplete)]
    #[case("select-synonym", CoreCommand::SelectSynonym)]
    #[case("inject", CoreCommand::Inject)]
    #[case("open-url", CoreCommand::OpenUrl)]
    #[case("reset", CoreCommand::Reset)]
    #[case("toggle-autoindent", CoreCommand::ToggleAutoindent)]
    #[case("select-eval", CoreCommand::SelectEval)]
    fn command_names_parse(#[case] name: &str, #[case] expected: CoreCommand) {
        assert_eq!(CoreCommand::from_str(name).unwrap(), expected);
        assert_eq!(expected.to_string(), name);
    }

    #[test]
    fn default_table_holds_every_command() {
        let table = CommandTable::default();
        for command in CoreCommand::iter() {
            let name: &'static str = command.into();
            assert!(table.get(name).is_some(), "missing {name}");
        }
        assert_eq!(table.names().len(), CoreCommand::iter().count());
    }

    #[test]
    fn register_adds_commands() {
        let mut table = CommandTable::empty();
        assert!(table.get("shout").is_none());

        table.register("shout", |core, _| core.inject(Some("!")));
        assert_eq!(table.names(), vec!["shout"]);
    }
}
