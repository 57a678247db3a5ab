//! # scribe
//! The text manipulation core of a plain-text writing tool
//!
//! The host owns the widget that shows the text. It forwards selection and
//! scroll events and named commands; the core edits the buffer through
//! [`BufferAccess`] and keeps the caret, the selection and the viewport where
//! the user expects them.
//!
//! ## Example
//!
//! ```rust
//! use scribe::{DefaultDictionary, EditorCore};
//!
//! let mut dictionary = DefaultDictionary::default();
//! dictionary.insert_synonyms("quick", vec!["fast".into(), "swift".into()]);
//!
//! let mut core = EditorCore::create().with_dictionary(dictionary).build();
//! core.load("The Quick fox\n  jumps");
//! core.on_selection_change(6, 6);
//!
//! core.dispatch("select-synonym", None).unwrap();
//! assert_eq!(core.text(), "The Swift fox\n  jumps");
//!
//! core.dispatch("inject-line", Some("> ")).unwrap();
//! assert_eq!(core.text(), "> The Swift fox\n  jumps");
//! ```
//!
//! ## What is in here
//!
//! * `[x]` Locating the active word, line and URL around the caret
//! * `[x]` Literal and `r/<regex>/` search over the whole buffer
//! * `[x]` Line, caret and multiline injection with caret preservation
//! * `[x]` Dictionary suggestions and rotating synonyms
//! * `[x]` Delayed URL opening and snippet evaluation through host services
//! * `[ ]` Undo, owned by the host widget

mod result;
pub use result::{Result, ScribeError, ScribeErrorVariants};

mod enums;
pub use enums::{EditCommand, EditCommandDiscriminants, EditType};

mod core_editor;
pub use core_editor::{locator, BufferAccess, Editor, Selection, TextArea, WordLocation};

mod search;
pub use search::{search, Match, SearchPattern};

mod completion;
pub use completion::{
    at_word_boundary, completion_suffix, DefaultDictionary, Dictionary, SynonymCycle,
};

mod services;
#[cfg(feature = "system_opener")]
pub use services::SystemUrlOpener;
pub use services::{
    Evaluator, LoggingUrlOpener, NoopPersistence, OpenScheduler, Persistence, RejectingEvaluator,
    UrlOpener,
};

mod config;
pub use config::{CoreConfig, DEFAULT_INJECTION, FALLBACK_INDENT};

mod engine;
pub use engine::{
    ActiveState, CommandHandler, CommandTable, CoreCommand, EditorCore, EditorCoreBuilder,
};

mod utils;
