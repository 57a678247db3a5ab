mod base;
mod circular;
mod default;

pub use base::{at_word_boundary, completion_suffix, Dictionary};
pub use circular::SynonymCycle;
pub use default::DefaultDictionary;
