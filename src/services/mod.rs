//! Collaborators the core calls into but does not implement.

mod evaluator;
mod opener;
mod persistence;

pub use evaluator::{Evaluator, RejectingEvaluator};
#[cfg(feature = "system_opener")]
pub use opener::SystemUrlOpener;
pub use opener::{LoggingUrlOpener, OpenScheduler, UrlOpener};
pub use persistence::{NoopPersistence, Persistence};
