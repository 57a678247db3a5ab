/// Receives the buffer after every content change.
///
/// Fire and forget: the core never looks at the outcome, implementations
/// report their own failures.
pub trait Persistence: Send {
    /// Commit the current document text
    fn commit(&mut self, text: &str);
}

/// Persistence that keeps nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopPersistence;

impl Persistence for NoopPersistence {
    fn commit(&mut self, _text: &str) {}
}
