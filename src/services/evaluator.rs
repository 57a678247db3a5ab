/// Sandbox evaluating a selected snippet of text.
pub trait Evaluator: Send {
    /// The printable result of evaluating `snippet`, or why it failed
    fn evaluate(&mut self, snippet: &str) -> Result<String, String>;
}

/// Evaluator for hosts without a sandbox, rejects every snippet
#[derive(Debug, Default, Clone, Copy)]
pub struct RejectingEvaluator;

impl Evaluator for RejectingEvaluator {
    fn evaluate(&mut self, _snippet: &str) -> Result<String, String> {
        Err("no evaluator configured".to_string())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rejecting_evaluator_rejects() {
        assert!(RejectingEvaluator.evaluate("1 + 1").is_err());
    }
}
