use std::fmt::Display;
use thiserror::Error;

/// Every failure the core can report.
///
/// None of these are fatal: the engine logs them and degrades to a no-op
/// so the buffer always stays intact.
#[derive(Error, Debug)]
pub enum ScribeErrorVariants {
    /// A `r/.../` search body that does not compile
    #[error("invalid search pattern `{pattern}`: {source}")]
    PatternError {
        /// The regex body as supplied by the user
        pattern: String,

        /// Compilation error reported by the regex engine
        source: regex::Error,
    },

    /// The evaluation sandbox rejected the selected snippet
    #[error("evaluation failed: {0}")]
    EvaluationError(String),

    /// A line id or offset outside of the current buffer
    #[error("{what} {index} is out of bounds (limit {limit})")]
    BoundsViolation {
        /// What kind of index was supplied
        what: &'static str,

        /// The offending index
        index: usize,

        /// Exclusive upper bound that was violated
        limit: usize,
    },

    /// No handler is registered under this command name
    #[error("unknown command `{0}`")]
    UnknownCommand(String),

    /// The command needs an argument that was not supplied
    #[error("command `{0}` requires an argument")]
    MissingArgument(&'static str),

    /// I/O error from a collaborator
    #[error("I/O error: {0}")]
    IOError(std::io::Error),
}

/// separate struct to keep the variants open for extension
#[derive(Debug)]
pub struct ScribeError(pub ScribeErrorVariants);

impl ScribeError {
    pub(crate) fn line_out_of_bounds(id: usize, num_lines: usize) -> Self {
        Self(ScribeErrorVariants::BoundsViolation {
            what: "line id",
            index: id,
            limit: num_lines,
        })
    }
}

impl From<ScribeErrorVariants> for ScribeError {
    fn from(variant: ScribeErrorVariants) -> Self {
        Self(variant)
    }
}

impl From<std::io::Error> for ScribeError {
    fn from(err: std::io::Error) -> Self {
        Self(ScribeErrorVariants::IOError(err))
    }
}

impl Display for ScribeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
impl std::error::Error for ScribeError {}

/// Standard [`std::result::Result`], with [`ScribeError`] as the error variant
pub type Result<T> = std::result::Result<T, ScribeError>;

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bounds_violation_names_the_index() {
        let err = ScribeError::line_out_of_bounds(7, 3);
        assert_eq!(err.to_string(), "line id 7 is out of bounds (limit 3)");
    }

    #[test]
    fn io_errors_convert() {
        let err: ScribeError = std::io::Error::other("no handler").into();
        assert!(matches!(err.0, ScribeErrorVariants::IOError(_)));
    }
}
