//! Grader Error Types
//!
//! [`GraderError`] covers the conditions that abort a grading pass instead of
//! degrading a single check. Ordinary student mistakes (timeouts, compile
//! errors, missing header comments) never surface here; they become a low
//! [`crate::types::SubScore`] with feedback.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum GraderError {
    /// Unexpected I/O failure (anything other than a missing submission).
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The instructor has not uploaded the reference tests for an assignment.
    #[error("reference test for `{assignment}` not found at {}", expected.display())]
    MissingReferenceTest { assignment: String, expected: PathBuf },

    /// A toolchain executable could not be started at all.
    #[error(transparent)]
    Runner(#[from] code_runner::RunnerError),

    /// Configuration file is unreadable or malformed.
    #[error("invalid grader configuration: {0}")]
    Config(String),

    /// A pattern built at runtime failed to compile.
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),
}

impl GraderError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        GraderError::Io {
            path: path.into(),
            source,
        }
    }
}
