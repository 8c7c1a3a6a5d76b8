use std::io;

/// Failures to drive a child process at all. A child that runs and exits
/// badly, or overruns its timeout, is a [`crate::ProcessOutcome`] instead.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    #[error("failed to start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to write to child stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to collect child output: {0}")]
    Wait(#[source] io::Error),
}
