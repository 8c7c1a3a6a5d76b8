//! Output check.
//!
//! Runs a Python submission directly with a fixed stdin and compares what it
//! prints against an expected output, for assignments graded on behaviour
//! rather than on a reference test.

use crate::config::GraderConfig;
use crate::error::GraderError;
use crate::feedback;
use crate::sanitize::PathSanitizer;
use crate::submission::Submission;
use crate::types::SubScore;
use code_runner::{CommandSpec, ProcessOutcome, run_command};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// How the expected output is compared with the program's stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    /// Expected text appears anywhere in stdout.
    #[default]
    Contains,
    /// Expected text equals stdout with surrounding whitespace removed.
    Exact,
}

/// Runs `python_command <file>` in the submission directory and scores its
/// stdout against `expected`.
pub async fn grade_io(
    path: &Path,
    input: Option<&str>,
    expected: &str,
    match_type: MatchType,
    config: &GraderConfig,
) -> Result<SubScore, GraderError> {
    let submission = Submission::from_lines(path, Vec::new());
    let mut spec = CommandSpec::new(&config.python_command, submission.dir())
        .arg(submission.file_name())
        .timeout(config.timeout());
    if let Some(input) = input {
        spec = spec.stdin(input);
    }

    let stdout = match run_command(&spec).await? {
        ProcessOutcome::Timeout => {
            warn!(file = %submission.file_name(), "program timed out");
            return Ok(SubScore::new(1.0, feedback::IO_TIMEOUT));
        }
        ProcessOutcome::NonZeroExit { stderr, .. } => {
            warn!(file = %submission.file_name(), "program exited with an error");
            let sanitizer = PathSanitizer::new(&submission.grading_root())?;
            return Ok(SubScore::new(1.0, sanitizer.clean(&stderr)));
        }
        ProcessOutcome::Success { stdout, .. } => stdout,
    };

    let matched = match match_type {
        MatchType::Contains => stdout.contains(expected),
        MatchType::Exact => stdout.trim() == expected,
    };
    debug!(?match_type, matched, "compared program output");

    if matched {
        return Ok(SubScore::new(4.0, feedback::IO_MATCH));
    }
    let comment = match match_type {
        MatchType::Contains => feedback::io_mismatch(expected, &stdout),
        MatchType::Exact => feedback::io_not_exact(expected, &stdout),
    };
    Ok(SubScore::new(1.0, comment))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_type_deserializes_lowercase() {
        let parsed: MatchType = serde_json::from_str("\"exact\"").unwrap();
        assert_eq!(parsed, MatchType::Exact);
        assert_eq!(MatchType::default(), MatchType::Contains);
    }
}
