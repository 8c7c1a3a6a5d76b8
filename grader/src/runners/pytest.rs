//! Correctness run for Python submissions.

use crate::config::GraderConfig;
use crate::error::GraderError;
use crate::feedback;
use crate::parsers::pytest_parser::PytestParser;
use crate::runners::staging::stage_reference_test;
use crate::sanitize::PathSanitizer;
use crate::scorer::level_from_tally;
use crate::submission::Submission;
use crate::traits::parser::Parser;
use crate::types::{Language, SubScore};
use code_runner::{CommandSpec, ProcessOutcome, run_command};
use tracing::{debug, warn};

/// Stages `test_<file>`, runs pytest on it in the submission directory and
/// scores the pass ratio.
///
/// pytest exits non-zero whenever a test fails, so the exit status is ignored
/// and only the captured stdout is scored.
pub async fn run_pytest(
    submission: &Submission,
    config: &GraderConfig,
) -> Result<SubScore, GraderError> {
    let reference = stage_reference_test(
        submission,
        &config.python_tests_dir,
        &config.python_test_prefix,
    )
    .await?;

    let spec = CommandSpec::new(&config.pytest_command, submission.dir())
        .args(config.pytest_args.iter().cloned())
        .arg(&reference.file_name)
        .timeout(config.timeout());

    let stdout = match run_command(&spec).await? {
        ProcessOutcome::Timeout => {
            warn!(file = %submission.file_name(), "pytest timed out");
            return Ok(SubScore::new(1.0, feedback::INPUT_OR_LOOP_TIMEOUT));
        }
        ProcessOutcome::Success { stdout, .. } | ProcessOutcome::NonZeroExit { stdout, .. } => {
            stdout
        }
    };

    let tally = PytestParser.parse(&stdout);
    debug!(passed = tally.passed, failed = tally.failed, "pytest tally");

    match level_from_tally(tally) {
        Some(level) => {
            let sanitizer = PathSanitizer::new(&submission.grading_root())?;
            Ok(SubScore::new(level, sanitizer.clean(&stdout)))
        }
        None => {
            warn!(file = %submission.file_name(), "no pytest results found");
            Ok(SubScore::new(1.0, feedback::no_test_results(Language::Python)))
        }
    }
}
