//! Correctness run for Java submissions.
//!
//! Three sequential steps, each bounded by the configured timeout:
//!
//! 1. `javac <File>.java` on its own, so a student's compile error is
//!    reported without noise from the reference test.
//! 2. `javac -cp <jar> <File>.java Test<File>.java`.
//! 3. `java -jar <jar> -cp . -c Test<File>` and parse the console summary.
//!
//! The first step that fails ends the run with level 1.

use crate::config::GraderConfig;
use crate::error::GraderError;
use crate::feedback;
use crate::parsers::junit_parser::JunitParser;
use crate::runners::staging::{ReferenceTest, stage_reference_test};
use crate::sanitize::PathSanitizer;
use crate::scorer::level_from_tally;
use crate::submission::Submission;
use crate::traits::parser::Parser;
use crate::types::{Language, SubScore};
use code_runner::{CommandSpec, ProcessOutcome, run_command};
use std::path::Path;
use tracing::{debug, warn};

/// Console launcher result: its stdout, or the score that ends the run.
enum Console {
    Output(String),
    Stop(SubScore),
}

struct JunitRun<'a> {
    submission: &'a Submission,
    config: &'a GraderConfig,
    sanitizer: PathSanitizer,
    jar: String,
}

impl JunitRun<'_> {
    fn command(&self, program: &str) -> CommandSpec {
        CommandSpec::new(program, self.submission.dir()).timeout(self.config.timeout())
    }

    /// `Some` when the submission does not compile.
    async fn compile_submission(&self) -> Result<Option<SubScore>, GraderError> {
        let spec = self
            .command(&self.config.javac_command)
            .arg(self.submission.file_name());

        Ok(match run_command(&spec).await? {
            ProcessOutcome::Success { .. } => None,
            ProcessOutcome::Timeout => {
                warn!(file = %self.submission.file_name(), "javac timed out");
                Some(SubScore::new(1.0, feedback::COMPILER_TIMEOUT))
            }
            ProcessOutcome::NonZeroExit { stderr, .. } => {
                warn!(file = %self.submission.file_name(), "submission does not compile");
                let stderr = self.sanitizer.clean(&stderr);
                Some(SubScore::new(1.0, feedback::compile_error(&stderr)))
            }
        })
    }

    async fn compile_with_tests(
        &self,
        reference: &ReferenceTest,
    ) -> Result<Option<SubScore>, GraderError> {
        let spec = self
            .command(&self.config.javac_command)
            .args(["-cp", self.jar.as_str()])
            .arg(self.submission.file_name())
            .arg(&reference.file_name);

        Ok(match run_command(&spec).await? {
            ProcessOutcome::Success { .. } => None,
            ProcessOutcome::Timeout => {
                warn!(test = %reference.file_name, "javac with reference test timed out");
                Some(SubScore::new(1.0, feedback::LOOP_OR_RECURSION_TIMEOUT))
            }
            ProcessOutcome::NonZeroExit { stderr, .. } => {
                warn!(test = %reference.file_name, "reference test does not compile");
                Some(SubScore::new(1.0, self.sanitizer.clean(&stderr)))
            }
        })
    }

    async fn run_console(&self, reference: &ReferenceTest) -> Result<Console, GraderError> {
        let spec = self.command(&self.config.java_command).args([
            "-jar",
            self.jar.as_str(),
            "-cp",
            ".",
            "-c",
            reference.class_name(),
            "--disable-banner",
            "--disable-ansi-colors",
        ]);

        // The launcher exits non-zero when any test fails; the summary is
        // still on stdout.
        Ok(match run_command(&spec).await? {
            ProcessOutcome::Timeout => {
                warn!(test = %reference.class_name(), "JUnit run timed out");
                Console::Stop(SubScore::new(1.0, feedback::LOOP_OR_RECURSION_TIMEOUT))
            }
            ProcessOutcome::Success { stdout, .. } | ProcessOutcome::NonZeroExit { stdout, .. } => {
                Console::Output(stdout)
            }
        })
    }
}

/// Stages `Test<File>.java`, compiles and runs it, and scores the pass ratio.
pub async fn run_junit(
    submission: &Submission,
    config: &GraderConfig,
) -> Result<SubScore, GraderError> {
    let reference =
        stage_reference_test(submission, &config.java_tests_dir, &config.java_test_prefix)
            .await?;

    let grading_root = submission.grading_root();
    let run = JunitRun {
        submission,
        config,
        sanitizer: PathSanitizer::new(&grading_root)?,
        jar: jar_argument(&config.junit_jar_path(&grading_root)),
    };

    if let Some(score) = run.compile_submission().await? {
        return Ok(score);
    }
    if let Some(score) = run.compile_with_tests(&reference).await? {
        return Ok(score);
    }
    let stdout = match run.run_console(&reference).await? {
        Console::Stop(score) => return Ok(score),
        Console::Output(stdout) => stdout,
    };

    let tally = JunitParser.parse(&stdout);
    debug!(passed = tally.passed, failed = tally.failed, "junit tally");

    match level_from_tally(tally) {
        Some(level) => Ok(SubScore::new(level, run.sanitizer.clean(&stdout))),
        None => {
            warn!(file = %submission.file_name(), "no JUnit results found");
            Ok(SubScore::new(1.0, feedback::no_test_results(Language::Java)))
        }
    }
}

/// The jar resolved against the process working directory, since every
/// step runs inside the submission directory.
fn jar_argument(jar: &Path) -> String {
    std::path::absolute(jar)
        .unwrap_or_else(|_| jar.to_path_buf())
        .to_string_lossy()
        .into_owned()
}
