//! Reference-test staging.
//!
//! Test runners expect the reference test next to the code under test, so the
//! instructor's copy is located by convention and copied into the submission
//! directory before anything runs:
//!
//! ```text
//! <grading root>/
//!     tests/test_hello.py          <- reference test (python_tests_dir)
//!     tests-java/TestHello.java    <- reference test (java_tests_dir)
//!     1310455/
//!         hello.py                 <- submission
//!         test_hello.py            <- staged copy
//! ```

use crate::error::GraderError;
use crate::submission::Submission;
use std::path::PathBuf;
use tracing::{debug, error};

/// A reference test copied next to a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceTest {
    /// Instructor's copy.
    pub source: PathBuf,
    /// Copy inside the submission directory.
    pub staged: PathBuf,
    /// File name of the staged copy, e.g. `test_hello.py` or `TestHello.java`.
    pub file_name: String,
}

impl ReferenceTest {
    /// File name without extension; the JUnit class to select.
    pub fn class_name(&self) -> &str {
        self.file_name
            .rsplit_once('.')
            .map(|(stem, _)| stem)
            .unwrap_or(&self.file_name)
    }
}

/// Copies `<root>/<tests_dir>/<prefix><file name>` into the submission
/// directory, overwriting any earlier copy.
pub async fn stage_reference_test(
    submission: &Submission,
    tests_dir: &str,
    prefix: &str,
) -> Result<ReferenceTest, GraderError> {
    let file_name = format!("{prefix}{}", submission.file_name());
    let source = submission.grading_root().join(tests_dir).join(&file_name);
    let staged = submission.dir().join(&file_name);

    if !tokio::fs::try_exists(&source).await.unwrap_or(false) {
        error!(
            assignment = %submission.stem(),
            expected = %source.display(),
            "reference test missing"
        );
        return Err(GraderError::MissingReferenceTest {
            assignment: submission.stem(),
            expected: source,
        });
    }

    tokio::fs::copy(&source, &staged)
        .await
        .map_err(|e| GraderError::io(&staged, e))?;
    debug!(from = %source.display(), to = %staged.display(), "staged reference test");

    Ok(ReferenceTest {
        source,
        staged,
        file_name,
    })
}
