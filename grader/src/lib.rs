//! # Grader Library
//!
//! Automated grading of single-file student submissions for an introductory
//! programming course. One grading pass reads the submission, runs three
//! static convention checks and one correctness run against an
//! instructor-supplied reference test, and combines them into a weighted
//! level with a student-facing report.
//!
//! ## Key Concepts
//! - **Strategy**: one per toolchain. [`strategy::InterpretedGrader`] grades
//!   Python with pytest; [`strategy::CompiledGrader`] grades Java with javac
//!   and JUnit. [`strategy::resolve_strategy`] picks one from the class id.
//! - **Sub-score**: a level in `[0, 4]` plus feedback, one per check.
//! - **Report**: [`report::GradeReport`], the weighted level
//!   `(header + ipo + variables + 4 * correctness) / 7` and the bannered text.
//!
//! ## Example
//!
//! ```no_run
//! use grader::config::GraderConfig;
//! use std::path::Path;
//!
//! # async fn run() -> Result<(), grader::error::GraderError> {
//! let config = GraderConfig::from_env();
//! let report = grader::grade_submission(1, Path::new("/srv/code/1310455/hello.py"), &config).await?;
//! println!("{} {}", report.level, report.comments);
//! # Ok(())
//! # }
//! ```

pub mod checkers;
pub mod config;
pub mod error;
pub mod feedback;
pub mod io_check;
pub mod parsers;
pub mod report;
pub mod runners;
pub mod sanitize;
pub mod scorer;
pub mod strategy;
pub mod submission;
pub mod traits;
pub mod types;

use crate::config::GraderConfig;
use crate::error::GraderError;
use crate::report::GradeReport;
use crate::strategy::resolve_strategy;
use crate::traits::strategy::GradingStrategy;
use std::path::Path;
use tracing::{error, info};

/// Grades the submission at `path` for the class `class_id`.
///
/// A missing reference test is the instructor's problem, so the student gets a
/// level-0 report saying the grader is misconfigured. Any other
/// [`GraderError`] is returned to the caller.
pub async fn grade_submission(
    class_id: i64,
    path: &Path,
    config: &GraderConfig,
) -> Result<GradeReport, GraderError> {
    info!(class_id, path = %path.display(), "grading submission");
    let strategy = resolve_strategy(class_id, path, config)?;

    match strategy.grade_student().await {
        Ok(report) => Ok(report),
        Err(GraderError::MissingReferenceTest { assignment, expected }) => {
            error!(
                %assignment,
                expected = %expected.display(),
                "grader misconfigured: reference test missing"
            );
            Ok(GradeReport::misconfigured(&assignment))
        }
        Err(e) => Err(e),
    }
}
