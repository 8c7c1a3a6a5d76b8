//! Grading Strategy Trait
//!
//! [`GradingStrategy`] is the contract shared by the interpreted and compiled
//! graders. Implementors provide the four checks; [`GradingStrategy::grade_student`]
//! runs them in a fixed order and aggregates the result.

use crate::error::GraderError;
use crate::report::GradeReport;
use crate::submission::Submission;
use crate::types::{Language, SubScore};
use async_trait::async_trait;
use tracing::info;

#[async_trait]
pub trait GradingStrategy: Send + Sync {
    fn language(&self) -> Language;

    fn submission(&self) -> &Submission;

    /// Presence and format of the header comment block.
    fn grade_header_comments(&self) -> SubScore;

    /// Variable naming convention.
    fn grade_var_names(&self) -> SubScore;

    /// Input / Processing / Output comments.
    fn grade_ipo_comments(&self) -> SubScore;

    /// Runs the reference tests against the submission.
    ///
    /// Student problems (timeouts, compile errors, no results) are a low
    /// [`SubScore`]; `Err` is reserved for grader-side failures such as a
    /// missing reference test or a toolchain that cannot be started.
    async fn grade_unit_test(&self) -> Result<SubScore, GraderError>;

    /// Grades style and correctness and combines them into one report.
    ///
    /// An unreadable submission short-circuits to a level-0 report.
    async fn grade_student(&self) -> Result<GradeReport, GraderError> {
        let submission = self.submission();
        if !submission.is_readable() {
            info!(path = %submission.path().display(), "submission unreadable, level 0");
            return Ok(GradeReport::unreadable());
        }

        let header = self.grade_header_comments();
        let ipo = self.grade_ipo_comments();
        let variables = self.grade_var_names();
        let correctness = self.grade_unit_test().await?;

        let report = GradeReport::assemble(header, ipo, variables, correctness);
        info!(
            language = ?self.language(),
            file = %submission.file_name(),
            header = report.header.level,
            ipo = report.ipo.level,
            variables = report.variables.level,
            correctness = report.correctness.level,
            level = report.level,
            "graded submission"
        );
        Ok(report)
    }
}
