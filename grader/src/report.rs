//! # Grade Report Module
//!
//! The result of one grading pass: the weighted level, the four sub-scores,
//! and the section-bannered comment text shown to the student.
//!
//! ## Comment layout
//!
//! ```text
//! =============================== Grading Comments ===============================
//! <header comment><ipo comment>
//! ============================ Grading Variable Names ============================
//! <variable name comment>
//! ============================= Grading Correctness ==============================
//! <correctness comment>
//! ```
//!
//! Callers persist `level` and `comments`; the engine keeps no history.

use crate::feedback;
use crate::scorer::weighted_level;
use crate::types::SubScore;
use chrono::Utc;
use serde::Serialize;

/// Width of the `=` rule each section banner is centred in.
pub const BANNER_WIDTH: usize = 80;

pub const COMMENTS_TITLE: &str = "Grading Comments";
pub const VARIABLES_TITLE: &str = "Grading Variable Names";
pub const CORRECTNESS_TITLE: &str = "Grading Correctness";

/// Centres ` title ` in an 80-column rule of `=` and ends it with a newline.
pub fn banner(title: &str) -> String {
    format!("{:=^width$}\n", format!(" {title} "), width = BANNER_WIDTH)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeReport {
    /// Weighted level in `[0, 4]`, one decimal place.
    pub level: f64,
    /// Full student-facing report.
    pub comments: String,
    pub header: SubScore,
    pub ipo: SubScore,
    pub variables: SubScore,
    pub correctness: SubScore,
    /// RFC 3339 timestamp of when the pass finished.
    pub graded_at: String,
}

impl GradeReport {
    /// Combines the four sub-scores into the weighted level and report text.
    pub fn assemble(
        header: SubScore,
        ipo: SubScore,
        variables: SubScore,
        correctness: SubScore,
    ) -> Self {
        let level = weighted_level(header.level, ipo.level, variables.level, correctness.level);

        let mut comments = banner(COMMENTS_TITLE);
        comments.push_str(&header.comment);
        comments.push_str(&ipo.comment);
        comments.push_str(&banner(VARIABLES_TITLE));
        comments.push_str(&variables.comment);
        comments.push_str(&banner(CORRECTNESS_TITLE));
        comments.push_str(&correctness.comment);

        Self {
            level,
            comments,
            header,
            ipo,
            variables,
            correctness,
            graded_at: Utc::now().to_rfc3339(),
        }
    }

    /// A level-0 report carrying one message and no section banners.
    pub fn failed(message: impl Into<String>) -> Self {
        let message = message.into();
        let zero = || SubScore::new(0.0, "");
        Self {
            level: 0.0,
            comments: message,
            header: zero(),
            ipo: zero(),
            variables: zero(),
            correctness: zero(),
            graded_at: Utc::now().to_rfc3339(),
        }
    }

    /// The submission file could not be read.
    pub fn unreadable() -> Self {
        Self::failed(feedback::COULD_NOT_READ)
    }

    /// The reference tests for `assignment` are missing.
    pub fn misconfigured(assignment: &str) -> Self {
        Self::failed(feedback::grader_misconfigured(assignment))
    }
}
