//! # Types Module
//!
//! Core data structures shared across the grading engine.

use serde::{Deserialize, Serialize};

/// Lowest and highest rubric levels.
pub const MIN_LEVEL: f64 = 0.0;
pub const MAX_LEVEL: f64 = 4.0;

/// The outcome of one grading check: a rubric level in `[0, 4]` and the
/// feedback shown to the student for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubScore {
    pub level: f64,
    pub comment: String,
}

impl SubScore {
    pub fn new(level: f64, comment: impl Into<String>) -> Self {
        Self {
            level: level.clamp(MIN_LEVEL, MAX_LEVEL),
            comment: comment.into(),
        }
    }
}

/// The toolchains the engine knows how to grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Interpreted strategy: docstring headers, snake_case, `#` comments, pytest.
    Python,
    /// Compiled strategy: `/** */` headers, camelCase, `//` comments, javac + JUnit.
    Java,
}

impl Language {
    /// Maps a class identity onto its toolchain. The interpreted class gets
    /// Python; every other class gets Java.
    pub fn for_class(class_id: i64, interpreted_class_id: i64) -> Self {
        if class_id == interpreted_class_id {
            Language::Python
        } else {
            Language::Java
        }
    }

    /// Marker that starts a single-line comment.
    pub fn line_comment(self) -> &'static str {
        match self {
            Language::Python => "#",
            Language::Java => "//",
        }
    }
}

/// Pass/fail counts scraped from a test runner's output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TestTally {
    pub passed: u32,
    pub failed: u32,
}

impl TestTally {
    pub fn new(passed: u32, failed: u32) -> Self {
        Self { passed, failed }
    }

    pub fn total(&self) -> u32 {
        self.passed + self.failed
    }
}
