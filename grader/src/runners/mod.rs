//!
//! Correctness Runners
//!
//! Stage the instructor's reference test next to a submission, run the
//! language's test toolchain through [`code_runner`], and score what it
//! printed. Toolchain text is passed through [`crate::sanitize::PathSanitizer`]
//! before it becomes feedback.

pub mod junit;
pub mod pytest;
pub mod staging;

pub use junit::run_junit;
pub use pytest::run_pytest;
pub use staging::{ReferenceTest, stage_reference_test};
