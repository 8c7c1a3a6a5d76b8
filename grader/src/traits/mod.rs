//!
//! Traits Module
//!
//! The seams of the grading engine.
//!
//! - [`checker`]: a static convention check over a submission's lines.
//! - [`parser`]: extraction of structured results from captured tool output.
//! - [`strategy`]: the per-language grading contract every strategy exposes.

pub mod checker;
pub mod parser;
pub mod strategy;
