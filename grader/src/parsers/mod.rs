//! # Parsers
//!
//! Turn captured test-runner output into a [`crate::types::TestTally`].
//! Each parser implements the [`crate::traits::parser::Parser`] trait.
//!
//! - [`pytest_parser`]: `pytest -v` progress lines.
//! - [`junit_parser`]: the JUnit console launcher's summary footer.

pub mod junit_parser;
pub mod pytest_parser;
