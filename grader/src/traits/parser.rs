//! Parser Trait
//!
//! [`Parser`] is the interface for turning raw text captured from a toolchain
//! into a typed result. Parsers are pure functions over text, so they are
//! tested with captured output fixtures instead of live processes.
//!
//! # Example
//!
//! ```rust
//! use grader::traits::parser::Parser;
//! use grader::types::TestTally;
//!
//! struct CountOks;
//!
//! impl<'a> Parser<&'a str, TestTally> for CountOks {
//!     fn parse(&self, output: &'a str) -> TestTally {
//!         TestTally::new(output.matches("ok").count() as u32, 0)
//!     }
//! }
//!
//! assert_eq!(CountOks.parse("ok ok").passed, 2);
//! ```

/// Parses `Input` into `Output`.
///
/// Output that does not look like the expected format yields an empty result
/// rather than an error; scoring decides what an empty result means.
pub trait Parser<Input, Output> {
    fn parse(&self, input: Input) -> Output;
}
