//!
//! Pytest Output Parser
//!
//! Counts per-test result lines in `pytest -v` output. A result line is one
//! that carries a progress marker such as `[ 50%]`; of those, lines containing
//! `PASSED` and `FAILED` are tallied. Summary sections (`FAILURES`, the short
//! test summary) carry no progress marker and are ignored.

use crate::traits::parser::Parser;
use crate::types::TestTally;
use once_cell::sync::Lazy;
use regex::Regex;

static PROGRESS_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\s*\d+%\]").expect("valid progress pattern"));

pub struct PytestParser;

impl<'a> Parser<&'a str, TestTally> for PytestParser {
    fn parse(&self, output: &'a str) -> TestTally {
        output
            .lines()
            .filter(|line| PROGRESS_MARKER.is_match(line))
            .fold(TestTally::default(), |mut tally, line| {
                if line.contains("PASSED") {
                    tally.passed += 1;
                }
                if line.contains("FAILED") {
                    tally.failed += 1;
                }
                tally
            })
    }
}
