//!
//! JUnit Console Summary Parser
//!
//! The JUnit Platform console launcher ends its output with a bracketed
//! summary table followed by a blank line:
//!
//! ```text
//! [         2 tests successful      ]
//! [         1 tests failed          ]
//!
//! ```
//!
//! The passed count is read from the third-last line and the failed count from
//! the second-last, taking the first integer on each. This is tied to the
//! launcher's summary layout; if the layout changes the tally comes out empty
//! and scoring falls back to the no-results guidance.

use crate::traits::parser::Parser;
use crate::types::TestTally;
use once_cell::sync::Lazy;
use regex::Regex;

static FIRST_INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("valid integer pattern"));

/// Offsets from the end of the output, counted in lines.
const PASSED_OFFSET: usize = 3;
const FAILED_OFFSET: usize = 2;

/// First run of digits in `line`, or 0.
fn first_integer(line: &str) -> u32 {
    FIRST_INTEGER
        .find(line)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

pub struct JunitParser;

impl<'a> Parser<&'a str, TestTally> for JunitParser {
    fn parse(&self, output: &'a str) -> TestTally {
        let lines: Vec<&str> = output.lines().collect();
        if lines.len() < PASSED_OFFSET {
            return TestTally::default();
        }
        let passed = first_integer(lines[lines.len() - PASSED_OFFSET]);
        let failed = first_integer(lines[lines.len() - FAILED_OFFSET]);
        TestTally::new(passed, failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scorer::level_from_tally;
    use std::fs;
    use std::path::Path;

    fn load(name: &str) -> String {
        let path = Path::new("src/test_files/junit_parser").join(name);
        fs::read_to_string(path).expect("Failed to read junit fixture")
    }

    #[test]
    fn test_reads_summary_footer() {
        let tally = JunitParser.parse(&load("mixed.txt"));
        assert_eq!(tally, TestTally::new(2, 1));
        assert_eq!(level_from_tally(tally), Some(2.7));
    }

    #[test]
    fn test_all_passed() {
        let tally = JunitParser.parse(&load("all_passed.txt"));
        assert_eq!(tally, TestTally::new(2, 0));
        assert_eq!(level_from_tally(tally), Some(4.0));
    }

    #[test]
    fn test_short_output_is_empty() {
        assert_eq!(JunitParser.parse(""), TestTally::default());
        assert_eq!(JunitParser.parse("[ 1 tests successful ]\n"), TestTally::default());
    }

    #[test]
    fn test_lines_without_numbers_count_zero() {
        let tally = JunitParser.parse("Exception in thread \"main\"\nno summary\nhere\n\n");
        assert_eq!(tally, TestTally::default());
        assert_eq!(level_from_tally(tally), None);
    }

    #[test]
    fn test_footer_without_trailing_blank_line_shifts_offsets() {
        // The launcher always ends with a blank line; without it the
        // offsets land one row early.
        let output = "[ 3 tests found ]\n[ 2 tests successful ]\n[ 1 tests failed ]";
        assert_eq!(JunitParser.parse(output), TestTally::new(3, 2));
    }

    #[test]
    fn test_first_integer_only() {
        assert_eq!(first_integer("[  12 tests successful 34 ]"), 12);
        assert_eq!(first_integer("none"), 0);
    }
}
