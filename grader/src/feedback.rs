//! # Feedback
//!
//! Student-facing messages used by the checks and runners. Keeping them in one
//! place keeps the wording consistent between the two strategies.

use crate::types::Language;

pub const BLANK_FILE: &str =
    "Your file is blank... double check WHICH file you've uploaded\n";
pub const COULD_NOT_READ: &str =
    "Could not read file. Double check that you uploaded the right file and try again.\n";

// Header comments
pub const DOCSTRING_MISSING: &str = "Docstrings are missing.\n";
pub const HEADER_MISSING: &str = "Header comments are missing.\n";
pub const SINGLE_QUOTE_DOCSTRING: &str = "While ''' works, class conventions are \"\"\"\n";
pub const MISSING_AUTHOR: &str = "Missing author (or wrong format) in docstring\n";
pub const MISSING_DATE: &str = "Missing date (or wrong format) in docstring\n";
pub const MISSING_DESCRIPTION: &str = "Missing one sentence description of module in docstring\n";
pub const HEADER_NOT_CLOSED: &str =
    "Header comments not closed! Any feedback after this is useless!\n";
pub const HEADER_GOOD: &str = "Header comments are good\n";

// Variable names
pub const VARIABLES_GOOD: &str = "Variable names are good\n";

pub fn bad_variable_names(names: &[String]) -> String {
    format!(
        "There are variable names that do not follow class conventions:\t{}\n",
        names.join(",")
    )
}

// IPO comments
pub const IPO_MISSING: &str = "Missing IPO comments\n";
pub const IPO_INCOMPLETE: &str = "Incomplete or incorrect IPO comments\n";
pub const IPO_GOOD: &str = "IPO comments are good\n";

// Correctness
pub const INPUT_OR_LOOP_TIMEOUT: &str = "\n\nYour code has some kind of infinite loop. Either that or your program is waiting for input that my grader won't give it!";
pub const LOOP_OR_RECURSION_TIMEOUT: &str =
    "I think you have an infinite loop in your code (OR infinite recursion!)";
pub const COMPILER_TIMEOUT: &str = "\n\nError: the compiler did not finish in time.";

pub fn compile_error(stderr: &str) -> String {
    format!("\n\nError: {stderr}")
}

/// Guidance shown when no test results could be found in the runner output.
pub fn no_test_results(language: Language) -> &'static str {
    match language {
        Language::Python => {
            "\n\nTwo possible problems. 1) Your code does not run (try running it in VS Code. If it doesn't run there, it won't run on pycs.) 2) We are in a functions unit and you didn't name your functions correctly. Please double check your function names. 3) You added your functions INSIDE of the main function. `def <func_name>` needs to be at the very left of the screen."
        }
        Language::Java => {
            "\n\nTwo possible problems.\n1) Your code does not run (try running it in Eclipse. If it doesn't run there, it won't run on pycs.\n2) We are in a functions unit and you didn't name your functions correctly. Please double check your function names."
        }
    }
}

/// Shown in place of a grade when the instructor has not uploaded the tests.
pub fn grader_misconfigured(assignment: &str) -> String {
    format!(
        "The grader is not set up correctly for assignment: {assignment}. The reference tests are missing. Please tell your instructor.\n"
    )
}

// Output checks
pub const IO_TIMEOUT: &str = "Your code timed out. Either you have an infinite loop or you are using an input() function without one being required";
pub const IO_MATCH: &str = "The outputs match. Nice!";

pub fn io_mismatch(expected: &str, actual: &str) -> String {
    format!("The output {expected} does not match the output {actual}")
}

pub fn io_not_exact(expected: &str, actual: &str) -> String {
    format!("The output {expected} is not exactly the same as {actual}")
}
