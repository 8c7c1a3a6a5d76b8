//! Variable-naming check.
//!
//! A textual heuristic, not a parser: each line is scanned once for an
//! assignment (or, in Java, a declaration) and the first identifier found is
//! checked against the language's casing rule.
//!
//! - Python: snake_case. Every cased letter is lowercase, or every cased
//!   letter is uppercase for constants.
//! - Java: camelCase. No leading capital and no underscore, unless the whole
//!   name is an uppercase constant.

use crate::feedback;
use crate::traits::checker::ConventionChecker;
use crate::types::{Language, SubScore};
use once_cell::sync::Lazy;
use regex::Regex;

/// `name = value`, where the `=` is not part of `==`.
static PY_ASSIGNMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Za-z0-9_]+)\s*=[^=]").expect("valid assignment pattern"));

/// `Type name;` or `Type name = value` at the start of a line.
static JAVA_DECLARATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*[a-zA-Z]+ ([a-zA-Z_$][\w$]*)\s*(?:;|=(?:[^=]|$))")
        .expect("valid declaration pattern")
});

fn has_cased(name: &str) -> bool {
    name.chars().any(|c| c.is_uppercase() || c.is_lowercase())
}

/// At least one cased letter and none of them lowercase.
fn is_all_upper(name: &str) -> bool {
    has_cased(name) && !name.chars().any(char::is_lowercase)
}

/// At least one cased letter and none of them uppercase.
fn is_all_lower(name: &str) -> bool {
    has_cased(name) && !name.chars().any(char::is_uppercase)
}

fn is_snake_case(name: &str) -> bool {
    is_all_upper(name) || is_all_lower(name)
}

fn is_camel_case(name: &str) -> bool {
    if is_all_upper(name) {
        return true;
    }
    let leading_capital = name.chars().next().is_some_and(char::is_uppercase);
    !leading_capital && !name.contains('_')
}

pub struct VariableNameChecker {
    language: Language,
}

impl VariableNameChecker {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// The identifier assigned or declared on `line`, if any.
    fn identifier<'a>(&self, line: &'a str) -> Option<&'a str> {
        let pattern = match self.language {
            Language::Python => &PY_ASSIGNMENT,
            Language::Java => &JAVA_DECLARATION,
        };
        pattern
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    fn follows_convention(&self, name: &str) -> bool {
        match self.language {
            Language::Python => is_snake_case(name),
            Language::Java => is_camel_case(name),
        }
    }
}

impl ConventionChecker for VariableNameChecker {
    fn check(&self, lines: &[String]) -> SubScore {
        let bad: Vec<String> = lines
            .iter()
            .filter_map(|line| self.identifier(line))
            .filter(|name| !self.follows_convention(name))
            .map(str::to_owned)
            .collect();

        if bad.is_empty() {
            SubScore::new(4.0, feedback::VARIABLES_GOOD)
        } else {
            SubScore::new(2.0, feedback::bad_variable_names(&bad))
        }
    }
}
