//! Header-comment check.
//!
//! The block comment must open on the first line of the file (after blank
//! lines, and for Java after `import` lines too) and carry, on fixed lines
//! after the opening delimiter:
//!
//! | offset | Python              | Java                      |
//! |--------|---------------------|---------------------------|
//! | 0      | `"""`               | `/**`                     |
//! | 1      | `author: NAME`      | ` * @author NAME`         |
//! | 2      | `date: DD/MM/YYYY`  | ` * @date DD/MM/YYYY`     |
//! | 3      | description         | ` * description`          |
//! | 4      | `"""`               | ` */`                     |
//!
//! Offsets are fixed. The closing delimiter is only looked for at offset 4.

use crate::feedback;
use crate::traits::checker::ConventionChecker;
use crate::types::{Language, SubScore};
use once_cell::sync::Lazy;
use regex::Regex;

const DOUBLE_QUOTE_DOCSTRING: &str = "\"\"\"";
const SINGLE_QUOTE_DOCSTRING: &str = "'''";
const JAVADOC_OPEN: &str = "/**";
const JAVADOC_CLOSE: &str = "*/";

static PY_AUTHOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^author: [a-zA-Z]+").expect("valid author pattern"));
static PY_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^date: \d\d/\d\d/\d\d\d\d").expect("valid date pattern"));
static PY_DESCRIPTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\w+").expect("valid description pattern"));

static JAVA_AUTHOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ ?\* @?[Aa]uthor:? [a-zA-Z]+").expect("valid author pattern"));
static JAVA_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^ ?\* @?[Dd]ate:? \d\d/\d\d/\d\d\d\d").expect("valid date pattern")
});
static JAVA_DESCRIPTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ ?\* \w+").expect("valid description pattern"));

pub struct HeaderCommentChecker {
    language: Language,
}

impl HeaderCommentChecker {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    fn is_preamble(&self, line: &str) -> bool {
        match self.language {
            Language::Python => line.trim().is_empty(),
            Language::Java => line.trim().is_empty() || line.contains("import"),
        }
    }

    fn metadata_patterns(&self) -> [&'static Regex; 3] {
        match self.language {
            Language::Python => [&*PY_AUTHOR, &*PY_DATE, &*PY_DESCRIPTION],
            Language::Java => [&*JAVA_AUTHOR, &*JAVA_DATE, &*JAVA_DESCRIPTION],
        }
    }

    fn is_closed(&self, closing_line: &str) -> bool {
        match self.language {
            Language::Python => closing_line == DOUBLE_QUOTE_DOCSTRING,
            Language::Java => closing_line.replace(' ', "").contains(JAVADOC_CLOSE),
        }
    }
}

/// Line `i` of the header, or `""` past the end of the file.
fn line_at(body: &[String], i: usize) -> &str {
    body.get(i).map(String::as_str).unwrap_or("")
}

impl ConventionChecker for HeaderCommentChecker {
    fn check(&self, lines: &[String]) -> SubScore {
        let start = lines
            .iter()
            .position(|line| !self.is_preamble(line))
            .unwrap_or(lines.len());
        let body = &lines[start..];

        let Some(first) = body.first() else {
            return SubScore::new(0.0, feedback::BLANK_FILE);
        };

        match (self.language, first.as_str()) {
            (Language::Python, DOUBLE_QUOTE_DOCSTRING) | (Language::Java, JAVADOC_OPEN) => {}
            (Language::Python, SINGLE_QUOTE_DOCSTRING) => {
                return SubScore::new(2.0, feedback::SINGLE_QUOTE_DOCSTRING);
            }
            (Language::Python, _) => return SubScore::new(0.0, feedback::DOCSTRING_MISSING),
            (Language::Java, _) => return SubScore::new(0.0, feedback::HEADER_MISSING),
        }

        let [author, date, description] = self.metadata_patterns();
        let mut comment = String::new();
        if !author.is_match(line_at(body, 1)) {
            comment.push_str(feedback::MISSING_AUTHOR);
        }
        if !date.is_match(line_at(body, 2)) {
            comment.push_str(feedback::MISSING_DATE);
        }
        if !description.is_match(line_at(body, 3)) {
            comment.push_str(feedback::MISSING_DESCRIPTION);
        }
        if !comment.is_empty() {
            return SubScore::new(2.0, comment);
        }

        if !self.is_closed(line_at(body, 4)) {
            return SubScore::new(2.0, feedback::HEADER_NOT_CLOSED);
        }

        SubScore::new(4.0, feedback::HEADER_GOOD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn to_lines(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|s| s.to_string()).collect()
    }

    fn fixture(path: &str) -> Vec<String> {
        fs::read_to_string(format!("src/test_files/{path}"))
            .expect("fixture exists")
            .lines()
            .map(str::to_owned)
            .collect()
    }

    fn python(lines: &[String]) -> SubScore {
        HeaderCommentChecker::new(Language::Python).check(lines)
    }

    fn java(lines: &[String]) -> SubScore {
        HeaderCommentChecker::new(Language::Java).check(lines)
    }

    #[test]
    fn python_without_docstring_is_level_0() {
        let score = python(&to_lines(&["print('hey')"]));
        assert_eq!(score.level, 0.0);
        assert!(score.comment.contains("Docstrings are missing"));
    }

    #[test]
    fn blank_file_is_level_0() {
        let score = python(&to_lines(&["", "   ", ""]));
        assert_eq!(score.level, 0.0);
        assert!(score.comment.contains("blank"));

        assert_eq!(java(&[]).level, 0.0);
    }

    #[test]
    fn python_bad_metadata_is_level_2() {
        let score = python(&fixture("python/bad_comments.py"));
        assert_eq!(score.level, 2.0);
        assert!(score.comment.contains("Missing"));
    }

    #[test]
    fn python_single_quotes_are_level_2() {
        let score = python(&fixture("python/bad_comments2.py"));
        assert_eq!(score.level, 2.0);
        assert!(score.comment.contains("While ''' works"));
    }

    #[test]
    fn python_unclosed_docstring_is_level_2() {
        let score = python(&fixture("python/bad_comments3.py"));
        assert_eq!(score.level, 2.0);
        assert!(score.comment.contains("Header comments not closed"));
    }

    #[test]
    fn python_good_header_is_level_4() {
        let score = python(&fixture("python/hello.py"));
        assert_eq!(score.level, 4.0);
        assert!(score.comment.contains("Header comments are good"));
    }

    #[test]
    fn leading_blank_lines_are_skipped_without_mutating_input() {
        let mut lines = to_lines(&["", ""]);
        lines.extend(fixture("python/hello.py"));
        let before = lines.clone();

        assert_eq!(python(&lines).level, 4.0);
        assert_eq!(lines, before);
    }

    #[test]
    fn each_missing_item_gets_its_own_message() {
        let score = python(&to_lines(&["\"\"\"", "by: me", "date: 1/1/24", "", "\"\"\""]));
        assert_eq!(score.level, 2.0);
        assert!(score.comment.contains("Missing author"));
        assert!(score.comment.contains("Missing date"));
        assert!(score.comment.contains("Missing one sentence description"));
    }

    #[test]
    fn truncated_header_does_not_panic() {
        let score = python(&to_lines(&["\"\"\"", "author: Ada"]));
        assert_eq!(score.level, 2.0);
        assert!(score.comment.contains("Missing date"));
    }

    #[test]
    fn closing_delimiter_is_only_checked_at_fixed_offset() {
        let score = python(&to_lines(&[
            "\"\"\"",
            "author: Ada",
            "date: 14/10/2026",
            "Says hello.",
            "More description.",
            "\"\"\"",
        ]));
        assert_eq!(score.level, 2.0);
        assert!(score.comment.contains("not closed"));
    }

    #[test]
    fn java_without_header_is_level_0() {
        let score = java(&to_lines(&["public class Hello {", "}"]));
        assert_eq!(score.level, 0.0);
        assert!(score.comment.contains("Header comments are missing"));
    }

    #[test]
    fn java_good_header_after_imports_is_level_4() {
        let score = java(&fixture("java/Hello.java"));
        assert_eq!(score.level, 4.0);
        assert!(score.comment.contains("Header comments are good"));
    }

    #[test]
    fn java_accepts_tag_variants() {
        let score = java(&to_lines(&[
            "/**",
            "* Author: Grace",
            " * @date 01/02/2026",
            " * Prints a greeting.",
            "  * /",
        ]));
        assert_eq!(score.level, 4.0);
    }

    #[test]
    fn java_bad_header_is_level_2() {
        let score = java(&fixture("java/BadHeader.java"));
        assert_eq!(score.level, 2.0);
        assert!(score.comment.contains("Missing date"));
    }

    #[test]
    fn java_unclosed_header_is_level_2() {
        let score = java(&to_lines(&[
            "/**",
            " * @author Grace",
            " * @date 01/02/2026",
            " * Prints a greeting.",
            "public class Hello {",
        ]));
        assert_eq!(score.level, 2.0);
        assert!(score.comment.contains("not closed"));
    }

    #[test]
    fn java_single_quote_style_is_not_accepted() {
        let score = java(&to_lines(&["'''", "author: Ada"]));
        assert_eq!(score.level, 0.0);
    }
}
