//! Strips server paths from toolchain output before it reaches a student.
//!
//! Interpreters and compilers happily print absolute paths in tracebacks and
//! diagnostics. [`PathSanitizer`] rewrites every path under the grading root
//! to its bare file name, so `/srv/code/1310455/hello.py` becomes `hello.py`.
//! Text that contains no such path is returned untouched.

use crate::error::GraderError;
use regex::Regex;
use std::path::Path;

/// Rest of a path fragment after the root; stops at characters that end a
/// path in tool output.
const PATH_TAIL: &str = r#"(?:[/\\][^\s"'`:,;()\[\]<>]*)?"#;

fn ends_fragment(c: char) -> bool {
    c.is_whitespace() || "\"'`:,;()[]<>".contains(c)
}

#[derive(Debug, Clone)]
pub struct PathSanitizer {
    pattern: Option<Regex>,
}

impl PathSanitizer {
    /// Builds a sanitizer for everything under `root`. Both the path as given
    /// and its canonical form are matched.
    pub fn new(root: &Path) -> Result<Self, GraderError> {
        let mut prefixes: Vec<String> = Vec::new();
        for candidate in [Some(root.to_path_buf()), root.canonicalize().ok()]
            .into_iter()
            .flatten()
        {
            let text = candidate.to_string_lossy().trim_end_matches(['/', '\\']).to_string();
            if text.is_empty() || text == "." || text == ".." {
                continue;
            }
            if !prefixes.contains(&text) {
                prefixes.push(text);
            }
        }

        // Longest first so a canonical path is not half-matched by a shorter alias.
        prefixes.sort_by_key(|p| std::cmp::Reverse(p.len()));

        let pattern = if prefixes.is_empty() {
            None
        } else {
            let alternation = prefixes
                .iter()
                .map(|p| regex::escape(p))
                .collect::<Vec<_>>()
                .join("|");
            let regex = Regex::new(&format!("(?:{alternation}){PATH_TAIL}"))
                .map_err(|e| GraderError::InvalidPattern(e.to_string()))?;
            Some(regex)
        };

        Ok(Self { pattern })
    }

    /// Replaces each server path with its last component.
    pub fn clean(&self, text: &str) -> String {
        let Some(pattern) = &self.pattern else {
            return text.to_string();
        };

        pattern
            .replace_all(text, |caps: &regex::Captures| {
                let matched = &caps[0];
                let (start, end) = caps
                    .get(0)
                    .map(|m| (m.start(), m.end()))
                    .unwrap_or((0, text.len()));
                // `code` must not rewrite `barcode/x.py`, and `/srv/code` must
                // not rewrite `/srv/codebase`.
                let glued = |c: Option<char>| c.is_some_and(|c| !ends_fragment(c));
                let glued_left = glued(text[..start].chars().next_back());
                let glued_right = glued(text[end..].chars().next());
                if glued_left || glued_right {
                    return matched.to_string();
                }
                matched
                    .rsplit(['/', '\\'])
                    .find(|part| !part.is_empty())
                    .unwrap_or("")
                    .to_string()
            })
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_traceback_paths_to_file_name() {
        let sanitizer = PathSanitizer::new(Path::new("/srv/pycs/instance/code")).unwrap();
        let stderr = "Traceback (most recent call last):\n  File \"/srv/pycs/instance/code/001310455/hello.py\", line 3, in <module>\nNameError: name 'x' is not defined";

        let cleaned = sanitizer.clean(stderr);

        assert!(cleaned.contains("File \"hello.py\", line 3"));
        assert!(!cleaned.contains("/srv/pycs"));
    }

    #[test]
    fn keeps_line_numbers_after_colon() {
        let sanitizer = PathSanitizer::new(Path::new("/srv/code")).unwrap();
        let cleaned = sanitizer.clean("/srv/code/42/Hello.java:7: error: ';' expected");
        assert_eq!(cleaned, "Hello.java:7: error: ';' expected");
    }

    #[test]
    fn rewrites_every_occurrence() {
        let sanitizer = PathSanitizer::new(Path::new("/srv/code")).unwrap();
        let cleaned =
            sanitizer.clean("rootdir: /srv/code/42\ncollected from /srv/code/tests/test_hello.py");
        assert_eq!(cleaned, "rootdir: 42\ncollected from test_hello.py");
    }

    #[test]
    fn text_without_server_paths_is_unchanged() {
        let sanitizer = PathSanitizer::new(Path::new("/srv/code")).unwrap();
        let text = "hello.py::test_1 PASSED [100%]\n/usr/lib/python3/site.py";
        assert_eq!(sanitizer.clean(text), text);
    }

    #[test]
    fn relative_fragments_are_not_rewritten() {
        let sanitizer = PathSanitizer::new(Path::new(".")).unwrap();
        assert_eq!(sanitizer.clean("./hello.py"), "./hello.py");
    }

    #[test]
    fn sibling_directory_sharing_a_prefix_is_left_alone() {
        let sanitizer = PathSanitizer::new(Path::new("/srv/code")).unwrap();
        assert_eq!(sanitizer.clean("/srv/codebase/x.py"), "/srv/codebase/x.py");
    }

    #[test]
    fn relative_root_only_matches_at_a_fragment_start() {
        let sanitizer = PathSanitizer::new(Path::new("code")).unwrap();
        assert_eq!(sanitizer.clean("see barcode/x.py"), "see barcode/x.py");
        assert_eq!(sanitizer.clean("see code/42/x.py"), "see x.py");
        assert_eq!(sanitizer.clean("File \"code/42/x.py\", line 2"), "File \"x.py\", line 2");
    }

    #[test]
    fn regex_metacharacters_in_root_are_literal() {
        let sanitizer = PathSanitizer::new(Path::new("/srv/code (2024)+")).unwrap();
        assert_eq!(sanitizer.clean("/srv/code (2024)+/7/a.py"), "a.py");
        assert_eq!(sanitizer.clean("/srv/code 2024/7/a.py"), "/srv/code 2024/7/a.py");
    }
}
