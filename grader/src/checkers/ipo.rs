//! Input / Processing / Output comment check.
//!
//! Lines are trimmed, lowercased and joined before searching, so `# INPUT`
//! and `    #input` both count. Python markers may carry trailing text; Java
//! markers must be alone on their line.

use crate::feedback;
use crate::traits::checker::ConventionChecker;
use crate::types::{Language, SubScore};
use once_cell::sync::Lazy;
use regex::Regex;

struct IpoPatterns {
    input: Regex,
    processing: Regex,
    output: Regex,
    processing_output: Regex,
}

impl IpoPatterns {
    fn build(marker: &str, line_end: &str) -> Self {
        let pattern = |body: &str| {
            Regex::new(&format!(r"(?m)^{marker}[ \t]?{body}{line_end}"))
                .expect("valid IPO pattern")
        };
        Self {
            input: pattern("input"),
            processing: pattern("processing"),
            output: pattern("output"),
            processing_output: pattern(r"processing[ \t]?/[ \t]?output"),
        }
    }
}

static PYTHON_IPO: Lazy<IpoPatterns> = Lazy::new(|| IpoPatterns::build("#", ""));
static JAVA_IPO: Lazy<IpoPatterns> = Lazy::new(|| IpoPatterns::build("//", "$"));

pub struct IpoCommentChecker {
    language: Language,
}

impl IpoCommentChecker {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    fn patterns(&self) -> &'static IpoPatterns {
        match self.language {
            Language::Python => &*PYTHON_IPO,
            Language::Java => &*JAVA_IPO,
        }
    }
}

impl ConventionChecker for IpoCommentChecker {
    fn check(&self, lines: &[String]) -> SubScore {
        let text = lines
            .iter()
            .map(|line| line.trim().to_lowercase())
            .collect::<Vec<_>>()
            .join("\n");

        let p = self.patterns();
        let has_i = p.input.is_match(&text);
        let has_p = p.processing.is_match(&text);
        let has_o = p.output.is_match(&text);
        let has_po = p.processing_output.is_match(&text);

        if !(has_i || has_p || has_o || has_po) {
            return SubScore::new(0.0, feedback::IPO_MISSING);
        }

        let separate = has_i && has_p && has_o;
        let combined = has_i && has_po;
        if !(separate || combined) {
            return SubScore::new(2.0, feedback::IPO_INCOMPLETE);
        }

        SubScore::new(4.0, feedback::IPO_GOOD)
    }
}
