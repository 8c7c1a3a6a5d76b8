//! Interpreted-language strategy: Python submissions graded with pytest.

use crate::checkers::{HeaderCommentChecker, IpoCommentChecker, VariableNameChecker};
use crate::config::GraderConfig;
use crate::error::GraderError;
use crate::runners::run_pytest;
use crate::submission::Submission;
use crate::traits::checker::ConventionChecker;
use crate::traits::strategy::GradingStrategy;
use crate::types::{Language, SubScore};
use async_trait::async_trait;

pub struct InterpretedGrader {
    submission: Submission,
    config: GraderConfig,
}

impl InterpretedGrader {
    pub fn new(submission: Submission, config: GraderConfig) -> Self {
        Self { submission, config }
    }

    fn check(&self, checker: &dyn ConventionChecker) -> SubScore {
        checker.check(self.submission.lines().unwrap_or_default())
    }
}

#[async_trait]
impl GradingStrategy for InterpretedGrader {
    fn language(&self) -> Language {
        Language::Python
    }

    fn submission(&self) -> &Submission {
        &self.submission
    }

    fn grade_header_comments(&self) -> SubScore {
        self.check(&HeaderCommentChecker::new(Language::Python))
    }

    fn grade_var_names(&self) -> SubScore {
        self.check(&VariableNameChecker::new(Language::Python))
    }

    fn grade_ipo_comments(&self) -> SubScore {
        self.check(&IpoCommentChecker::new(Language::Python))
    }

    async fn grade_unit_test(&self) -> Result<SubScore, GraderError> {
        run_pytest(&self.submission, &self.config).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grader(source: &str) -> InterpretedGrader {
        let lines = source.lines().map(str::to_owned).collect();
        InterpretedGrader::new(
            Submission::from_lines("/srv/code/1/hello.py", lines),
            GraderConfig::default(),
        )
    }

    #[test]
    fn one_line_script_fails_style_checks() {
        let g = grader("print('hey')");
        let header = g.grade_header_comments();
        assert_eq!(header.level, 0.0);
        assert!(header.comment.contains("Docstrings are missing"));

        let ipo = g.grade_ipo_comments();
        assert_eq!(ipo.level, 0.0);
        assert!(ipo.comment.contains("Missing IPO comments"));

        assert_eq!(g.grade_var_names().level, 4.0);
    }

    #[test]
    fn well_formed_script_passes_style_checks() {
        let g = grader(include_str!("../test_files/python/hello.py"));
        assert_eq!(g.grade_header_comments().level, 4.0);
        assert_eq!(g.grade_ipo_comments().level, 4.0);
        assert_eq!(g.grade_var_names().level, 4.0);
        assert_eq!(g.language(), Language::Python);
    }
}
