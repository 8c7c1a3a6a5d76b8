//! Compiled-language strategy: Java submissions graded with javac and JUnit.

use crate::checkers::{HeaderCommentChecker, IpoCommentChecker, VariableNameChecker};
use crate::config::GraderConfig;
use crate::error::GraderError;
use crate::runners::run_junit;
use crate::submission::Submission;
use crate::traits::checker::ConventionChecker;
use crate::traits::strategy::GradingStrategy;
use crate::types::{Language, SubScore};
use async_trait::async_trait;

pub struct CompiledGrader {
    submission: Submission,
    config: GraderConfig,
}

impl CompiledGrader {
    pub fn new(submission: Submission, config: GraderConfig) -> Self {
        Self { submission, config }
    }

    fn check(&self, checker: &dyn ConventionChecker) -> SubScore {
        checker.check(self.submission.lines().unwrap_or_default())
    }
}

#[async_trait]
impl GradingStrategy for CompiledGrader {
    fn language(&self) -> Language {
        Language::Java
    }

    fn submission(&self) -> &Submission {
        &self.submission
    }

    fn grade_header_comments(&self) -> SubScore {
        self.check(&HeaderCommentChecker::new(Language::Java))
    }

    fn grade_var_names(&self) -> SubScore {
        self.check(&VariableNameChecker::new(Language::Java))
    }

    fn grade_ipo_comments(&self) -> SubScore {
        self.check(&IpoCommentChecker::new(Language::Java))
    }

    async fn grade_unit_test(&self) -> Result<SubScore, GraderError> {
        run_junit(&self.submission, &self.config).await
    }
}
