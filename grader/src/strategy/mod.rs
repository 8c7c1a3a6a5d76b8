//! # Strategy Module
//!
//! The closed set of grading strategies and the function that picks one for
//! a class. A strategy is built fresh for every grading request and owns the
//! submission it grades; nothing is shared between requests.

pub mod compiled;
pub mod interpreted;

pub use compiled::CompiledGrader;
pub use interpreted::InterpretedGrader;

use crate::config::GraderConfig;
use crate::error::GraderError;
use crate::submission::Submission;
use crate::traits::strategy::GradingStrategy;
use crate::types::{Language, SubScore};
use async_trait::async_trait;
use std::path::Path;
use tracing::debug;

pub enum Strategy {
    Interpreted(InterpretedGrader),
    Compiled(CompiledGrader),
}

impl Strategy {
    fn inner(&self) -> &dyn GradingStrategy {
        match self {
            Strategy::Interpreted(g) => g,
            Strategy::Compiled(g) => g,
        }
    }
}

#[async_trait]
impl GradingStrategy for Strategy {
    fn language(&self) -> Language {
        self.inner().language()
    }

    fn submission(&self) -> &Submission {
        self.inner().submission()
    }

    fn grade_header_comments(&self) -> SubScore {
        self.inner().grade_header_comments()
    }

    fn grade_var_names(&self) -> SubScore {
        self.inner().grade_var_names()
    }

    fn grade_ipo_comments(&self) -> SubScore {
        self.inner().grade_ipo_comments()
    }

    async fn grade_unit_test(&self) -> Result<SubScore, GraderError> {
        self.inner().grade_unit_test().await
    }
}

/// Loads the submission at `path` and wraps it in the strategy for
/// `class_id`. Every class id maps to exactly one strategy.
///
/// A missing file still yields a strategy; grading it reports "could not read".
pub fn resolve_strategy(
    class_id: i64,
    path: &Path,
    config: &GraderConfig,
) -> Result<Strategy, GraderError> {
    let submission = Submission::load(path)?;
    let language = Language::for_class(class_id, config.interpreted_class_id);
    debug!(class_id, ?language, path = %path.display(), "resolved grading strategy");

    Ok(match language {
        Language::Python => {
            Strategy::Interpreted(InterpretedGrader::new(submission, config.clone()))
        }
        Language::Java => Strategy::Compiled(CompiledGrader::new(submission, config.clone())),
    })
}
