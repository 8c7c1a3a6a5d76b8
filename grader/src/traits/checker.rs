use crate::types::SubScore;

/// A static convention check (header comments, variable names, IPO comments).
///
/// Checks never fail: a submission that breaks a convention gets a lower
/// level and a message explaining why.
pub trait ConventionChecker: Send + Sync {
    /// Inspects `lines` without modifying them.
    fn check(&self, lines: &[String]) -> SubScore;
}
