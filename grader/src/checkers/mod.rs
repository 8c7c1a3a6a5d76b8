//!
//! Convention Checkers
//!
//! Static style checks shared by both strategies. Each checker is built for
//! one [`crate::types::Language`] and implements
//! [`crate::traits::checker::ConventionChecker`].

pub mod header;
pub mod ipo;
pub mod var_names;

pub use header::HeaderCommentChecker;
pub use ipo::IpoCommentChecker;
pub use var_names::VariableNameChecker;
