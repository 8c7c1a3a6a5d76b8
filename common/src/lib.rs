//! Host-level plumbing shared by the grading crates: environment-backed
//! configuration and logging setup.

pub mod config;
pub mod logger;
