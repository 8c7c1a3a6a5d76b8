//!
//! Source Reader
//!
//! Loads a student's submission into memory as an ordered list of lines, and
//! derives the directories the rest of the pipeline works in.
//!
//! A submission that does not exist is reported as absent (`None`) rather than
//! as an error, so strategies can return a uniform "could not read" result.
//! Any other I/O failure is returned as [`GraderError::Io`].

use crate::error::GraderError;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Reads `path` and splits it into lines, stripping only `\n` / `\r\n`.
///
/// Invalid UTF-8 is replaced rather than rejected.
pub fn read_source(path: &Path) -> Result<Option<Vec<String>>, GraderError> {
    match fs::read(path) {
        Ok(bytes) => {
            let text = String::from_utf8_lossy(&bytes);
            let lines: Vec<String> = text.lines().map(str::to_owned).collect();
            debug!(path = %path.display(), lines = lines.len(), "read submission");
            Ok(Some(lines))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(path = %path.display(), "submission not found");
            Ok(None)
        }
        Err(e) => Err(GraderError::io(path, e)),
    }
}

/// A submission for one grading pass.
#[derive(Debug, Clone)]
pub struct Submission {
    path: PathBuf,
    lines: Option<Vec<String>>,
}

impl Submission {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, GraderError> {
        let path = path.into();
        let lines = read_source(&path)?;
        Ok(Self { path, lines })
    }

    /// Builds a submission from already-read lines.
    pub fn from_lines(path: impl Into<PathBuf>, lines: Vec<String>) -> Self {
        Self {
            path: path.into(),
            lines: Some(lines),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `None` when the file could not be found.
    pub fn lines(&self) -> Option<&[String]> {
        self.lines.as_deref()
    }

    pub fn is_readable(&self) -> bool {
        self.lines.is_some()
    }

    /// File name as uploaded, e.g. `hello.py`.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// File name without extension, e.g. `hello` or `Hello`.
    pub fn stem(&self) -> String {
        self.path
            .file_stem()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Directory holding the submission; the toolchains run here.
    pub fn dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    /// Parent of the submission directory. Reference tests and the JUnit jar
    /// are located relative to it.
    pub fn grading_root(&self) -> PathBuf {
        let dir = self.dir();
        match dir.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from(".."),
        }
    }
}
