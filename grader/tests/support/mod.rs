//! Shared fixtures for the end-to-end grading tests.
//!
//! Each test gets a temporary grading root laid out like the server's:
//!
//! ```text
//! <root>/bin/            fake toolchain scripts
//! <root>/tests/          pytest reference tests
//! <root>/tests-java/     JUnit reference tests
//! <root>/1310455/        the student's submission directory
//! <root>/logs/           log output
//! ```

#![allow(dead_code)]

use common::config::AppConfig;
use common::logger::init_logging;
use grader::config::GraderConfig;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing_appender::non_blocking::WorkerGuard;

pub const STUDENT_DIR: &str = "1310455";

pub struct GradingRoot {
    dir: TempDir,
    pub config: GraderConfig,
    _log_guard: WorkerGuard,
}

impl GradingRoot {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create grading root");
        for sub in ["bin", "tests", "tests-java", STUDENT_DIR] {
            fs::create_dir_all(dir.path().join(sub)).expect("create layout");
        }

        let log_config = AppConfig {
            log_level: "grader=debug,code_runner=debug".into(),
            log_dir: dir.path().join("logs").to_string_lossy().into_owned(),
            log_to_stdout: false,
            ..AppConfig::default()
        };
        let log_guard = init_logging(&log_config);

        let bin = dir.path().join("bin");
        let config = GraderConfig {
            timeout_secs: 2,
            pytest_command: bin.join("pytest").to_string_lossy().into_owned(),
            python_command: bin.join("python").to_string_lossy().into_owned(),
            javac_command: bin.join("javac").to_string_lossy().into_owned(),
            java_command: bin.join("java").to_string_lossy().into_owned(),
            ..GraderConfig::default()
        };

        Self {
            dir,
            config,
            _log_guard: log_guard,
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes an executable `/bin/sh` script standing in for a toolchain.
    pub fn tool(&self, name: &str, body: &str) -> PathBuf {
        let path = self.path().join("bin").join(name);
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("write tool script");
        let mut perms = fs::metadata(&path).expect("tool metadata").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).expect("make tool executable");
        path
    }

    /// A tool that prints `output` verbatim on stdout.
    pub fn printing_tool(&self, name: &str, output: &str) -> PathBuf {
        let fixture = self.path().join("bin").join(format!("{name}.out"));
        fs::write(&fixture, output).expect("write tool output");
        self.tool(name, &format!("cat '{}'", fixture.display()))
    }

    /// Writes the student's file and returns its path.
    pub fn submission(&self, file_name: &str, contents: &str) -> PathBuf {
        let path = self.path().join(STUDENT_DIR).join(file_name);
        fs::write(&path, contents).expect("write submission");
        path
    }

    pub fn reference_test(&self, tests_dir: &str, file_name: &str, contents: &str) -> PathBuf {
        let path = self.path().join(tests_dir).join(file_name);
        fs::write(&path, contents).expect("write reference test");
        path
    }

    pub fn student_file(&self, file_name: &str) -> PathBuf {
        self.path().join(STUDENT_DIR).join(file_name)
    }
}

pub fn fixture(path: &str) -> String {
    fs::read_to_string(Path::new("src/test_files").join(path)).expect("read fixture")
}
