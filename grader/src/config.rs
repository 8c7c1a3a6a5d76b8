//! Grader configuration.
//!
//! [`GraderConfig`] binds the engine to concrete toolchain commands, the
//! reference-test directory conventions and the subprocess time limit. It can
//! be built from defaults, from `GRADER_*` environment variables, or from a
//! JSON file in which every field is optional.

use crate::error::GraderError;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GraderConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_pytest_command")]
    pub pytest_command: String,

    #[serde(default = "default_pytest_args")]
    pub pytest_args: Vec<String>,

    #[serde(default = "default_python_command")]
    pub python_command: String,

    #[serde(default = "default_javac_command")]
    pub javac_command: String,

    #[serde(default = "default_java_command")]
    pub java_command: String,

    /// JUnit console launcher jar; relative paths resolve against the grading root.
    #[serde(default = "default_junit_jar")]
    pub junit_jar: PathBuf,

    #[serde(default = "default_python_tests_dir")]
    pub python_tests_dir: String,

    #[serde(default = "default_java_tests_dir")]
    pub java_tests_dir: String,

    #[serde(default = "default_python_test_prefix")]
    pub python_test_prefix: String,

    #[serde(default = "default_java_test_prefix")]
    pub java_test_prefix: String,

    /// Class identity graded with the interpreted strategy.
    #[serde(default = "default_interpreted_class_id")]
    pub interpreted_class_id: i64,
}

fn default_timeout_secs() -> u64 {
    code_runner::command::DEFAULT_TIMEOUT_SECS
}
fn default_pytest_command() -> String {
    "pytest".into()
}
fn default_pytest_args() -> Vec<String> {
    vec!["--no-header".into(), "-v".into(), "--tb=short".into()]
}
fn default_python_command() -> String {
    "python3".into()
}
fn default_javac_command() -> String {
    "javac".into()
}
fn default_java_command() -> String {
    "java".into()
}
fn default_junit_jar() -> PathBuf {
    PathBuf::from("lib").join("junit-platform-console-standalone-1.7.0-all.jar")
}
fn default_python_tests_dir() -> String {
    "tests".into()
}
fn default_java_tests_dir() -> String {
    "tests-java".into()
}
fn default_python_test_prefix() -> String {
    "test_".into()
}
fn default_java_test_prefix() -> String {
    "Test".into()
}
fn default_interpreted_class_id() -> i64 {
    1
}

impl Default for GraderConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            pytest_command: default_pytest_command(),
            pytest_args: default_pytest_args(),
            python_command: default_python_command(),
            javac_command: default_javac_command(),
            java_command: default_java_command(),
            junit_jar: default_junit_jar(),
            python_tests_dir: default_python_tests_dir(),
            java_tests_dir: default_java_tests_dir(),
            python_test_prefix: default_python_test_prefix(),
            java_test_prefix: default_java_test_prefix(),
            interpreted_class_id: default_interpreted_class_id(),
        }
    }
}

fn env_or<T: FromStr>(key: &str, fallback: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(fallback)
}

impl GraderConfig {
    /// Reads `GRADER_*` variables (after loading `.env`). Missing or
    /// unparseable values keep their defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let d = Self::default();

        Self {
            timeout_secs: env_or("GRADER_TIMEOUT_SECS", d.timeout_secs),
            pytest_command: env_or("GRADER_PYTEST_COMMAND", d.pytest_command),
            pytest_args: env::var("GRADER_PYTEST_ARGS")
                .map(|v| v.split_whitespace().map(str::to_owned).collect())
                .unwrap_or(d.pytest_args),
            python_command: env_or("GRADER_PYTHON_COMMAND", d.python_command),
            javac_command: env_or("GRADER_JAVAC_COMMAND", d.javac_command),
            java_command: env_or("GRADER_JAVA_COMMAND", d.java_command),
            junit_jar: env_or("GRADER_JUNIT_JAR", d.junit_jar),
            python_tests_dir: env_or("GRADER_PYTHON_TESTS_DIR", d.python_tests_dir),
            java_tests_dir: env_or("GRADER_JAVA_TESTS_DIR", d.java_tests_dir),
            python_test_prefix: env_or("GRADER_PYTHON_TEST_PREFIX", d.python_test_prefix),
            java_test_prefix: env_or("GRADER_JAVA_TEST_PREFIX", d.java_test_prefix),
            interpreted_class_id: env_or("GRADER_INTERPRETED_CLASS_ID", d.interpreted_class_id),
        }
    }

    /// Loads a JSON config; absent fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, GraderError> {
        let contents = fs::read_to_string(path).map_err(|e| {
            GraderError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        serde_json::from_str(&contents)
            .map_err(|e| GraderError::Config(format!("failed to parse {}: {e}", path.display())))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Absolute location of the JUnit jar for a given grading root.
    pub fn junit_jar_path(&self, grading_root: &Path) -> PathBuf {
        if self.junit_jar.is_absolute() {
            self.junit_jar.clone()
        } else {
            grading_root.join(&self.junit_jar)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[test]
    fn defaults_match_classroom_layout() {
        let cfg = GraderConfig::default();
        assert_eq!(cfg.timeout(), Duration::from_secs(5));
        assert_eq!(cfg.python_tests_dir, "tests");
        assert_eq!(cfg.java_tests_dir, "tests-java");
        assert_eq!(cfg.interpreted_class_id, 1);
        assert_eq!(
            cfg.junit_jar_path(Path::new("/srv/code")),
            PathBuf::from("/srv/code/lib/junit-platform-console-standalone-1.7.0-all.jar")
        );
    }

    #[test]
    fn absolute_jar_path_is_kept() {
        let cfg = GraderConfig {
            junit_jar: PathBuf::from("/opt/junit.jar"),
            ..GraderConfig::default()
        };
        assert_eq!(
            cfg.junit_jar_path(Path::new("/srv/code")),
            PathBuf::from("/opt/junit.jar")
        );
    }

    #[test]
    fn json_file_fills_missing_fields_with_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("grader.json");
        fs::write(&path, r#"{ "timeout_secs": 12, "pytest_command": "/usr/bin/pytest" }"#).unwrap();

        let cfg = GraderConfig::from_json_file(&path).unwrap();
        assert_eq!(cfg.timeout_secs, 12);
        assert_eq!(cfg.pytest_command, "/usr/bin/pytest");
        assert_eq!(cfg.javac_command, "javac");
        assert_eq!(cfg.pytest_args, vec!["--no-header", "-v", "--tb=short"]);
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("grader.json");
        fs::write(&path, "{ not json").unwrap();

        match GraderConfig::from_json_file(&path) {
            Err(GraderError::Config(msg)) => assert!(msg.contains("failed to parse")),
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn missing_json_file_is_a_config_error() {
        let result = GraderConfig::from_json_file(Path::new("/definitely/not/here.json"));
        assert!(matches!(result, Err(GraderError::Config(_))));
    }

    #[test]
    #[serial]
    fn env_overrides_and_bad_values_fall_back() {
        unsafe {
            env::set_var("GRADER_TIMEOUT_SECS", "not-a-number");
            env::set_var("GRADER_PYTEST_ARGS", "-q  --tb=line");
            env::set_var("GRADER_INTERPRETED_CLASS_ID", "4");
        }

        let cfg = GraderConfig::from_env();
        assert_eq!(cfg.timeout_secs, 5);
        assert_eq!(cfg.pytest_args, vec!["-q", "--tb=line"]);
        assert_eq!(cfg.interpreted_class_id, 4);

        unsafe {
            env::remove_var("GRADER_TIMEOUT_SECS");
            env::remove_var("GRADER_PYTEST_ARGS");
            env::remove_var("GRADER_INTERPRETED_CLASS_ID");
        }
    }
}
