//! Global application configuration manager.
//!
//! `AppConfig` is a lazily initialized, globally accessible singleton holding
//! the host-level settings read from the environment (and `.env`). Grading
//! settings live in `grader::config::GraderConfig` and are passed explicitly.

use std::env;
use std::sync::{OnceLock, RwLock, RwLockReadGuard};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_dir: String,
    pub log_to_stdout: bool,
}

static CONFIG_INSTANCE: OnceLock<RwLock<AppConfig>> = OnceLock::new();

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            project_name: "pycs-grader".into(),
            log_level: "grader=info,code_runner=info".into(),
            log_file: "grader.log".into(),
            log_dir: "logs".into(),
            log_to_stdout: false,
        }
    }
}

impl AppConfig {
    /// Loads the configuration from `.env` and environment variables.
    /// Every field has a default, so this never fails.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        Self {
            project_name: env::var("PROJECT_NAME").unwrap_or(defaults.project_name),
            log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_file: env::var("LOG_FILE").unwrap_or(defaults.log_file),
            log_dir: env::var("LOG_DIR").unwrap_or(defaults.log_dir),
            log_to_stdout: env::var("LOG_TO_STDOUT")
                .map(|v| v == "true")
                .unwrap_or(defaults.log_to_stdout),
        }
    }

    /// Returns a shared reference to the global configuration.
    ///
    /// # Panics
    /// Panics if the lock is poisoned.
    pub fn global() -> RwLockReadGuard<'static, AppConfig> {
        CONFIG_INSTANCE
            .get_or_init(|| RwLock::new(AppConfig::from_env()))
            .read()
            .expect("Failed to acquire AppConfig read lock")
    }

    /// Reloads the global configuration from the environment, clearing overrides.
    pub fn reset() {
        if let Some(lock) = CONFIG_INSTANCE.get() {
            let mut guard = lock.write().expect("Failed to acquire AppConfig write lock");
            *guard = AppConfig::from_env();
        }
    }

    fn set_field<F>(setter: F)
    where
        F: FnOnce(&mut AppConfig),
    {
        let lock = CONFIG_INSTANCE.get_or_init(|| RwLock::new(AppConfig::from_env()));
        let mut guard = lock
            .write()
            .expect("Failed to acquire AppConfig write lock");
        setter(&mut guard);
    }

    pub fn set_log_level(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.log_level = value.into());
    }

    pub fn set_log_file(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.log_file = value.into());
    }

    pub fn set_log_dir(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.log_dir = value.into());
    }

    pub fn set_log_to_stdout(value: bool) {
        AppConfig::set_field(|cfg| cfg.log_to_stdout = value);
    }
}
