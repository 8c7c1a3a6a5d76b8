use crate::config::AppConfig;
use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs the global `tracing` subscriber: a daily rolling log file in
/// `log_dir`, plus stdout when `log_to_stdout` is set.
///
/// `LOG_LEVEL` in the environment wins over `config.log_level`. If a global
/// subscriber is already installed this leaves it in place.
///
/// Keep the returned guard alive for as long as logs should be flushed.
pub fn init_logging(config: &AppConfig) -> WorkerGuard {
    fs::create_dir_all(&config.log_dir).ok();

    let file_appender = rolling::daily(&config.log_dir, &config.log_file);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true);

    let stdout_layer = config.log_to_stdout.then(|| {
        fmt::layer()
            .with_writer(std::io::stdout)
            .with_ansi(true)
            .with_target(true)
            .with_thread_ids(true)
    });

    let env_filter = EnvFilter::try_from_env("LOG_LEVEL")
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stdout_layer)
        .try_init();

    if installed.is_err() {
        tracing::debug!("global subscriber already installed, keeping it");
    }

    guard
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[test]
    #[serial]
    fn writes_events_to_rolling_file() {
        unsafe { std::env::remove_var("LOG_LEVEL") };
        let dir = tempdir().unwrap();
        let config = AppConfig {
            log_level: "info".into(),
            log_dir: dir.path().to_string_lossy().into_owned(),
            ..AppConfig::default()
        };

        let guard = init_logging(&config);
        tracing::info!("grading pipeline ready");
        drop(guard);

        let log_file = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .find(|p| {
                p.file_name()
                    .map(|n| n.to_string_lossy().starts_with("grader.log"))
                    .unwrap_or(false)
            })
            .expect("rolling log file should exist");

        let contents = fs::read_to_string(log_file).unwrap();
        assert!(contents.contains("grading pipeline ready"));
    }
}
