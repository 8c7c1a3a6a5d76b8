//! # Code Runner
//!
//! Runs one toolchain command (interpreter, compiler, test runner) inside a
//! submission's working directory and reports how it ended. Every run is
//! bounded by a wall-clock timeout; a child that overruns it is killed,
//! reaped and reported as [`ProcessOutcome::Timeout`] rather than as an error.
//!
//! Parsing what the child printed is deliberately left to callers, so the
//! captured text can be fed to parsers as plain fixtures in tests.

pub mod command;
pub mod error;

pub use crate::command::CommandSpec;
pub use crate::error::RunnerError;

use std::io;
use std::process::{Output, Stdio};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt};
use tokio::process::{ChildStdin, Command};
use tokio::time::timeout;
use tracing::{debug, warn};

/// How a child process ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// Exit status zero.
    Success { stdout: String, stderr: String },
    /// Non-zero exit, or terminated by a signal (`code` is `None`).
    NonZeroExit {
        code: Option<i32>,
        stdout: String,
        stderr: String,
    },
    /// Did not finish within the time limit and was killed.
    Timeout,
}

impl ProcessOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ProcessOutcome::Success { .. })
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ProcessOutcome::Timeout)
    }

    /// Captured stdout; empty for a timeout.
    pub fn stdout(&self) -> &str {
        match self {
            ProcessOutcome::Success { stdout, .. } | ProcessOutcome::NonZeroExit { stdout, .. } => {
                stdout
            }
            ProcessOutcome::Timeout => "",
        }
    }

    /// Captured stderr; empty for a timeout.
    pub fn stderr(&self) -> &str {
        match self {
            ProcessOutcome::Success { stderr, .. } | ProcessOutcome::NonZeroExit { stderr, .. } => {
                stderr
            }
            ProcessOutcome::Timeout => "",
        }
    }
}

/// Runs `spec` to completion or until its timeout elapses.
///
/// Returns `Err` only when the program cannot be started or its pipes fail;
/// exit status and timeouts are reported through [`ProcessOutcome`].
pub async fn run_command(spec: &CommandSpec) -> Result<ProcessOutcome, RunnerError> {
    debug!(
        command = %spec.display_line(),
        cwd = %spec.working_dir().display(),
        "spawning toolchain command"
    );

    let mut child = Command::new(spec.program())
        .args(spec.arguments())
        .current_dir(spec.working_dir())
        .stdin(if spec.stdin_payload().is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        })
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|source| RunnerError::Spawn {
            program: spec.program().to_string(),
            source,
        })?;

    // Input is written and output drained alongside the wait, so a child
    // that echoes while it reads never stalls on a full pipe.
    let mut writer = match (spec.stdin_payload(), child.stdin.take()) {
        (Some(input), Some(stdin)) => Some(tokio::spawn(feed_stdin(stdin, input.to_owned()))),
        _ => None,
    };
    let mut stdout_reader = tokio::spawn(drain(child.stdout.take()));
    let mut stderr_reader = tokio::spawn(drain(child.stderr.take()));

    let finished = timeout(spec.time_limit(), async {
        let status = child.wait().await.map_err(RunnerError::Wait)?;
        if let Some(task) = writer.as_mut() {
            task.await.map_err(join_error)?.map_err(RunnerError::Stdin)?;
        }
        let stdout = (&mut stdout_reader)
            .await
            .map_err(join_error)?
            .map_err(RunnerError::Wait)?;
        let stderr = (&mut stderr_reader)
            .await
            .map_err(join_error)?
            .map_err(RunnerError::Wait)?;
        Ok::<_, RunnerError>(Output { status, stdout, stderr })
    })
    .await;

    let output = match finished {
        Ok(result) => result?,
        Err(_) => {
            warn!(
                command = %spec.display_line(),
                limit_ms = spec.time_limit().as_millis() as u64,
                "toolchain command timed out"
            );
            if let Err(e) = child.start_kill() {
                debug!(error = %e, "kill signal not delivered");
            }
            if let Err(e) = child.wait().await {
                warn!(error = %e, "failed to reap timed-out command");
            }
            // Grandchildren may still hold the pipes open.
            stdout_reader.abort();
            stderr_reader.abort();
            if let Some(task) = writer {
                task.abort();
            }
            return Ok(ProcessOutcome::Timeout);
        }
    };

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    if output.status.success() {
        Ok(ProcessOutcome::Success { stdout, stderr })
    } else {
        debug!(
            command = %spec.display_line(),
            code = ?output.status.code(),
            "toolchain command exited unsuccessfully"
        );
        Ok(ProcessOutcome::NonZeroExit {
            code: output.status.code(),
            stdout,
            stderr,
        })
    }
}

async fn feed_stdin(mut stdin: ChildStdin, input: String) -> io::Result<()> {
    match stdin.write_all(input.as_bytes()).await {
        // The child may exit without reading its input.
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
    // Dropping `stdin` closes the pipe so the child sees EOF.
}

async fn drain<R: AsyncRead + Unpin>(pipe: Option<R>) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    if let Some(mut pipe) = pipe {
        pipe.read_to_end(&mut buf).await?;
    }
    Ok(buf)
}

fn join_error(e: tokio::task::JoinError) -> RunnerError {
    RunnerError::Wait(io::Error::other(e))
}
