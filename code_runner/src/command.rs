use shell_escape::escape;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default wall-clock bound for a single toolchain invocation.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Describes one toolchain invocation: program, arguments, working directory,
/// optional stdin payload and the timeout it must finish within.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    program: String,
    args: Vec<String>,
    working_dir: PathBuf,
    stdin: Option<String>,
    timeout: Duration,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            working_dir: working_dir.into(),
            stdin: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Text written to the child's stdin before waiting on it.
    /// Without this the child gets a closed stdin.
    pub fn stdin(mut self, input: impl Into<String>) -> Self {
        self.stdin = Some(input.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arguments(&self) -> &[String] {
        &self.args
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    pub fn stdin_payload(&self) -> Option<&str> {
        self.stdin.as_deref()
    }

    pub fn time_limit(&self) -> Duration {
        self.timeout
    }

    /// Shell-quoted rendering of the command line, for logs only.
    pub fn display_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .map(|part| escape(Cow::Borrowed(part)).into_owned())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_collects_arguments_in_order() {
        let spec = CommandSpec::new("pytest", "/tmp/work")
            .arg("--no-header")
            .args(["-v", "test_hello.py"]);

        assert_eq!(spec.program(), "pytest");
        assert_eq!(spec.arguments(), ["--no-header", "-v", "test_hello.py"]);
        assert_eq!(spec.working_dir(), Path::new("/tmp/work"));
        assert_eq!(spec.time_limit(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert!(spec.stdin_payload().is_none());
    }

    #[test]
    fn display_line_quotes_arguments_with_spaces() {
        let spec = CommandSpec::new("javac", ".").args(["-cp", "my lib/junit.jar", "Hello.java"]);
        assert_eq!(spec.display_line(), "javac -cp 'my lib/junit.jar' Hello.java");
    }
}
