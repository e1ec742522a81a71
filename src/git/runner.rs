//! Running git commands against a working directory

use std::borrow::Cow;
use std::process::{Command, Output};

use tracing::{debug, warn};

use crate::config::{Config, Verbosity};
use crate::error::WorkflowError;

/// Captured result of a git command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Standard output, lossily decoded
    pub stdout: String,
    /// Standard error, lossily decoded
    pub stderr: String,
    /// Exit code, `None` if the process was killed by a signal
    pub code: Option<i32>,
}

impl CommandOutput {
    /// Output with the given stdout and a zero exit code
    #[must_use]
    pub fn with_stdout(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: String::new(),
            code: Some(0),
        }
    }

    /// Whether stdout is empty once surrounding whitespace is removed
    #[must_use]
    pub fn stdout_is_empty(&self) -> bool {
        self.stdout.trim().is_empty()
    }
}

impl From<Output> for CommandOutput {
    fn from(output: Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            code: output.status.code(),
        }
    }
}

/// Executes git commands for the workflow.
///
/// Implementations know nothing about the workflow itself. A command that
/// exits non-zero must be reported as [`WorkflowError::CommandFailed`].
pub trait CommandRunner {
    /// Run `git` with the given arguments
    ///
    /// # Errors
    ///
    /// Returns an error if git cannot be started or exits with a failure status
    fn run(&self, args: &[&str]) -> Result<CommandOutput, WorkflowError>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, args: &[&str]) -> Result<CommandOutput, WorkflowError> {
        (**self).run(args)
    }
}

/// Create a `git` command with prompts and editors disabled.
///
/// Stdin is never connected, so anything that would wait for input has to
/// fail instead.
#[must_use]
pub fn git_command() -> Command {
    let mut command = Command::new("git");
    command
        .env("GIT_TERMINAL_PROMPT", "0")
        .env("GIT_MERGE_AUTOEDIT", "no");
    command
}

/// Render a git invocation as a command line
///
/// Only arguments that would not survive a shell as one word are quoted, so
/// `--format=%s` is echoed the way it is typed.
#[must_use]
pub fn render_command(args: &[&str]) -> String {
    std::iter::once("git")
        .chain(args.iter().copied())
        .map(|arg| {
            if needs_quoting(arg) {
                shell_words::quote(arg)
            } else {
                Cow::Borrowed(arg)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn needs_quoting(arg: &str) -> bool {
    arg.is_empty()
        || arg
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '\'' | '"' | '\\' | '$' | '`'))
}

/// Runs real `git` subprocesses in the configured directory
#[derive(Clone, Copy)]
pub struct GitRunner<'a> {
    config: &'a Config,
}

impl std::fmt::Debug for GitRunner<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitRunner")
            .field("directory", &self.config.directory)
            .finish_non_exhaustive()
    }
}

impl<'a> GitRunner<'a> {
    /// Create a runner bound to the configured working directory
    #[must_use]
    pub const fn new(config: &'a Config) -> Self {
        Self { config }
    }

    const fn verbosity(&self) -> Verbosity {
        self.config.verbosity
    }
}

impl CommandRunner for GitRunner<'_> {
    fn run(&self, args: &[&str]) -> Result<CommandOutput, WorkflowError> {
        let command = render_command(args);
        if self.verbosity().echoes_commands() {
            println!("$ {command}");
        }
        debug!(%command, directory = ?self.config.directory, "Running git command");

        let output = git_command()
            .args(args)
            .current_dir(&self.config.directory)
            .output()
            .map_err(|source| WorkflowError::Spawn {
                command: command.clone(),
                source,
            })?;
        let success = output.status.success();
        let output = CommandOutput::from(output);

        if self.verbosity().forwards_output() {
            print!("{}", output.stdout);
            eprint!("{}", output.stderr);
        }

        if !success {
            warn!(%command, code = ?output.code, stderr = %output.stderr.trim(), "Git command failed");
            return Err(WorkflowError::CommandFailed {
                command,
                code: output.code,
                stderr: output.stderr,
            });
        }

        Ok(output)
    }
}
