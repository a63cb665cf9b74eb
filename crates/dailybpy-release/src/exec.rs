//! Synchronous execution of external tools
//!
//! Every external capability (`gh`, `pip`, `uv`, the Python interpreter) goes
//! through here so that a missing executable and a failing one surface as
//! distinct errors. No timeout is applied.

use dailybpy_core::{DailybpyError, Result};
use log::debug;
use std::fmt;
use std::io;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::Instant;

/// A program plus its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ToolCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
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
}

impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Result of a captured tool execution
#[derive(Debug, Clone)]
pub struct ExecResult {
    /// `None` when the process was killed by a signal
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
    pub duration_ms: u64,
}

impl ExecResult {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Locates the program on PATH (or checks an explicit path)
fn resolve_program(program: &str) -> Result<PathBuf> {
    which::which(program).map_err(|e| {
        debug!("could not resolve '{}': {}", program, e);
        DailybpyError::ExternalToolMissing {
            tool: program.to_string(),
        }
    })
}

fn spawn_error(program: &str, err: io::Error) -> DailybpyError {
    if err.kind() == io::ErrorKind::NotFound {
        DailybpyError::ExternalToolMissing {
            tool: program.to_string(),
        }
    } else {
        DailybpyError::Generic(format!("failed to start '{}': {}", program, err))
    }
}

/// Runs the command with captured output, whatever its exit status
pub fn run_captured(cmd: &ToolCommand) -> Result<ExecResult> {
    let program = resolve_program(&cmd.program)?;
    debug!("running `{}`", cmd);

    let start = Instant::now();
    let output = Command::new(&program)
        .args(&cmd.args)
        .stdin(Stdio::null())
        .output()
        .map_err(|e| spawn_error(&cmd.program, e))?;

    let result = ExecResult {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        duration_ms: start.elapsed().as_millis() as u64,
    };
    debug!(
        "`{}` finished with {:?} in {}ms",
        cmd, result.exit_code, result.duration_ms
    );
    Ok(result)
}

/// Runs the command with captured output and fails on a non-zero exit
pub fn run_checked(cmd: &ToolCommand) -> Result<ExecResult> {
    let result = run_captured(cmd)?;
    if !result.success() {
        return Err(DailybpyError::ExternalToolFailed {
            command: cmd.to_string(),
            status: result.exit_code,
            stderr: result.stderr,
        });
    }
    Ok(result)
}

/// Runs the command attached to the current terminal
///
/// Output streams straight through, so a failure carries no captured stderr.
pub fn run_inherited(cmd: &ToolCommand) -> Result<()> {
    let program = resolve_program(&cmd.program)?;
    debug!("running `{}` (inherited stdio)", cmd);

    let status = Command::new(&program)
        .args(&cmd.args)
        .status()
        .map_err(|e| spawn_error(&cmd.program, e))?;

    if !status.success() {
        return Err(DailybpyError::ExternalToolFailed {
            command: cmd.to_string(),
            status: status.code(),
            stderr: String::new(),
        });
    }
    Ok(())
}
