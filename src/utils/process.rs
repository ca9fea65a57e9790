//! External process invocation behind a swappable runner trait, so the
//! VCS bootstrap can be exercised in tests without a real git binary.

use crate::error::{Result, SpecOpsError};
use std::path::Path;
use std::process::Command;

/// Captured result of a finished external process.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Runs external commands to completion.
///
/// With `check` set, a non-zero exit status becomes a `CommandFailed`
/// error; otherwise the status is reported through `CommandOutput` and
/// left to the caller.
pub trait ProcessRunner {
    fn run(&self, argv: &[&str], cwd: Option<&Path>, check: bool) -> Result<CommandOutput>;
}

/// Runner backed by the host operating system.
pub struct HostRunner {
    pub debug: bool,
}

impl ProcessRunner for HostRunner {
    fn run(&self, argv: &[&str], cwd: Option<&Path>, check: bool) -> Result<CommandOutput> {
        let (program, args) = argv
            .split_first()
            .ok_or_else(|| SpecOpsError::CommandFailed("empty command line".to_string()))?;

        if self.debug {
            println!("[debug] running: {}", argv.join(" "));
        }

        let mut cmd = Command::new(program);
        cmd.args(args);
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }

        let output = cmd
            .output()
            .map_err(|e| SpecOpsError::CommandFailed(format!("failed to run {}: {}", program, e)))?;

        let result = CommandOutput {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        };

        if check && !result.success() {
            return Err(SpecOpsError::CommandFailed(format!(
                "{} exited with status {}",
                program, result.exit_code
            )));
        }

        Ok(result)
    }
}
