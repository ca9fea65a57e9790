//! Git repository bootstrap for freshly scaffolded projects.
//!
//! `git init` and `git add .` must succeed; identity configuration and
//! the initial commit are best-effort and never fail the run.

use crate::error::Result;
use crate::utils::process::ProcessRunner;
use std::path::Path;

const COMMIT_USER_NAME: &str = "SpecOps";
const COMMIT_USER_EMAIL: &str = "specops@local";
const INITIAL_COMMIT_MESSAGE: &str = "Initial SpecOps project setup";

/// Check if the given directory is inside a git repository
pub fn is_git_repository(runner: &dyn ProcessRunner, path: &Path) -> bool {
    runner
        .run(&["git", "rev-parse", "--git-dir"], Some(path), false)
        .map(|output| output.success())
        .unwrap_or(false)
}

/// Initialize a git repository in the project directory and create an
/// initial commit. No-op when the directory is already version-controlled.
pub fn bootstrap_repository(
    runner: &dyn ProcessRunner,
    project_dir: &Path,
    debug: bool,
) -> Result<()> {
    if is_git_repository(runner, project_dir) {
        if debug {
            println!("[debug] git repository already exists");
        }
        return Ok(());
    }

    println!("Initializing git repository...");
    runner.run(&["git", "init"], Some(project_dir), true)?;

    // Identity configuration is best-effort; a failure here must not
    // abort the initialization
    best_effort(
        runner.run(
            &["git", "config", "user.name", COMMIT_USER_NAME],
            Some(project_dir),
            false,
        ),
        debug,
    );
    best_effort(
        runner.run(
            &["git", "config", "user.email", COMMIT_USER_EMAIL],
            Some(project_dir),
            false,
        ),
        debug,
    );

    runner.run(&["git", "add", "."], Some(project_dir), true)?;
    best_effort(
        runner.run(
            &["git", "commit", "-m", INITIAL_COMMIT_MESSAGE],
            Some(project_dir),
            false,
        ),
        debug,
    );

    println!("✓ Git repository initialized");
    Ok(())
}

fn best_effort<T>(result: Result<T>, debug: bool) {
    if let Err(e) = result {
        if debug {
            println!("[debug] best-effort git step failed: {}", e);
        }
    }
}
