//! `specops init` - the project initialization pipeline.
//!
//! A single linear sequence with fail-fast semantics:
//! tool gate, directory resolution, conflict gate, directory creation,
//! agent resolution, template copy, git bootstrap, success report.
//! No step is retried and nothing is rolled back on failure.

use crate::catalog::{AgentCatalog, AgentSpec, ToolCatalog};
use crate::cli::InitCmd;
use crate::error::{Result, SpecOpsError};
use crate::git;
use crate::probe::probe_with_debug;
use crate::template;
use crate::utils::fs::{copy_tree, ensure_directory};
use crate::utils::process::ProcessRunner;
use crate::utils::prompt::Prompter;
use indicatif::ProgressBar;
use std::path::{Path, PathBuf};

/// Comma-separated override of the required tool commands, so the test
/// suite can simulate hosts with or without the infrastructure stack.
pub const REQUIRED_TOOLS_ENV: &str = "SPECOPS_REQUIRED_TOOLS";

pub fn execute(cmd: &InitCmd, prompter: &dyn Prompter, runner: &dyn ProcessRunner) -> Result<()> {
    println!();
    println!("SpecOps Initialization");
    println!("Setting up your Infrastructure as Code project");
    println!();

    // Tool gate: no filesystem mutation may happen before this passes
    check_required_tools(cmd.debug)?;

    let cwd = std::env::current_dir()?;
    let project_dir = resolve_project_dir(&cwd, &cmd.project_name, cmd.here);
    if cmd.here || cmd.project_name == "." {
        println!(
            "Initializing in current directory: {}",
            project_dir.display()
        );
    } else {
        println!("Creating project: {}", cmd.project_name);
    }

    // Conflict gate: a non-empty target needs --force or explicit consent
    if directory_has_entries(&project_dir)? && !cmd.force {
        println!();
        println!("Directory is not empty: {}", project_dir.display());
        if !prompter.confirm("Do you want to merge/overwrite?")? {
            println!("Aborted.");
            return Err(SpecOpsError::Aborted);
        }
    }

    ensure_directory(&project_dir, cmd.debug)?;

    let agents = AgentCatalog::load()?;
    let agent = resolve_agent(&agents, cmd.ai.as_deref(), prompter)?;

    if !cmd.ignore_agent_tools && !probe_with_debug(&agent.command, cmd.debug) {
        println!(
            "Warning: {} CLI ({}) not found on PATH. \
             Pass --ignore-agent-tools to silence this warning.",
            agent.name, agent.command
        );
    }

    println!("AI Agent: {}", agent.name);
    println!("Script Type: {}", cmd.script);
    println!();

    let template_dir = template::resolve(&agent.id, cmd.script)?;

    println!("Copying template files...");
    let bar = ProgressBar::new(0);
    copy_tree(&template_dir, &project_dir, Some(&bar), cmd.debug)?;
    bar.finish_and_clear();
    println!("✓ Template files copied");

    if !cmd.no_git {
        git::bootstrap_repository(runner, &project_dir, cmd.debug)?;
    }

    let cd_target = if cmd.here || cmd.project_name == "." {
        project_dir
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| ".".to_string())
    } else {
        cmd.project_name.clone()
    };

    println!();
    println!("✓ SpecOps project initialized successfully!");
    println!();
    println!("Next steps:");
    println!("  1. cd {}", cd_target);
    println!("  2. Launch your AI agent ({})", agent.name);
    println!("  3. Run /specops.constitution to establish principles");
    println!("  4. Run /specops.specify to define infrastructure requirements");
    println!();
    println!("For detailed documentation, visit:");
    println!("https://github.com/dotlabshq/specops");
    println!();

    Ok(())
}

/// Probe the required infrastructure tools, printing the missing ones
fn check_required_tools(debug: bool) -> Result<()> {
    let commands = required_tool_commands()?;
    let missing: Vec<String> = commands
        .into_iter()
        .filter(|c| !probe_with_debug(c, debug))
        .collect();

    if missing.is_empty() {
        return Ok(());
    }

    println!("✗ Missing required tools:");
    for tool in &missing {
        println!("  • {}", tool);
    }
    println!();
    println!("Run 'specops check' for more details.");
    Err(SpecOpsError::MissingTools(missing))
}

fn required_tool_commands() -> Result<Vec<String>> {
    if let Ok(value) = std::env::var(REQUIRED_TOOLS_ENV) {
        return Ok(value
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect());
    }
    Ok(ToolCatalog::load()?.required_commands())
}

/// Current directory when `--here` or "." was given, else `cwd/name`
fn resolve_project_dir(cwd: &Path, project_name: &str, here: bool) -> PathBuf {
    if here || project_name == "." {
        cwd.to_path_buf()
    } else {
        cwd.join(project_name)
    }
}

fn directory_has_entries(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    Ok(std::fs::read_dir(path)?.next().is_some())
}

/// Use the supplied agent id, or elicit a 1-of-N choice; either way the
/// result must be a catalog member (case-insensitive)
fn resolve_agent<'a>(
    catalog: &'a AgentCatalog,
    ai: Option<&str>,
    prompter: &dyn Prompter,
) -> Result<&'a AgentSpec> {
    let id = match ai {
        Some(id) => id.to_string(),
        None => {
            let options: Vec<(&str, &str)> = catalog
                .agents()
                .iter()
                .map(|a| (a.id.as_str(), a.name.as_str()))
                .collect();
            prompter.choose_one("Select AI Agent", &options)?
        }
    };

    match catalog.get(&id) {
        Some(agent) => Ok(agent),
        None => {
            println!("Supported agents: {}", catalog.ids().join(", "));
            Err(SpecOpsError::UnsupportedAgent(id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    struct FakePrompter {
        choice: Option<String>,
        confirm_answer: bool,
    }

    impl Prompter for FakePrompter {
        fn confirm(&self, _question: &str) -> Result<bool> {
            Ok(self.confirm_answer)
        }

        fn choose_one(&self, _title: &str, options: &[(&str, &str)]) -> Result<String> {
            Ok(self
                .choice
                .clone()
                .unwrap_or_else(|| options[0].0.to_string()))
        }
    }

    #[test]
    fn test_resolve_project_dir_named() {
        let dir = resolve_project_dir(Path::new("/work"), "demo", false);
        assert_eq!(dir, PathBuf::from("/work/demo"));
    }

    #[test]
    fn test_resolve_project_dir_here_flag() {
        let dir = resolve_project_dir(Path::new("/work"), "demo", true);
        assert_eq!(dir, PathBuf::from("/work"));
    }

    #[test]
    fn test_resolve_project_dir_dot() {
        let dir = resolve_project_dir(Path::new("/work"), ".", false);
        assert_eq!(dir, PathBuf::from("/work"));
    }

    #[test]
    fn test_directory_has_entries() {
        let tmp = TempDir::new().unwrap();
        assert!(!directory_has_entries(tmp.path()).unwrap());
        assert!(!directory_has_entries(&tmp.path().join("missing")).unwrap());

        std::fs::write(tmp.path().join("file"), "x").unwrap();
        assert!(directory_has_entries(tmp.path()).unwrap());
    }

    #[test]
    fn test_resolve_agent_from_flag_case_insensitive() {
        let catalog = AgentCatalog::load().unwrap();
        let prompter = FakePrompter {
            choice: None,
            confirm_answer: false,
        };
        let agent = resolve_agent(&catalog, Some("CLAUDE"), &prompter).unwrap();
        assert_eq!(agent.id, "claude");
    }

    #[test]
    fn test_resolve_agent_interactive() {
        let catalog = AgentCatalog::load().unwrap();
        let prompter = FakePrompter {
            choice: Some("gemini".to_string()),
            confirm_answer: false,
        };
        let agent = resolve_agent(&catalog, None, &prompter).unwrap();
        assert_eq!(agent.name, "Gemini CLI");
    }

    #[test]
    fn test_resolve_agent_unknown_id() {
        let catalog = AgentCatalog::load().unwrap();
        let prompter = FakePrompter {
            choice: None,
            confirm_answer: false,
        };
        let err = resolve_agent(&catalog, Some("notreal"), &prompter).unwrap_err();
        assert!(matches!(err, SpecOpsError::UnsupportedAgent(id) if id == "notreal"));
    }

    #[test]
    #[serial]
    fn test_required_tool_commands_env_override() {
        std::env::set_var(REQUIRED_TOOLS_ENV, "alpha, beta ,,");
        let commands = required_tool_commands().unwrap();
        std::env::remove_var(REQUIRED_TOOLS_ENV);
        assert_eq!(commands, vec!["alpha", "beta"]);
    }

    #[test]
    #[serial]
    fn test_required_tool_commands_from_catalog() {
        std::env::remove_var(REQUIRED_TOOLS_ENV);
        let commands = required_tool_commands().unwrap();
        assert_eq!(commands, vec!["git", "terraform", "ansible", "kubectl"]);
    }
}
