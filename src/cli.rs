use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "specops")]
#[command(about = "Spec-Driven Infrastructure as Code toolkit", long_about = None)]
#[command(version = crate::version::VERSION)]
#[command(after_help = "\
EXAMPLES:
  specops init my-infrastructure        Create a new project directory
  specops init my-infra --ai claude     Initialize with a specific AI agent
  specops init --here --ai claude       Initialize in the current directory
  specops init . --force --ai claude    Force overwrite a non-empty directory
  specops check                         Report installed tools and agents

For details about a specific command, use:
  specops <command> --help")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new SpecOps project from the built-in templates
    #[command(long_about = "Initialize a new SpecOps project from the built-in templates.\n\n\
        Copies the template tree for the selected AI agent and script variant\n\
        into the project directory, then initializes a git repository with an\n\
        initial commit unless --no-git is given.")]
    Init(InitCmd),

    /// Check for installed infrastructure tools and AI agents
    Check,
}

#[derive(Parser, Debug)]
pub struct InitCmd {
    /// Project name, or "." to initialize the current directory
    #[arg(default_value = ".")]
    pub project_name: String,

    /// AI assistant to use for infrastructure development
    /// (claude, copilot, cursor, gemini, windsurf)
    #[arg(long)]
    pub ai: Option<String>,

    /// Script variant: sh (bash/zsh) or ps (PowerShell)
    #[arg(long, value_enum, default_value_t = ScriptDialect::Sh)]
    pub script: ScriptDialect,

    /// Skip checks for AI agent tools
    #[arg(long)]
    pub ignore_agent_tools: bool,

    /// Skip git repository initialization
    #[arg(long)]
    pub no_git: bool,

    /// Initialize project in current directory
    #[arg(long)]
    pub here: bool,

    /// Force overwrite when initializing in non-empty directory
    #[arg(long)]
    pub force: bool,

    /// Enable detailed debug output
    #[arg(long)]
    pub debug: bool,
}

/// Shell scripting flavor selecting which template variant to copy.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScriptDialect {
    /// POSIX shell scripts (bash/zsh)
    Sh,
    /// PowerShell scripts
    Ps,
}

impl ScriptDialect {
    pub fn as_str(self) -> &'static str {
        match self {
            ScriptDialect::Sh => "sh",
            ScriptDialect::Ps => "ps",
        }
    }
}

impl std::fmt::Display for ScriptDialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_init_defaults() {
        let cli = Cli::try_parse_from(["specops", "init"]).unwrap();
        match cli.command {
            Commands::Init(cmd) => {
                assert_eq!(cmd.project_name, ".");
                assert!(cmd.ai.is_none());
                assert_eq!(cmd.script, ScriptDialect::Sh);
                assert!(!cmd.force);
                assert!(!cmd.no_git);
                assert!(!cmd.here);
            }
            _ => panic!("expected init subcommand"),
        }
    }

    #[test]
    fn test_init_full_flags() {
        let cli = Cli::try_parse_from([
            "specops",
            "init",
            "demo",
            "--ai",
            "claude",
            "--script",
            "ps",
            "--ignore-agent-tools",
            "--no-git",
            "--force",
            "--debug",
        ])
        .unwrap();
        match cli.command {
            Commands::Init(cmd) => {
                assert_eq!(cmd.project_name, "demo");
                assert_eq!(cmd.ai.as_deref(), Some("claude"));
                assert_eq!(cmd.script, ScriptDialect::Ps);
                assert!(cmd.ignore_agent_tools);
                assert!(cmd.no_git);
                assert!(cmd.force);
                assert!(cmd.debug);
            }
            _ => panic!("expected init subcommand"),
        }
    }

    #[test]
    fn test_invalid_script_dialect_rejected() {
        assert!(Cli::try_parse_from(["specops", "init", "--script", "fish"]).is_err());
    }

    #[test]
    fn test_dialect_as_str() {
        assert_eq!(ScriptDialect::Sh.as_str(), "sh");
        assert_eq!(ScriptDialect::Ps.as_str(), "ps");
    }
}
