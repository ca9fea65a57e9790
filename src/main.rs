#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;

use specops::cli::{Cli, Commands};
use specops::commands;
use specops::error::SpecOpsError;
use specops::utils::process::HostRunner;
use specops::utils::prompt::StdinPrompter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Init(cmd) => {
            let prompter = StdinPrompter;
            let runner = HostRunner { debug: cmd.debug };
            commands::init::execute(cmd, &prompter, &runner)
        }
        Commands::Check => commands::check::execute(),
    };

    match result {
        Ok(()) => Ok(()),
        // The abort message was already printed at the prompt
        Err(SpecOpsError::Aborted) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
