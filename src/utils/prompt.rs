//! Interactive prompting behind a swappable trait, so the orchestrator
//! can be driven by a scripted prompter in tests.

use crate::error::{Result, SpecOpsError};
use std::io::{self, Write};

/// Blocking user interaction: yes/no confirmation and 1-of-N selection.
pub trait Prompter {
    /// Ask a yes/no question; returns false on a negative or empty answer
    fn confirm(&self, question: &str) -> Result<bool>;

    /// Present numbered options as (identifier, display name) pairs and
    /// return the chosen identifier
    fn choose_one(&self, title: &str, options: &[(&str, &str)]) -> Result<String>;
}

/// Prompter reading answers from stdin.
pub struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn confirm(&self, question: &str) -> Result<bool> {
        print!("{} [y/N] ", question);
        io::stdout().flush()?;

        let mut input = String::new();
        let bytes = io::stdin().read_line(&mut input)?;
        if bytes == 0 {
            // stdin closed (non-interactive); treat as a decline
            return Ok(false);
        }

        let input = input.trim().to_lowercase();
        Ok(input == "y" || input == "yes")
    }

    fn choose_one(&self, title: &str, options: &[(&str, &str)]) -> Result<String> {
        println!();
        println!("{}", title);
        println!();
        for (i, (_, name)) in options.iter().enumerate() {
            println!("  {}. {}", i + 1, name);
        }
        println!();

        loop {
            print!("Enter a number [1-{}]: ", options.len());
            io::stdout().flush()?;

            let mut input = String::new();
            let bytes = io::stdin().read_line(&mut input)?;
            if bytes == 0 {
                // stdin closed mid-selection; nothing sensible to pick
                return Err(SpecOpsError::Aborted);
            }

            match input.trim().parse::<usize>() {
                Ok(n) if n >= 1 && n <= options.len() => {
                    return Ok(options[n - 1].0.to_string());
                }
                _ => {
                    println!("Please enter a number between 1 and {}.", options.len());
                }
            }
        }
    }
}
