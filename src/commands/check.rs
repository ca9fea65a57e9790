//! `specops check` - report installed infrastructure tools and AI agents.
//!
//! Informational only: the report always exits 0, even when required
//! tools are missing.

use crate::catalog::{AgentCatalog, ToolCatalog};
use crate::error::Result;
use crate::probe::probe;

pub fn execute() -> Result<()> {
    let tools = ToolCatalog::load()?;
    let agents = AgentCatalog::load()?;

    println!();
    println!("SpecOps Tool Checker");
    println!("Verifying installed infrastructure tools and AI agents");
    println!();

    println!("Infrastructure Tools");
    println!(
        "{:<15} {:<12} {:<35} {:<10}",
        "TOOL", "STATUS", "DESCRIPTION", "REQUIRED"
    );
    println!("{}", "-".repeat(75));

    let mut missing_required = Vec::new();
    for tool in tools.tools() {
        let installed = probe(&tool.command);
        let status = if installed { "✓ Installed" } else { "✗ Missing" };
        let required = if tool.required { "Required" } else { "Optional" };

        if !installed && tool.required {
            missing_required.push(tool.name.clone());
        }

        println!(
            "{:<15} {:<12} {:<35} {:<10}",
            tool.name, status, tool.description, required
        );
    }

    println!();
    println!("AI Agents");
    println!("{:<15} {:<12} {:<35}", "AGENT", "STATUS", "DESCRIPTION");
    println!("{}", "-".repeat(64));

    for agent in agents.agents() {
        let status = if probe(&agent.command) {
            "✓ Installed"
        } else {
            "✗ Not found"
        };
        println!(
            "{:<15} {:<12} {:<35}",
            agent.name, status, agent.description
        );
    }

    println!();
    if missing_required.is_empty() {
        println!("✓ All required infrastructure tools are installed!");
        println!("You're ready to start using SpecOps.");
    } else {
        println!("⚠ Missing required tools:");
        for name in &missing_required {
            println!("  • {}", name);
        }
        println!();
        println!("Please install missing tools before proceeding.");
    }
    println!();

    Ok(())
}
