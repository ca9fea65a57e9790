//! Loading and validation for the embedded tool and agent catalogs.

use super::definition::{AgentCatalogFile, AgentSpec, ToolCatalogFile, ToolSpec};
use crate::error::{Result, SpecOpsError};

/// Catalog of infrastructure tools, in declaration order.
pub struct ToolCatalog {
    tools: Vec<ToolSpec>,
}

impl ToolCatalog {
    /// Load the embedded infrastructure tool catalog
    pub fn load() -> Result<Self> {
        let file: ToolCatalogFile = toml::from_str(include_str!("../../catalog/tools.toml"))?;

        if file.tools.is_empty() {
            return Err(SpecOpsError::InvalidCatalog(
                "tool catalog is empty".to_string(),
            ));
        }
        for tool in &file.tools {
            if tool.command.is_empty() || tool.name.is_empty() {
                return Err(SpecOpsError::InvalidCatalog(format!(
                    "tool entry '{}' has an empty command or name",
                    tool.name
                )));
            }
        }

        Ok(Self { tools: file.tools })
    }

    /// All tools, in display order
    pub fn tools(&self) -> &[ToolSpec] {
        &self.tools
    }

    /// Command names of the required tools, in display order
    pub fn required_commands(&self) -> Vec<String> {
        self.tools
            .iter()
            .filter(|t| t.required)
            .map(|t| t.command.clone())
            .collect()
    }
}

/// Catalog of supported AI agents, in declaration order.
pub struct AgentCatalog {
    agents: Vec<AgentSpec>,
}

impl AgentCatalog {
    /// Load the embedded agent catalog
    pub fn load() -> Result<Self> {
        let file: AgentCatalogFile = toml::from_str(include_str!("../../catalog/agents.toml"))?;

        if file.agents.is_empty() {
            return Err(SpecOpsError::InvalidCatalog(
                "agent catalog is empty".to_string(),
            ));
        }
        for agent in &file.agents {
            if agent.id.is_empty() || agent.command.is_empty() {
                return Err(SpecOpsError::InvalidCatalog(format!(
                    "agent entry '{}' has an empty id or command",
                    agent.name
                )));
            }
        }

        Ok(Self {
            agents: file.agents,
        })
    }

    /// All agents, in display order
    pub fn agents(&self) -> &[AgentSpec] {
        &self.agents
    }

    /// Look up an agent by identifier, case-insensitively
    pub fn get(&self, id: &str) -> Option<&AgentSpec> {
        self.agents.iter().find(|a| a.id.eq_ignore_ascii_case(id))
    }

    /// Supported agent identifiers, in display order
    pub fn ids(&self) -> Vec<&str> {
        self.agents.iter().map(|a| a.id.as_str()).collect()
    }
}
