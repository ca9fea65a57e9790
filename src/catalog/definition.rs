use serde::Deserialize;

/// An infrastructure tool probed on the host PATH.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolSpec {
    /// Command name resolved on the PATH
    pub command: String,
    /// Human-readable display name
    pub name: String,
    /// One-line description shown by `specops check`
    pub description: String,
    /// Whether init refuses to proceed when this tool is missing
    pub required: bool,
}

/// An AI coding assistant the scaffolded project can be configured for.
///
/// Agents are always optional: their presence is informational and never
/// gates initialization.
#[derive(Debug, Clone, Deserialize)]
pub struct AgentSpec {
    /// Identifier used as the template subdirectory and `--ai` value
    pub id: String,
    /// Human-readable display name
    pub name: String,
    /// One-line description shown by `specops check`
    pub description: String,
    /// CLI command probed on the host PATH
    pub command: String,
}

#[derive(Debug, Deserialize)]
pub struct ToolCatalogFile {
    #[serde(rename = "tool")]
    pub tools: Vec<ToolSpec>,
}

#[derive(Debug, Deserialize)]
pub struct AgentCatalogFile {
    #[serde(rename = "agent")]
    pub agents: Vec<AgentSpec>,
}
