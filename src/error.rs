use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpecOpsError {
    #[error("missing required tools: {}", .0.join(", "))]
    MissingTools(Vec<String>),

    #[error("initialization aborted")]
    Aborted,

    #[error("unsupported AI agent: {0}")]
    UnsupportedAgent(String),

    #[error("template directory not found: {0}")]
    TemplateNotFound(PathBuf),

    #[error("failed to copy {path}: {source}")]
    Copy {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("command failed: {0}")]
    CommandFailed(String),

    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("catalog parse error: {0}")]
    CatalogParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SpecOpsError>;
