//! Fixed catalogs of infrastructure tools and AI agents.
//!
//! Both catalogs are embedded TOML parsed at load time. They are
//! immutable for the life of the process and keep their declaration
//! order for deterministic display.

pub mod definition;
pub mod registry;

pub use definition::{AgentSpec, ToolSpec};
pub use registry::{AgentCatalog, ToolCatalog};
