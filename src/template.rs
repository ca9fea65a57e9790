//! Template tree resolution.
//!
//! Templates ship beside the installed binary as
//! `templates/<agent>/<dialect>/`, one subdirectory per (agent, script
//! dialect) pair. `SPECOPS_TEMPLATES_DIR` overrides the root for
//! development and tests.

use crate::cli::ScriptDialect;
use crate::error::{Result, SpecOpsError};
use std::path::{Path, PathBuf};

pub const TEMPLATES_DIR_ENV: &str = "SPECOPS_TEMPLATES_DIR";

/// Locate the templates root for this installation
pub fn templates_root() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(TEMPLATES_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }

    let exe = std::env::current_exe()?;
    let exe_dir = exe.parent().ok_or_else(|| {
        SpecOpsError::TemplateNotFound(PathBuf::from("templates"))
    })?;
    Ok(exe_dir.join("templates"))
}

/// Resolve the template directory for an (agent, dialect) pair.
///
/// Fails when the computed directory does not exist on disk.
pub fn resolve(agent_id: &str, dialect: ScriptDialect) -> Result<PathBuf> {
    resolve_under(&templates_root()?, agent_id, dialect)
}

pub fn resolve_under(root: &Path, agent_id: &str, dialect: ScriptDialect) -> Result<PathBuf> {
    let template_dir = root.join(agent_id).join(dialect.as_str());
    if !template_dir.is_dir() {
        return Err(SpecOpsError::TemplateNotFound(template_dir));
    }
    Ok(template_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_under_existing_template() {
        let root = TempDir::new().unwrap();
        let template = root.path().join("claude/sh");
        fs::create_dir_all(&template).unwrap();

        let resolved = resolve_under(root.path(), "claude", ScriptDialect::Sh).unwrap();
        assert_eq!(resolved, template);
    }

    #[test]
    fn test_resolve_under_missing_template() {
        let root = TempDir::new().unwrap();
        let err = resolve_under(root.path(), "claude", ScriptDialect::Ps).unwrap_err();
        match err {
            SpecOpsError::TemplateNotFound(path) => {
                assert_eq!(path, root.path().join("claude/ps"));
            }
            other => panic!("expected TemplateNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_dialects_select_different_variants() {
        let root = TempDir::new().unwrap();
        fs::create_dir_all(root.path().join("gemini/sh")).unwrap();
        fs::create_dir_all(root.path().join("gemini/ps")).unwrap();

        let sh = resolve_under(root.path(), "gemini", ScriptDialect::Sh).unwrap();
        let ps = resolve_under(root.path(), "gemini", ScriptDialect::Ps).unwrap();
        assert_ne!(sh, ps);
    }

    #[test]
    #[serial]
    fn test_templates_root_env_override() {
        let tmp = TempDir::new().unwrap();
        std::env::set_var(TEMPLATES_DIR_ENV, tmp.path());
        let root = templates_root().unwrap();
        std::env::remove_var(TEMPLATES_DIR_ENV);
        assert_eq!(root, tmp.path());
    }

    #[test]
    #[serial]
    fn test_templates_root_defaults_next_to_executable() {
        std::env::remove_var(TEMPLATES_DIR_ENV);
        let root = templates_root().unwrap();
        assert_eq!(root.file_name().unwrap(), "templates");
    }
}
