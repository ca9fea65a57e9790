//! Filesystem mutation primitives: directory creation and the template
//! tree copy. All project-directory writes go through this module so
//! tests can run against disposable temporary trees.

use crate::error::{Result, SpecOpsError};
use indicatif::ProgressBar;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Ensure a directory exists, creating it and its parents if necessary
pub fn ensure_directory(path: &Path, debug: bool) -> Result<()> {
    if path.exists() {
        if debug {
            println!("[debug] directory exists: {}", path.display());
        }
        return Ok(());
    }

    if debug {
        println!("[debug] creating directory: {}", path.display());
    }
    fs::create_dir_all(path).map_err(|e| SpecOpsError::DirectoryCreate {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(())
}

/// Recursively copy every file under `source` into `dest`.
///
/// Relative paths are preserved, missing intermediate directories are
/// created, and each copy carries over the source file's permissions and
/// modification time. Existing files at the same relative path are overwritten;
/// files already in `dest` but absent from `source` are left alone, so
/// this is an additive merge rather than a mirror. The copy is not
/// transactional: files written before a failure stay on disk.
///
/// Returns the number of files copied.
pub fn copy_tree(
    source: &Path,
    dest: &Path,
    progress: Option<&ProgressBar>,
    debug: bool,
) -> Result<u64> {
    let files = walk_files(source)?;

    if let Some(bar) = progress {
        bar.set_length(files.len() as u64);
    }

    let mut copied = 0u64;
    for file in files {
        let relative = file
            .strip_prefix(source)
            .map_err(|_| SpecOpsError::Copy {
                path: file.clone(),
                source: std::io::Error::other("file escaped the source tree"),
            })?
            .to_path_buf();
        let dest_path = dest.join(&relative);

        if let Some(parent) = dest_path.parent() {
            ensure_directory(parent, debug)?;
        }

        if debug {
            println!("[debug] copying: {}", relative.display());
        }
        fs::copy(&file, &dest_path).map_err(|e| SpecOpsError::Copy {
            path: file.clone(),
            source: e,
        })?;
        propagate_mtime(&file, &dest_path);

        copied += 1;
        if let Some(bar) = progress {
            bar.inc(1);
        }
    }

    Ok(copied)
}

/// Carry the source's modification time over to the copy. Best-effort:
/// filesystems without mtime support just keep the fresh timestamp.
fn propagate_mtime(source: &Path, dest: &Path) {
    if let Ok(modified) = fs::metadata(source).and_then(|m| m.modified()) {
        let _ = File::options()
            .write(true)
            .open(dest)
            .and_then(|f| f.set_modified(modified));
    }
}

/// List every file under `root`, recursively. Directories are not
/// reported; they are inferred from file paths during the copy.
fn walk_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut stack = vec![root.to_path_buf()];

    while let Some(dir) = stack.pop() {
        let entries = fs::read_dir(&dir).map_err(|e| SpecOpsError::Copy {
            path: dir.clone(),
            source: e,
        })?;
        for entry in entries {
            let entry = entry.map_err(|e| SpecOpsError::Copy {
                path: dir.clone(),
                source: e,
            })?;
            let path = entry.path();
            if path.is_dir() {
                stack.push(path);
            } else {
                files.push(path);
            }
        }
    }

    Ok(files)
}
