//! Filesystem primitives for scaffolding

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Create the directory a class file will live in and return it
///
/// Namespace separators in `class_name` become directories under `base`:
/// `create_directory_for("tests/_support", "Acme\\UnitTester")` creates and
/// returns `tests/_support/Acme`. An empty class name creates `base` itself.
pub fn create_directory_for(base: &Path, class_name: &str) -> Result<PathBuf> {
    let mut dir = base.to_path_buf();
    if let Some((namespace, _)) = class_name.replace('/', "\\").rsplit_once('\\') {
        dir.extend(namespace.split('\\').filter(|part| !part.is_empty()));
    }

    if !dir.exists() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
        tracing::debug!(dir = %dir.display(), "created directory");
    }
    Ok(dir)
}

/// Write `contents` to a new file
///
/// Existing files are left untouched and `false` is returned.
pub fn create_file(path: &Path, contents: &str) -> Result<bool> {
    if path.exists() {
        tracing::debug!(file = %path.display(), "file exists, not overwriting");
        return Ok(false);
    }

    fs::write(path, contents)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    tracing::debug!(file = %path.display(), bytes = contents.len(), "created file");
    Ok(true)
}

/// Class name without its namespace (`Acme\UnitTester` -> `UnitTester`)
pub fn short_class_name(name: &str) -> &str {
    name.rsplit(['\\', '/']).next().unwrap_or(name)
}
