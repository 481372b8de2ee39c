use std::fs;
use std::path::{Path, PathBuf};

use crate::config::DESCRIPTOR_FILE;
use crate::PackError;

/// List the pack directories directly under `dir`, sorted by path.
pub fn discover_packs<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>, PackError> {
    discover_packs_with(dir, DESCRIPTOR_FILE)
}

/// Like [`discover_packs`], for packs using a custom descriptor file name.
pub fn discover_packs_with<P: AsRef<Path>>(dir: P, descriptor_file: &str) -> Result<Vec<PathBuf>, PackError> {
    let dir = dir.as_ref();
    let entries = fs::read_dir(dir).map_err(|e| PackError::FileError {
        message: format!("Failed to list pack directory: {}", e),
        path: dir.to_string_lossy().to_string(),
        hint: Some("Check that the packs directory exists".into()),
        code: Some(320),
    })?;

    let mut packs: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_dir() && path.join(descriptor_file).is_file())
        .collect();
    packs.sort();
    Ok(packs)
}
