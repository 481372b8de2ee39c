use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::ast::Document;

/// Where an adapter entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Read from the fallback pack; the stored path already includes the
    /// fallback directory.
    Fallback,
    /// Read from the pack itself; the stored path is relative to its root.
    Pack,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterEntry {
    pub origin: Origin,
    pub path: PathBuf,
}

/// Segment name to file path table, built from a fallback adapter document
/// overlaid by the pack's own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdapterTable {
    entries: IndexMap<String, AdapterEntry>,
}

impl AdapterTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every entry of a fallback adapter document, rooted at `fallback_dir`.
    pub fn merge_fallback(&mut self, fallback_dir: &Path, doc: &Document) {
        for (key, _) in doc.iter() {
            let relative = doc.info(key);
            let path = if relative.is_empty() {
                PathBuf::new()
            } else {
                fallback_dir.join(relative)
            };
            self.entries.insert(
                key.to_string(),
                AdapterEntry { origin: Origin::Fallback, path },
            );
        }
    }

    /// Overlay the pack's own adapter document; its entries replace fallback ones.
    pub fn overlay(&mut self, doc: &Document) {
        for (key, _) in doc.iter() {
            self.entries.insert(
                key.to_string(),
                AdapterEntry {
                    origin: Origin::Pack,
                    path: PathBuf::from(doc.info(key)),
                },
            );
        }
    }

    pub fn entry(&self, segment: &str) -> Option<&AdapterEntry> {
        self.entries.get(segment)
    }

    /// Final file path for `segment` in a pack rooted at `root`.
    ///
    /// `None` when the segment is unknown or maps to an empty path.
    pub fn resolve(&self, root: &Path, segment: &str) -> Option<PathBuf> {
        let entry = self.entries.get(segment)?;
        if entry.path.as_os_str().is_empty() {
            return None;
        }
        match entry.origin {
            Origin::Pack => Some(root.join(&entry.path)),
            Origin::Fallback => Some(entry.path.clone()),
        }
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
