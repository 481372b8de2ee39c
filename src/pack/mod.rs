// Author: Dustin Pilgrim
// License: MIT

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::config::{resolve_pack_path, PackOptions};
use crate::output::Output;
use crate::parser::parse_file;
use crate::PackError;

mod adapter;
mod descriptor;
mod discover;

pub use adapter::{AdapterEntry, AdapterTable, Origin};
pub use descriptor::Descriptor;
pub use discover::{discover_packs, discover_packs_with};

/// A language pack directory: descriptor, adapter table and a cache holding
/// the texts of the most recently loaded segment.
///
/// A pack is not meant to be shared between threads while `load`/`clear`
/// are being called; give each session its own instance.
///
/// # Examples
/// ```no_run
/// use langpack::LanguagePack;
///
/// # fn main() -> Result<(), langpack::PackError> {
/// let mut pack = LanguagePack::open_with_fallback("packs/fr", "packs/en")?;
/// if pack.load("menu") {
///     println!("{}", pack.lookup("start").unwrap_or("<missing>"));
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct LanguagePack {
    root: PathBuf,
    descriptor: Descriptor,
    adapter: AdapterTable,
    loaded_path: Option<PathBuf>,
    texts: IndexMap<String, String>,
    output: Output,
}

impl LanguagePack {
    /// Open the pack at `path` with default options.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, PackError> {
        Self::open_with(path, PackOptions::default())
    }

    /// Open the pack at `path`, taking adapter entries it lacks from `fallback`.
    pub fn open_with_fallback<P, F>(path: P, fallback: F) -> Result<Self, PackError>
    where
        P: AsRef<Path>,
        F: AsRef<Path>,
    {
        Self::open_with(path, PackOptions::default().with_fallback(fallback.as_ref()))
    }

    /// Open the pack at `path`.
    ///
    /// The fallback adapter (if configured and present) is read first, then
    /// the pack's descriptor, then the pack's adapter, whose entries override
    /// fallback entries of the same name.
    ///
    /// # Errors
    /// `MissingDescriptor` if the pack has no descriptor document,
    /// `MissingAdapter` if it has a descriptor but no adapter document, and
    /// `FileError` if one of the documents exists but can't be read.
    pub fn open_with<P: AsRef<Path>>(path: P, options: PackOptions) -> Result<Self, PackError> {
        let root = resolve_pack_path(path.as_ref())?;
        let PackOptions { descriptor_file, adapter_file, fallback, output } = options;

        let mut adapter = AdapterTable::new();

        if let Some(fallback) = fallback {
            let fallback = resolve_pack_path(&fallback)?;
            let fallback_adapter = fallback.join(&adapter_file);
            if fallback_adapter.is_file() {
                let doc = parse_file(&fallback_adapter, &output)?;
                adapter.merge_fallback(&fallback, &doc);
                tracing::debug!(fallback = %fallback.display(), entries = doc.len(), "merged fallback adapter");
            }
        }

        let descriptor_path = root.join(&descriptor_file);
        if !descriptor_path.is_file() {
            return Err(PackError::MissingDescriptor {
                path: descriptor_path.to_string_lossy().to_string(),
                hint: Some(format!("A language pack needs a '{}' document", descriptor_file)),
                code: Some(310),
            });
        }
        let descriptor = Descriptor::from_document(&parse_file(&descriptor_path, &output)?);
        tracing::debug!(
            name = %descriptor.name,
            version = %descriptor.version,
            author = %descriptor.author,
            image = %descriptor.image,
            "read pack descriptor"
        );

        let adapter_path = root.join(&adapter_file);
        if !adapter_path.is_file() {
            return Err(PackError::MissingAdapter {
                path: adapter_path.to_string_lossy().to_string(),
                hint: Some(format!("Add a '{}' mapping segment names to files", adapter_file)),
                code: Some(311),
            });
        }
        adapter.overlay(&parse_file(&adapter_path, &output)?);

        tracing::info!(
            pack = %descriptor.name,
            root = %root.display(),
            segments = adapter.len(),
            "opened language pack"
        );

        Ok(Self {
            root,
            descriptor,
            adapter,
            loaded_path: None,
            texts: IndexMap::new(),
            output,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    pub fn adapter(&self) -> &AdapterTable {
        &self.adapter
    }

    /// File backing the cached texts, if any.
    pub fn loaded_path(&self) -> Option<&Path> {
        self.loaded_path.as_deref()
    }

    pub fn texts(&self) -> impl Iterator<Item = (&str, &str)> {
        self.texts.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Make `segment` the cached segment.
    ///
    /// Returns `false` when the segment is unknown, maps to an empty path, or
    /// its file is missing or unreadable; the cache is left untouched then.
    /// Loading the file that is already cached does not touch the disk.
    pub fn load(&mut self, segment: &str) -> bool {
        let Some(path) = self.adapter.resolve(&self.root, segment) else {
            return false;
        };
        if !path.is_file() {
            return false;
        }
        if self.loaded_path.as_deref() == Some(path.as_path()) {
            tracing::trace!(segment, "segment already cached");
            return true;
        }

        let doc = match parse_file(&path, &self.output) {
            Ok(doc) => doc,
            Err(e) => {
                self.output.emit(&e.to_string());
                return false;
            }
        };

        self.texts = doc
            .iter()
            .map(|(key, value)| (key.to_string(), value.payload_text().unwrap_or_default()))
            .collect();
        tracing::debug!(segment, path = %path.display(), entries = self.texts.len(), "loaded segment");
        self.loaded_path = Some(path);
        true
    }

    /// Drop the cached texts so the next `load` reads from disk.
    pub fn clear(&mut self) {
        self.texts.clear();
        self.loaded_path = None;
    }

    /// Text for `key` in the cached segment.
    ///
    /// `None` both when nothing is loaded and when the key is missing.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        if self.texts.is_empty() {
            return None;
        }
        self.texts.get(key).map(String::as_str)
    }
}
