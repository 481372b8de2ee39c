// Author: Dustin Pilgrim
// License: MIT

use std::path::{Path, PathBuf};

use crate::ast::{Document, Value};
use crate::output::Output;
use crate::PackError;

mod access;
mod conversion;
mod validation;

/// Default file name of a pack's descriptor document.
pub const DESCRIPTOR_FILE: &str = "illustration.txt";
/// Default file name of a pack's adapter document.
pub const ADAPTER_FILE: &str = "adapter.txt";

/// Settings for opening a language pack.
///
/// # Example
/// ```
/// use langpack::{Output, PackOptions};
///
/// let options = PackOptions::default()
///     .with_fallback("packs/default")
///     .with_output(Output::silent());
/// assert_eq!(options.descriptor_file, "illustration.txt");
/// ```
#[derive(Debug, Clone)]
pub struct PackOptions {
    pub descriptor_file: String,
    pub adapter_file: String,
    /// Lower-priority pack whose adapter entries apply unless overridden.
    pub fallback: Option<PathBuf>,
    pub output: Output,
}

impl Default for PackOptions {
    fn default() -> Self {
        Self {
            descriptor_file: DESCRIPTOR_FILE.to_string(),
            adapter_file: ADAPTER_FILE.to_string(),
            fallback: None,
            output: Output::default(),
        }
    }
}

impl PackOptions {
    pub fn with_fallback<P: Into<PathBuf>>(mut self, fallback: P) -> Self {
        self.fallback = Some(fallback.into());
        self
    }

    pub fn with_output(mut self, output: Output) -> Self {
        self.output = output;
        self
    }

    pub fn with_descriptor_file(mut self, name: impl Into<String>) -> Self {
        self.descriptor_file = name.into();
        self
    }

    pub fn with_adapter_file(mut self, name: impl Into<String>) -> Self {
        self.adapter_file = name.into();
        self
    }
}

/// Expand a leading `~/` against the home directory.
pub fn resolve_pack_path(raw_path: &Path) -> Result<PathBuf, PackError> {
    match raw_path.strip_prefix("~") {
        Ok(rest) => {
            let home = dirs::home_dir().ok_or_else(|| PackError::FileError {
                message: "Could not determine home directory for ~ expansion".into(),
                path: raw_path.to_string_lossy().to_string(),
                hint: Some("Set HOME or use an absolute pack path".into()),
                code: Some(300),
            })?;
            Ok(home.join(rest))
        }
        Err(_) => Ok(raw_path.to_path_buf()),
    }
}

#[cfg(test)]
mod tests;
