use serde::{Deserialize, Serialize};

use crate::ast::Document;

/// Identifying metadata of a pack. Missing keys read as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Descriptor {
    pub name: String,
    pub version: String,
    pub author: String,
    pub image: String,
    pub description: String,
}

impl Descriptor {
    pub fn from_document(doc: &Document) -> Self {
        Self {
            name: doc.info("Name"),
            version: doc.info("Version"),
            author: doc.info("Author"),
            image: doc.info("Image"),
            description: doc.info("Description"),
        }
    }
}
