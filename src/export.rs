// Author: Dustin Pilgrim
// License: MIT

use serde_json::json;

use crate::ast::{quote, Document, Value};
use crate::pack::Descriptor;
use crate::PackError;

/// Write a document back into key/value syntax.
///
/// Every entry ends in `;` followed by CRLF, since only a carriage return
/// closes the comment that `;` opens. Keys are angle-quoted; unset and other
/// empty values are written as a bare `<key>=` so they parse back as
/// placeholders.
///
/// # Examples
/// ```
/// use langpack::{export, parser, Output};
///
/// let out = Output::silent();
/// let doc = parser::parse("count=3;\r\ntitle=<a <b> c>;", &out);
/// let text = export::serialize(&doc);
/// assert_eq!(parser::parse(&text, &out), doc);
/// ```
pub fn serialize(doc: &Document) -> String {
    let mut out = String::new();
    for (key, value) in doc.iter() {
        out.push_str(&quote(key));
        out.push('=');
        if let Some(source) = value.to_source() {
            out.push_str(&source);
            out.push(';');
        }
        out.push_str("\r\n");
    }
    out
}

fn value_to_json(v: &Value) -> serde_json::Value {
    match v {
        Value::Integer(Some(n)) => json!(n),
        Value::Double(Some(n)) => json!(n),
        Value::Boolean(b) => json!(b),
        Value::Text(s) => json!(s),
        Value::Function(name) => json!({ "function": name }),
        Value::Error => json!({ "error": true }),
        Value::Unset | Value::Integer(None) | Value::Double(None) => serde_json::Value::Null,
    }
}

/// Export a document to a pretty-printed JSON object, preserving key order.
pub fn export_document_to_json(doc: &Document) -> Result<String, PackError> {
    let mut map = serde_json::Map::new();
    for (key, value) in doc.iter() {
        map.insert(key.to_string(), value_to_json(value));
    }

    serde_json::to_string_pretty(&serde_json::Value::Object(map)).map_err(|e| PackError::TypeError {
        message: format!("Failed to serialize document: {}", e),
        hint: None,
        code: Some(500),
    })
}

/// Export a pack descriptor as JSON.
pub fn export_descriptor_to_json(descriptor: &Descriptor) -> Result<String, PackError> {
    serde_json::to_string_pretty(descriptor).map_err(|e| PackError::TypeError {
        message: format!("Failed to serialize descriptor: {}", e),
        hint: None,
        code: Some(501),
    })
}
