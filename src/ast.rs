// Author: Dustin Pilgrim
// License: MIT

use std::fmt;

use indexmap::IndexMap;

use crate::output::Output;

/// A single scalar read from a key/value document.
///
/// Numeric variants carry an `Option` because a failed explicit coercion
/// keeps the requested kind but stores no payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Unset,
    Integer(Option<i64>),
    Double(Option<f64>),
    Boolean(bool),
    Text(String),
    Function(String),
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Unset,
    Integer,
    Double,
    Boolean,
    Text,
    Function,
    Error,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Unset => "Unset",
            ValueKind::Integer => "Integer",
            ValueKind::Double => "Double",
            ValueKind::Boolean => "Boolean",
            ValueKind::Text => "Text",
            ValueKind::Function => "Function",
            ValueKind::Error => "Error",
        };
        f.write_str(name)
    }
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Unset => ValueKind::Unset,
            Value::Integer(_) => ValueKind::Integer,
            Value::Double(_) => ValueKind::Double,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Text(_) => ValueKind::Text,
            Value::Function(_) => ValueKind::Function,
            Value::Error => ValueKind::Error,
        }
    }

    /// True when no payload is present.
    pub fn is_empty(&self) -> bool {
        matches!(
            self,
            Value::Unset | Value::Error | Value::Integer(None) | Value::Double(None)
        )
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) | Value::Function(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => *n,
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self {
            Value::Double(n) => *n,
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Payload rendered as plain text, `None` for empty values.
    pub fn payload_text(&self) -> Option<String> {
        match self {
            Value::Integer(Some(n)) => Some(n.to_string()),
            Value::Double(Some(n)) => Some(n.to_string()),
            Value::Boolean(b) => Some(b.to_string()),
            Value::Text(s) | Value::Function(s) => Some(s.clone()),
            Value::Unset | Value::Error | Value::Integer(None) | Value::Double(None) => None,
        }
    }

    /// `[Kind]: payload`, or `[Kind]:` when there is no payload.
    pub fn describe(&self) -> String {
        match self.payload_text() {
            Some(text) => format!("[{}]: {}", self.kind(), text),
            None => format!("[{}]:", self.kind()),
        }
    }

    pub fn print(&self, output: &Output) {
        output.emit(&self.describe());
    }

    /// Render the payload back into document syntax.
    ///
    /// Inferred values survive a write/parse cycle unchanged: doubles always
    /// keep a decimal point and text is angle-quoted with `\`, `<` and `>`
    /// escaped. Empty values have no source form.
    pub fn to_source(&self) -> Option<String> {
        match self {
            Value::Integer(Some(n)) => Some(n.to_string()),
            Value::Double(Some(n)) => {
                let mut text = n.to_string();
                if n.is_finite() && !text.contains('.') {
                    text.push_str(".0");
                }
                Some(text)
            }
            Value::Boolean(b) => Some(b.to_string()),
            Value::Text(s) | Value::Function(s) => Some(quote(s)),
            Value::Unset | Value::Error | Value::Integer(None) | Value::Double(None) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.payload_text().unwrap_or_default())
    }
}

/// Wrap `s` in angle quotes, escaping characters the tokenizer treats specially.
pub(crate) fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('<');
    for ch in s.chars() {
        match ch {
            '\\' | '<' | '>' => {
                out.push('\\');
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
    out.push('>');
    out
}

/// Bounds-checked access into an argument list; out of range yields `Value::Error`.
pub fn value_at(values: &[Value], index: usize) -> Value {
    values.get(index).cloned().unwrap_or(Value::Error)
}

/// Ordered key/value mapping produced by one parse call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    entries: IndexMap<String, Value>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite `key`. An overwritten key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.entries.insert(key.into(), value)
    }

    pub fn value(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Payload text for `key`, or an empty string when absent or empty.
    pub fn info(&self, key: &str) -> String {
        self.entries
            .get(key)
            .and_then(Value::payload_text)
            .unwrap_or_default()
    }

    pub fn print(&self, output: &Output) {
        for (key, value) in &self.entries {
            output.emit(&format!("[key]:{}", key));
            value.print(output);
        }
    }
}

impl FromIterator<(String, Value)> for Document {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

impl IntoIterator for Document {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
