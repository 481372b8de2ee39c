use std::num::IntErrorKind;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::ast::{Value, ValueKind};
use crate::output::Output;

static INTEGER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?[0-9]+$").expect("integer pattern is valid")
});

// No explicit `+`, and a leading zero group needs a non-zero fraction.
static DOUBLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^-?([1-9][0-9]*\.[0-9]*|0\.[0-9]*[1-9][0-9]*)$").expect("double pattern is valid")
});

impl Value {
    /// Infer a typed value from raw text.
    ///
    /// Tried in order: integer, double, boolean (case-insensitive `true` /
    /// `false`), and finally text stored unmodified.
    ///
    /// # Examples
    /// ```
    /// use langpack::{Output, Value};
    ///
    /// let out = Output::silent();
    /// assert_eq!(Value::infer("42", &out), Value::Integer(Some(42)));
    /// assert_eq!(Value::infer("-3.5", &out), Value::Double(Some(-3.5)));
    /// assert_eq!(Value::infer("TRUE", &out), Value::Boolean(true));
    /// assert_eq!(Value::infer("hello", &out), Value::Text("hello".into()));
    /// ```
    pub fn infer(text: &str, output: &Output) -> Value {
        if INTEGER.is_match(text) {
            coerce_integer(text, output)
        } else if DOUBLE.is_match(text) {
            coerce_double(text, output)
        } else if let Some(b) = parse_bool(text) {
            Value::Boolean(b)
        } else {
            Value::Text(text.to_string())
        }
    }

    /// Build a value of an explicit kind.
    ///
    /// Numeric failures keep the requested kind with no payload, a boolean
    /// mismatch leaves the value unset. Every failure sends one diagnostic to
    /// `output`; none of them abort.
    pub fn coerce(text: &str, kind: ValueKind, output: &Output) -> Value {
        match kind {
            ValueKind::Unset => Value::infer(text, output),
            ValueKind::Integer => coerce_integer(text, output),
            ValueKind::Double => coerce_double(text, output),
            ValueKind::Boolean => match parse_bool(text) {
                Some(b) => Value::Boolean(b),
                None => {
                    output.emit(&format!("Cannot convert '{}' to Boolean", text));
                    Value::Unset
                }
            },
            ValueKind::Text => Value::Text(text.to_string()),
            ValueKind::Function => Value::Function(text.to_string()),
            ValueKind::Error => {
                output.emit(&format!("Cannot convert '{}' to {}: not a target kind", text, kind));
                Value::Unset
            }
        }
    }
}

fn parse_bool(text: &str) -> Option<bool> {
    if text.eq_ignore_ascii_case("true") {
        Some(true)
    } else if text.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

fn coerce_integer(text: &str, output: &Output) -> Value {
    match text.trim().parse::<i64>() {
        Ok(n) => Value::Integer(Some(n)),
        Err(e) => {
            let reason = match e.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => "out of Integer range",
                _ => "invalid Integer format",
            };
            output.emit(&format!("Cannot convert '{}' to Integer: {}", text, reason));
            Value::Integer(None)
        }
    }
}

fn coerce_double(text: &str, output: &Output) -> Value {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_infinite() && !trimmed.to_ascii_lowercase().contains("inf") => {
            output.emit(&format!("Cannot convert '{}' to Double: out of Double range", text));
            Value::Double(None)
        }
        Ok(n) => Value::Double(Some(n)),
        Err(_) => {
            output.emit(&format!("Cannot convert '{}' to Double: invalid Double format", text));
            Value::Double(None)
        }
    }
}
