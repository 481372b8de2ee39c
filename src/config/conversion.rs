// Author: Dustin Pilgrim
// License: MIT

use crate::ast::Value;
use crate::PackError;

fn type_error(expected: &str, value: &Value, code: u32) -> PackError {
    if value.is_empty() {
        PackError::TypeError {
            message: format!("Expected {}, got empty {} value", expected, value.kind()),
            hint: Some("The entry has no payload; check for a missing ';' or a bad literal".into()),
            code: Some(code),
        }
    } else {
        PackError::TypeError {
            message: format!("Expected {}, got {}", expected, value.describe()),
            hint: None,
            code: Some(code),
        }
    }
}

fn out_of_range(n: i64, target: &str) -> PackError {
    PackError::TypeError {
        message: format!("Integer {} out of range for {}", n, target),
        hint: None,
        code: Some(409),
    }
}

impl TryFrom<Value> for String {
    type Error = PackError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Text(s) | Value::Function(s) => Ok(s),
            _ => Err(type_error("text", &value, 401)),
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = PackError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Integer(Some(n)) => Ok(n),
            _ => Err(type_error("integer", &value, 402)),
        }
    }
}

impl TryFrom<Value> for i32 {
    type Error = PackError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let n = i64::try_from(value)?;
        i32::try_from(n).map_err(|_| out_of_range(n, "i32"))
    }
}

impl TryFrom<Value> for u32 {
    type Error = PackError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let n = i64::try_from(value)?;
        u32::try_from(n).map_err(|_| out_of_range(n, "u32"))
    }
}

impl TryFrom<Value> for u16 {
    type Error = PackError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let n = i64::try_from(value)?;
        u16::try_from(n).map_err(|_| out_of_range(n, "u16"))
    }
}

impl TryFrom<Value> for usize {
    type Error = PackError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let n = i64::try_from(value)?;
        usize::try_from(n).map_err(|_| out_of_range(n, "usize"))
    }
}

impl TryFrom<Value> for f64 {
    type Error = PackError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Double(Some(n)) => Ok(n),
            Value::Integer(Some(n)) => Ok(n as f64),
            _ => Err(type_error("number", &value, 403)),
        }
    }
}

impl TryFrom<Value> for f32 {
    type Error = PackError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        f64::try_from(value).map(|n| n as f32)
    }
}

impl TryFrom<Value> for bool {
    type Error = PackError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Boolean(b) => Ok(b),
            Value::Text(ref s) if s.to_lowercase().starts_with("tru") || s.to_lowercase().starts_with("fal") => {
                Err(PackError::TypeError {
                    message: format!("Invalid boolean value '{}'. Did you mean 'true' or 'false'?", s),
                    hint: None,
                    code: Some(404),
                })
            }
            _ => Err(type_error("boolean", &value, 404)),
        }
    }
}
