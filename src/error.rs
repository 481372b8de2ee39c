use std::fmt;

/// The main error type for language pack loading, typed access and archiving.
#[derive(Debug, Clone, PartialEq)]
pub enum PackError {
    FileError {
        message: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when a pack directory has no descriptor document.
    MissingDescriptor {
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when a pack has a descriptor but no adapter document.
    MissingAdapter {
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    ArchiveError {
        message: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    TypeError {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    KeyNotFound {
        key: String,
        hint: Option<String>,
        code: Option<u32>,
    },
}

impl PackError {
    /// Numeric code attached to the error, if any.
    pub fn code(&self) -> Option<u32> {
        match self {
            PackError::FileError { code, .. }
            | PackError::MissingDescriptor { code, .. }
            | PackError::MissingAdapter { code, .. }
            | PackError::ArchiveError { code, .. }
            | PackError::TypeError { code, .. }
            | PackError::KeyNotFound { code, .. } => *code,
        }
    }
}

fn suffix(hint: &Option<String>, code: &Option<u32>) -> String {
    format!(
        "{}{}",
        hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
        code.map_or(String::new(), |c| format!(" Code: {}", c))
    )
}

impl fmt::Display for PackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackError::FileError { message, path, hint, code } =>
                write!(f, "[PACK] File Error '{}': {}{}", path, message, suffix(hint, code)),
            PackError::MissingDescriptor { path, hint, code } =>
                write!(f, "[PACK] Pack load error: no descriptor document at '{}'{}",
                    path, suffix(hint, code)),
            PackError::MissingAdapter { path, hint, code } =>
                write!(f, "[PACK] Pack load error: no adapter document at '{}'{}",
                    path, suffix(hint, code)),
            PackError::ArchiveError { message, path, hint, code } =>
                write!(f, "[PACK] Archive Error '{}': {}{}", path, message, suffix(hint, code)),
            PackError::TypeError { message, hint, code } =>
                write!(f, "[PACK] Type Error: {}{}", message, suffix(hint, code)),
            PackError::KeyNotFound { key, hint, code } =>
                write!(f, "[PACK] Key '{}' not found{}", key, suffix(hint, code)),
        }
    }
}

impl std::error::Error for PackError {}
