// Author: Dustin Pilgrim
// License: MIT

use std::fmt;
use std::sync::Arc;

/// Diagnostic sink handed to the parser, value coercion and language packs.
///
/// Messages are informational only: nothing in the crate branches on whether
/// a message was delivered. The default sink forwards to `tracing` at warn
/// level, so diagnostics show up wherever the embedding application sends
/// its logs.
///
/// # Examples
/// ```
/// use std::sync::{Arc, Mutex};
/// use langpack::Output;
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = seen.clone();
/// let output = Output::new(move |msg: &str| sink.lock().unwrap().push(msg.to_string()));
/// output.emit("hello");
/// assert_eq!(seen.lock().unwrap().as_slice(), ["hello"]);
/// ```
#[derive(Clone)]
pub struct Output {
    sink: Arc<dyn Fn(&str) + Send + Sync>,
}

impl Output {
    pub fn new<F>(sink: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        Self { sink: Arc::new(sink) }
    }

    /// A sink that drops every message.
    pub fn silent() -> Self {
        Self::new(|_| {})
    }

    pub fn emit(&self, message: &str) {
        (self.sink)(message);
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new(|message| tracing::warn!(target: "langpack", "{}", message))
    }
}

impl fmt::Debug for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Output").finish_non_exhaustive()
    }
}
