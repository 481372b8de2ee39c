// Author: Dustin Pilgrim
// License: MIT

/// Per-token scan state. Escapes take priority over comments, comments over
/// normal scanning.
#[derive(Debug, Default)]
pub(super) struct ScanState {
    /// Nesting depth of `<...>` quotes.
    pub depth: usize,
    pub escape: bool,
    pub comment: bool,
}

impl ScanState {
    pub fn quoted(&self) -> bool {
        self.depth > 0
    }
}

/// Resolve the character following a `\`.
///
/// `\t` yields a carriage return rather than a tab; existing documents rely
/// on it. Unknown escapes resolve to nothing and the character is dropped.
pub(super) fn resolve_escape(ch: char) -> Option<char> {
    match ch {
        '\\' => Some('\\'),
        'r' => Some('\r'),
        'n' => Some('\n'),
        't' => Some('\r'),
        '<' => Some('<'),
        '>' => Some('>'),
        _ => None,
    }
}

pub(super) fn is_blank(ch: char) -> bool {
    matches!(ch, ' ' | '\n' | '\t' | '\r')
}
