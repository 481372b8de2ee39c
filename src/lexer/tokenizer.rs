use super::*;
use super::scanner::{is_blank, resolve_escape, ScanState};

pub(super) fn scan(input: &str, start: usize) -> Token {
    let mut text = String::new();
    let mut kind = TokenKind::Literal;

    let Some(rest) = input.get(start..) else {
        return Token { text, kind, next: None };
    };

    let mut state = ScanState::default();

    for (idx, ch) in rest.char_indices() {
        let after = start + idx + ch.len_utf8();

        if state.escape {
            if let Some(resolved) = resolve_escape(ch) {
                text.push(resolved);
            }
            state.escape = false;
            continue;
        }

        if state.comment {
            // Only a carriage return closes a comment
            if ch == '\r' {
                return Token { text, kind, next: Some(after) };
            }
            continue;
        }

        match ch {
            c if is_blank(c) => {
                if state.quoted() {
                    text.push(c);
                }
            }
            '\\' => state.escape = true,
            '=' if !state.quoted() => {
                return Token { text, kind: TokenKind::Key, next: Some(after) };
            }
            ';' if !state.quoted() => {
                state.comment = true;
                kind = TokenKind::Value;
            }
            '<' => {
                if state.quoted() {
                    text.push(ch);
                }
                state.depth += 1;
            }
            '>' => {
                state.depth = state.depth.saturating_sub(1);
                if state.quoted() {
                    text.push(ch);
                }
            }
            _ => text.push(ch),
        }
    }

    Token { text, kind, next: None }
}
