use super::*;
use crate::ast::Value;
use crate::lexer::TokenKind;

pub(super) fn parse_document(parser: &mut Parser) -> Document {
    let mut doc = Document::new();
    let mut pending: Option<String> = None;

    while let Some(token) = parser.bump() {
        match token.kind {
            TokenKind::Key => {
                // Repeated keys start over: last write wins, first position kept
                doc.insert(token.text.clone(), Value::Unset);
                pending = Some(token.text);
            }
            TokenKind::Value => {
                if let Some(key) = pending.take() {
                    let value = Value::infer(&token.text, parser.output());
                    doc.insert(key, value);
                }
            }
            TokenKind::Literal => {
                if !token.text.is_empty() {
                    parser.output().emit(&format!(
                        "Unterminated assignment '{}' dropped: missing ';'",
                        token.text
                    ));
                }
            }
        }
    }

    tracing::trace!(entries = doc.len(), "parsed document");
    doc
}
