// Author: Dustin Pilgrim
// License: MIT

mod scanner;
mod tokenizer;

/// How the parser should treat a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Text before an unquoted `=`.
    Key,
    /// Text before an unquoted `;`.
    Value,
    /// Text that ran into the end of input without `=` or `;`.
    Literal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
    /// Byte offset where the next scan starts, `None` once input is exhausted.
    pub next: Option<usize>,
}

/// Scan a single token from `input` starting at byte offset `start`.
///
/// The scan holds no state between calls apart from the offset the caller
/// passes back in.
pub fn scan_token(input: &str, start: usize) -> Token {
    tokenizer::scan(input, start)
}

/// Walks a buffer token by token, feeding each token's `next` offset back in.
pub struct Lexer<'a> {
    input: &'a str,
    offset: Option<usize>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer { input, offset: Some(0) }
    }

    /// Offset of the next scan, `None` after end of input.
    pub fn offset(&self) -> Option<usize> {
        self.offset
    }

    pub fn next_token(&mut self) -> Option<Token> {
        let offset = self.offset?;
        if offset >= self.input.len() {
            self.offset = None;
            return None;
        }
        let token = tokenizer::scan(self.input, offset);
        self.offset = token.next;
        Some(token)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}
