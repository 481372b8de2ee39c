use std::fs;
use std::path::Path;

use crate::ast::Document;
use crate::lexer::{Lexer, Token};
use crate::output::Output;
use crate::PackError;

mod document;
mod value;

/// Drives the lexer over one in-memory buffer and collects a [`Document`].
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    output: &'a Output,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str, output: &'a Output) -> Self {
        Self { lexer: Lexer::new(input), output }
    }

    pub(crate) fn bump(&mut self) -> Option<Token> {
        self.lexer.next_token()
    }

    pub(crate) fn output(&self) -> &Output {
        self.output
    }

    pub fn parse_document(&mut self) -> Document {
        document::parse_document(self)
    }
}

/// Parse `input` into a document, reporting anomalies through `output`.
///
/// Parsing never fails: conversion problems and dropped assignments are
/// reported and skipped.
pub fn parse(input: &str, output: &Output) -> Document {
    Parser::new(input, output).parse_document()
}

/// Read `path` and parse its contents.
pub fn parse_file<P: AsRef<Path>>(path: P, output: &Output) -> Result<Document, PackError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| PackError::FileError {
        message: format!("Failed to read file: {}", e),
        path: path.to_string_lossy().to_string(),
        hint: Some("Check that the file exists and is valid UTF-8".into()),
        code: Some(301),
    })?;
    Ok(parse(&content, output))
}

#[cfg(test)]
mod tests;
