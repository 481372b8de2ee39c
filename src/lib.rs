pub mod archive;
pub mod ast;
pub mod config;
pub mod error;
pub mod export;
pub mod lexer;
pub mod output;
pub mod pack;
pub mod parser;

pub use ast::{Document, Value, ValueKind};
pub use config::PackOptions;
pub use error::PackError;
pub use output::Output;
pub use pack::{Descriptor, LanguagePack};
