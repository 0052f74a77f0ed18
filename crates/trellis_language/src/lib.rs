//! Lexer, parser, and syntax tree for Trellis declaration sources.
//!
//! This crate provides:
//! - [`Lexer`] - Tokenization of `.trl` source
//! - [`Parser`] - Parsing tokens into [`Ast`] forms with [`Span`]s
//! - [`pretty`] - Rendering syntax back to source text
//!
//! Option expressions stay as syntax all the way through the schema
//! pipeline, so the same [`Ast`] is validated, stored, and rendered into
//! generated documentation.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod pretty;
pub mod source;
pub mod token;

pub use ast::Ast;
pub use lexer::Lexer;
pub use parser::{Parser, parse};
pub use source::{SourceFile, Span};
pub use token::{Token, TokenKind};
