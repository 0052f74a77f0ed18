//! Integration tests for Layer 2: Schema
//!
//! Tests for declaration, validation, registration, finalization, and the
//! post-check, driven through `ComponentBuilder`.

mod context;
mod finalize;
mod uniqueness;
mod validation;

use trellis_language::{Ast, Span, parse};
use trellis_schema::{ComponentBuilder, SchemaConfig};

/// Parses a single form.
pub fn ast(src: &str) -> Ast {
    parse(src).unwrap().remove(0)
}

/// A builder for component `Card` that does not log.
pub fn card() -> ComponentBuilder {
    ComponentBuilder::new("Card", "card.trl").with_config(SchemaConfig::quiet())
}

/// A span on `line`.
pub fn at(line: u32) -> Span {
    Span::line(line)
}
