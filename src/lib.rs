//! Trellis - Declarative schema and validation engine for component assigns
//!
//! This crate re-exports all layers of the Trellis system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: trellis_runtime    — Session, reports, CLI
//! Layer 2: trellis_schema     — Builder, validator, registry, finalized schemas
//! Layer 1: trellis_language   — Lexer, parser, AST for .trl sources
//! Layer 0: trellis_foundation — Assign kinds and types, errors
//! ```

pub use trellis_foundation as foundation;
pub use trellis_language as language;
pub use trellis_runtime as runtime;
pub use trellis_schema as schema;
