//! Assign declarations and component schemas for Trellis.
//!
//! This crate provides:
//! - [`ComponentBuilder`] - Declaration calls, validated and registered in source order
//! - [`validate`](validate::validate) - The ordered validation pipeline
//! - [`AssignRegistry`] - Name uniqueness with the `only_children` exemption
//! - [`ComponentSchema`] - Finalized accessor views
//! - [`ComponentAnalyzer`] - `(component: ...)` source forms
//!
//! # Example
//!
//! ```
//! use trellis_language::{Ast, Span};
//! use trellis_schema::ComponentBuilder;
//!
//! let mut card = ComponentBuilder::new("Card", "card.trl");
//! card.doc("The card title");
//! card.property(
//!     &Ast::symbol("title"),
//!     &Ast::keyword("string"),
//!     &Ast::keyword_list([("required", Ast::bool_lit(true))]),
//!     Span::line(3),
//! )
//! .unwrap();
//!
//! let card = card.finalize().unwrap();
//! assert!(card.schema().has_property("title"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod analyzer;
pub mod assign;
pub mod builder;
pub mod capabilities;
pub mod check;
pub mod component;
pub mod config;
pub mod docs;
pub mod options;
pub mod registry;
pub mod schema;
pub mod validate;

pub use analyzer::ComponentAnalyzer;
pub use assign::{Assign, ContextAction, ContextScope, Site};
pub use builder::ComponentBuilder;
pub use capabilities::Capabilities;
pub use check::{Diagnostic, Severity};
pub use component::Component;
pub use config::SchemaConfig;
pub use options::Options;
pub use registry::AssignRegistry;
pub use schema::ComponentSchema;
