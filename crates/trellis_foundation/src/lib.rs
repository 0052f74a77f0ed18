//! Core types and errors for Trellis.
//!
//! This crate provides:
//! - [`AssignKind`] - `property`, `data` or `context`
//! - [`AssignType`] - The fixed, closed set of assign types
//! - [`Error`] - Rich error types with declaration-site context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod types;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use error::DuplicateHint;
pub use types::{AssignKind, AssignType};
