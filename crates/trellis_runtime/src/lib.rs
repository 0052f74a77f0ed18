//! Session, reports, and CLI for Trellis.
//!
//! This crate provides:
//! - [`Session`] - Defines components from `.trl` sources, in order
//! - [`ComponentReport`] - Serializable component summaries
//! - The `trellis` command-line checker

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod report;
pub mod session;

pub use report::{AssignReport, ComponentReport, OptionReport, WarningReport};
pub use session::Session;
