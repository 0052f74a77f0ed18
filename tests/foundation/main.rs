//! Integration tests for Layer 0: Foundation
//!
//! Tests for assign kinds, the closed type set, and errors.

mod types;
