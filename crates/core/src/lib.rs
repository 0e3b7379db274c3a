//! Core types and utilities for menshen
//!
//! This is the foundation crate (Layer 0) that all other menshen crates depend on.
//! It provides:
//! - Base error types
//! - File path decomposition used by argument templating
//!
//! This crate has no dependencies on other menshen crates.

pub mod error;
pub mod path;

pub use error::{Error, Result};
pub use path::PathParts;
