//! Configuration management for menshen
//!
//! This crate handles:
//! - Package manifest (`package.json`) access
//! - Command list and runner settings, from `menshen.toml` or the manifest
//! - Logging initialization

pub mod commands;
pub mod logging;
pub mod manifest;
pub mod settings;

// Re-export error types from core
pub use menshen_core::{Error, Result};

// Re-export main types
pub use commands::{CommandList, CommandSpec, StructuredCommand};
pub use manifest::PackageManifest;
pub use settings::Settings;
