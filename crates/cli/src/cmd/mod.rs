//! CLI command implementations
//!
//! This module contains all command implementations for the menshen CLI.

pub mod list;
pub mod run;
