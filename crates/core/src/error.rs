//! Base error types for menshen
//!
//! This module provides the foundation error types that all crates can use.

use thiserror::Error;

/// Base error type for shared functionality
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Package manifest error
    #[error("Manifest error: {0}")]
    Manifest(String),

    /// Git error
    #[error("Git error: {0}")]
    Git(String),

    /// A configured entry has no command to run.
    ///
    /// Raised when the entry's task executes, never while building the
    /// task list, so one broken entry does not block the others.
    #[error(
        "No command to run for '{title}'. Add a command to this entry in your menshen configuration."
    )]
    CommandNotFound {
        /// Display title of the misconfigured entry
        title: String,
    },

    /// A command exited non-zero or failed to spawn.
    ///
    /// The message shape is part of the contract with callers: title on the
    /// first line, then the captured stdout and stderr verbatim, each on its
    /// own line, even when empty.
    #[error(
        "🚫 {title} found some errors. Please fix them and try committing again.\n{stdout}\n{stderr}"
    )]
    CommandFailed {
        /// Display title of the failed entry
        title: String,
        /// Captured standard output, verbatim
        stdout: String,
        /// Captured standard error, verbatim
        stderr: String,
    },

    /// Generic error message
    #[error("{0}")]
    Message(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
