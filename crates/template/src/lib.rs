//! # Menshen Template
//!
//! The `<...>` argument templating engine for menshen.
//!
//! Command strings may weave the current file list into their arguments with
//! bracketed template regions, repeated once per file and substituting the
//! file's path components. This crate owns the grammar: a nesting-aware
//! parser producing a small segment tree, and an expander that evaluates the
//! tree against a file list into an exact argument vector.
//!
//! Expansion never fails; strings that only look like templates degrade to
//! literal arguments with the file list appended.

pub mod expand;
pub mod parser;

pub use parser::{Part, Placeholder, Segment, Template};
