//! # Menshen Engine
//!
//! Core library turning configured commands plus a staged-file list into
//! executable tasks:
//!
//! - **Resolution**: package script vs direct binary, argument assembly,
//!   the working-directory rule for the version-control binary
//! - **Chunking**: bounded file groups, one invocation per group
//! - **Tasks**: build-now/execute-later units, one per configured entry,
//!   failures deferred to execution time
//! - **Execution**: process spawning behind a swappable trait
//! - **Git**: repository discovery and staged-file listing

pub mod chunk;
pub mod exec;
pub mod git;
pub mod resolve;
pub mod task;

// Re-export error types from core
pub use menshen_core::{Error, Result};

// Re-export commonly used types
pub use exec::{
    DryRunExecutor, DuctExecutor, ExecOptions, ExecResult, Invocation, ProcessExecutor,
    ProcessFailure, ProcessOutput,
};
pub use resolve::{ResolvedCommand, RunOptions};
pub use task::{Task, build_tasks};
