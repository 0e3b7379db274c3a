//! Logging configuration for the menshen CLI
//!
//! Terminal output plus optional file logging using tracing.

use crate::Result;
use std::path::Path;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logging system
///
/// # Arguments
/// * `verbose` - Enable debug level logging with timestamps
/// * `log_file` - Optional path to append logs to a file
///
/// # Examples
/// ```ignore
/// // Basic usage with info level
/// init(false, None)?;
///
/// // Verbose mode with debug level
/// init(true, None)?;
///
/// // Write logs to file
/// init(true, Some(Path::new("debug.log")))?;
/// ```
pub fn init(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let level = if verbose { "debug" } else { "info" };

    // RUST_LOG overrides the per-crate defaults
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| {
            EnvFilter::try_new(format!(
                "menshen={level},menshen_core={level},menshen_config={level},menshen_template={level},menshen_engine={level}"
            ))
        })
        .expect("failed to create default env filter");

    let stdout_layer = if verbose {
        fmt::layer()
            .with_target(false)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_file(false)
            .with_line_number(false)
            .compact()
            .with_ansi(true)
            .with_filter(env_filter)
            .boxed()
    } else {
        // No timestamps in normal mode
        fmt::layer()
            .with_target(false)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_file(false)
            .with_line_number(false)
            .without_time()
            .compact()
            .with_ansi(true)
            .with_filter(env_filter)
            .boxed()
    };

    match log_file {
        Some(log_path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_path)?;

            let file_layer = fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .pretty()
                .with_filter(EnvFilter::try_new("debug").expect("'debug' is a valid filter"));

            tracing_subscriber::registry()
                .with(stdout_layer)
                .with(file_layer)
                .init();
        }
        None => {
            tracing_subscriber::registry().with(stdout_layer).init();
        }
    }

    Ok(())
}
