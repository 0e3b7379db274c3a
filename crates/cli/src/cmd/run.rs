//! Execute the configured commands against the staged file set.

use anyhow::{Result, bail};
use menshen_config::{PackageManifest, Settings};
use menshen_engine::{DuctExecutor, RunOptions, build_tasks};
use owo_colors::OwoColorize;
use std::path::Path;

/// Build one task per configured command and run them all.
///
/// Tasks run sequentially by default, or across the rayon thread pool with
/// `concurrent`. Every task runs even when an earlier one fails; failures
/// are reported together at the end.
///
/// # Errors
///
/// Returns an error when the command list is empty, when the file set
/// cannot be read from the repository, or when any task fails.
pub fn execute(
    repo_root: &Path,
    manifest: &PackageManifest,
    settings: &Settings,
    verbose: bool,
    concurrent: bool,
    all: bool,
    chunk_size: Option<usize>,
) -> Result<()> {
    settings.validate()?;

    let (files, source) = if all {
        (menshen_engine::git::tracked_files(repo_root)?, "tracked")
    } else {
        (menshen_engine::git::staged_files(repo_root)?, "staged")
    };

    if files.is_empty() {
        println!("{}", format!("No {source} files found.").yellow());
        return Ok(());
    }

    let options = RunOptions {
        verbose,
        git_dir: Some(repo_root.to_path_buf()),
        chunk_size: chunk_size.or(settings.chunk_size),
    };
    let tasks = build_tasks(&settings.commands, &files, manifest, &options);

    println!(
        "Running {} command(s) against {} {source} file(s)",
        tasks.len(),
        files.len()
    );

    let executor = DuctExecutor::new();
    let results: Vec<menshen_core::Result<()>> = if concurrent {
        use rayon::prelude::*;

        tasks.par_iter().map(|task| task.run(&executor)).collect()
    } else {
        tasks.iter().map(|task| task.run(&executor)).collect()
    };

    let mut failed = 0usize;
    for (task, result) in tasks.iter().zip(&results) {
        match result {
            Ok(()) => println!("  {} {}", "✓".green().bold(), task.title()),
            Err(_) => {
                println!("  {} {}", "✗".red().bold(), task.title());
                failed += 1;
            }
        }
    }

    if failed > 0 {
        for result in results {
            if let Err(error) = result {
                eprintln!("\n{error}");
            }
        }
        bail!("{failed} of {} command(s) failed", tasks.len());
    }

    println!("\n{}", "All commands passed!".green().bold());
    Ok(())
}
