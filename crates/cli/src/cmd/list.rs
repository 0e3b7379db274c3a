//! Show the configured commands and how each one resolves.

use anyhow::Result;
use menshen_config::{PackageManifest, Settings};
use menshen_engine::{ResolvedCommand, RunOptions};
use owo_colors::OwoColorize;
use std::path::Path;

/// Print every configured command with its resolved shape and whether its
/// binary is available on `PATH`. Nothing is executed.
///
/// # Errors
///
/// Returns an error only when JSON serialization fails.
pub fn execute(
    repo_root: &Path,
    manifest: &PackageManifest,
    settings: &Settings,
    verbose: bool,
    format: &str,
) -> Result<()> {
    let specs = settings.commands.to_vec();

    if specs.is_empty() {
        println!("{}", "No commands configured.".yellow());
        println!("Add entries to `commands` in menshen.toml to get started.");
        return Ok(());
    }

    let options = RunOptions {
        verbose,
        git_dir: Some(repo_root.to_path_buf()),
        chunk_size: settings.chunk_size,
    };

    match format {
        "json" => {
            let commands: Vec<serde_json::Value> = specs
                .iter()
                .map(
                    |spec| match ResolvedCommand::resolve(spec, manifest, &options) {
                        Ok(resolved) => serde_json::json!({
                            "title": resolved.title(),
                            "kind": if resolved.is_package_script() { "package-script" } else { "binary" },
                            "binary": resolved.binary(),
                            "trap": spec.trap(),
                            "available": which::which(resolved.binary()).is_ok(),
                            "working_dir": resolved.working_dir(),
                        }),
                        Err(e) => serde_json::json!({
                            "title": spec.title(),
                            "error": e.to_string(),
                        }),
                    },
                )
                .collect();

            let json = serde_json::json!({
                "repository": repo_root,
                "chunk_size": settings.chunk_size,
                "commands": commands,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        _ => {
            println!("Repository: {}", repo_root.display().cyan());
            if let Some(size) = settings.chunk_size {
                println!("Chunk size: {size}");
            }
            println!();
            println!("{} ({} configured)", "Commands:".bold(), specs.len());

            for spec in &specs {
                match ResolvedCommand::resolve(spec, manifest, &options) {
                    Ok(resolved) => {
                        let mut shape = if resolved.is_package_script() {
                            format!("package script via {}", resolved.binary())
                        } else {
                            resolved.binary().to_string()
                        };
                        if spec.trap() {
                            shape.push_str(", no file arguments");
                        }
                        if resolved.working_dir().is_some() {
                            shape.push_str(", runs at the repository root");
                        }

                        if which::which(resolved.binary()).is_ok() {
                            println!("  • {} ({shape})", resolved.title().green());
                        } else {
                            println!(
                                "  • {} ({shape}) {}",
                                resolved.title().yellow(),
                                "[binary not found]".dimmed()
                            );
                        }
                    }
                    Err(e) => {
                        println!("  • {} {}", spec.title().red(), format!("[{e}]").dimmed());
                    }
                }
            }
        }
    }

    Ok(())
}
