//! Task construction and deferred execution.
//!
//! Building flattens a command list into one [`Task`] per entry, in entry
//! order, and never fails: a misconfigured entry still yields a task that
//! reports the problem when executed, so it cannot block its neighbours.
//! Everything decision-shaped happens at build time. Each task carries its
//! invocations fully baked (binary, argument vector, working directory,
//! one invocation per file chunk) and defers only the spawning.

use crate::chunk::chunk;
use crate::exec::{ExecOptions, Invocation, ProcessExecutor};
use crate::resolve::{ResolvedCommand, RunOptions};
use menshen_config::{CommandList, CommandSpec, PackageManifest};
use menshen_core::{Error, Result};

/// What a task does when executed.
#[derive(Debug, Clone)]
enum Plan {
    /// Run the baked invocations in order
    Ready(Vec<Invocation>),
    /// Report the entry as misconfigured
    Misconfigured,
}

/// One executable unit of work for one configured entry.
///
/// Tasks are inert values: holding one has no side effects, running one
/// twice runs its commands twice. They share no mutable state, so the
/// caller may execute different tasks concurrently; the chunks within a
/// single task always run in sequence.
#[derive(Debug, Clone)]
pub struct Task {
    title: String,
    plan: Plan,
}

impl Task {
    /// Display title for reporting.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The baked invocations, in execution order. Empty for misconfigured
    /// entries and for bounded chunking over an empty file list.
    pub fn invocations(&self) -> &[Invocation] {
        match &self.plan {
            Plan::Ready(invocations) => invocations,
            Plan::Misconfigured => &[],
        }
    }

    /// Whether this entry had no usable command at build time.
    pub fn is_misconfigured(&self) -> bool {
        matches!(self.plan, Plan::Misconfigured)
    }

    /// Execute the task: run each invocation in order, stopping at the
    /// first failure.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CommandNotFound`] for a misconfigured entry and
    /// [`Error::CommandFailed`] when an invocation exits non-zero or fails
    /// to spawn, carrying the captured streams verbatim. Invocations after
    /// a failed one do not run; completed ones are not rolled back.
    pub fn run(&self, executor: &dyn ProcessExecutor) -> Result<()> {
        let invocations = match &self.plan {
            Plan::Misconfigured => {
                return Err(Error::CommandNotFound {
                    title: self.title.clone(),
                });
            }
            Plan::Ready(invocations) => invocations,
        };

        tracing::debug!(
            "Running '{}' ({} invocation(s))",
            self.title,
            invocations.len()
        );

        for invocation in invocations {
            let options = ExecOptions {
                cwd: invocation.cwd.clone(),
            };
            if let Err(failure) = executor.run(&invocation.binary, &invocation.args, &options) {
                tracing::debug!("'{}' failed, skipping remaining chunks", self.title);
                return Err(Error::CommandFailed {
                    title: self.title.clone(),
                    stdout: failure.stdout,
                    stderr: failure.stderr,
                });
            }
        }

        Ok(())
    }
}

/// Build one task per configured entry.
///
/// The returned list mirrors the entry list exactly in count and order.
/// Building never fails; entries that cannot be resolved become tasks that
/// fail when run.
pub fn build_tasks(
    commands: &CommandList,
    files: &[String],
    manifest: &PackageManifest,
    options: &RunOptions,
) -> Vec<Task> {
    let specs = commands.to_vec();
    tracing::debug!(
        "Building {} task(s) over {} file(s)",
        specs.len(),
        files.len()
    );
    specs
        .iter()
        .map(|spec| build_task(spec, files, manifest, options))
        .collect()
}

fn build_task(
    spec: &CommandSpec,
    files: &[String],
    manifest: &PackageManifest,
    options: &RunOptions,
) -> Task {
    match ResolvedCommand::resolve(spec, manifest, options) {
        Ok(resolved) => {
            let invocations = chunk(files, options.chunk_size)
                .into_iter()
                .map(|group| Invocation {
                    binary: resolved.binary().to_string(),
                    args: resolved.build_argv(group),
                    cwd: resolved.working_dir().map(std::path::Path::to_path_buf),
                })
                .collect();
            Task {
                title: resolved.title().to_string(),
                plan: Plan::Ready(invocations),
            }
        }
        Err(_) => Task {
            title: spec.title().to_string(),
            plan: Plan::Misconfigured,
        },
    }
}
