//! Process spawning boundary.
//!
//! Task execution goes through the [`ProcessExecutor`] trait so the spawn
//! primitive can be swapped out: [`DuctExecutor`] actually runs commands,
//! [`DryRunExecutor`] records what would run without spawning anything.
//! Closures implement the trait too, which keeps failure injection in tests
//! cheap.

use std::path::PathBuf;
use std::sync::Mutex;

/// Spawn options for one invocation.
#[derive(Debug, Clone, Default)]
pub struct ExecOptions {
    /// Working directory override; the invocation inherits the process
    /// working directory when unset
    pub cwd: Option<PathBuf>,
}

/// Captured streams of an invocation that exited zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Captured standard output
    pub stdout: String,
    /// Captured standard error
    pub stderr: String,
}

/// Captured streams of an invocation that exited non-zero or failed to
/// spawn. Both streams are kept verbatim, empty strings included, because
/// error reporting splices them into its message unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessFailure {
    /// Captured standard output
    pub stdout: String,
    /// Captured standard error, or the spawn error text when the process
    /// never started
    pub stderr: String,
}

/// Outcome of one invocation.
pub type ExecResult = std::result::Result<ProcessOutput, ProcessFailure>;

/// Abstract spawn-and-await capability.
///
/// One call runs one process to completion and reports its captured
/// streams. Implementations must be callable from multiple threads because
/// independent tasks may execute concurrently.
pub trait ProcessExecutor: Send + Sync {
    /// Run `binary` with `args`, awaiting completion.
    fn run(&self, binary: &str, args: &[String], options: &ExecOptions) -> ExecResult;
}

/// Implement ProcessExecutor for closures
impl<F> ProcessExecutor for F
where
    F: Fn(&str, &[String], &ExecOptions) -> ExecResult + Send + Sync,
{
    fn run(&self, binary: &str, args: &[String], options: &ExecOptions) -> ExecResult {
        self(binary, args, options)
    }
}

/// Live executor backed by `duct`.
///
/// Arguments are passed through without shell interpretation. Both output
/// streams are captured; a non-zero exit or a spawn error becomes a
/// [`ProcessFailure`] carrying whatever was captured.
#[derive(Debug, Clone, Copy, Default)]
pub struct DuctExecutor;

impl DuctExecutor {
    /// Create a new live executor.
    pub fn new() -> Self {
        Self
    }
}

impl ProcessExecutor for DuctExecutor {
    fn run(&self, binary: &str, args: &[String], options: &ExecOptions) -> ExecResult {
        let mut expression = duct::cmd(binary, args)
            .stdout_capture()
            .stderr_capture()
            .unchecked();

        if let Some(cwd) = &options.cwd {
            expression = expression.dir(cwd);
        }

        tracing::debug!("Executing command: {} {:?}", binary, args);
        if let Some(cwd) = &options.cwd {
            tracing::debug!("Working directory: {}", cwd.display());
        }

        match expression.run() {
            Ok(output) => {
                let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
                let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
                if output.status.success() {
                    Ok(ProcessOutput { stdout, stderr })
                } else {
                    tracing::debug!(
                        "Command '{}' exited with status {:?}",
                        binary,
                        output.status.code()
                    );
                    Err(ProcessFailure { stdout, stderr })
                }
            }
            // the process never started, report the spawn error as stderr
            Err(e) => Err(ProcessFailure {
                stdout: String::new(),
                stderr: e.to_string(),
            }),
        }
    }
}

/// One recorded invocation: the exact binary, argument vector and working
/// directory a task handed to its executor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program to spawn
    pub binary: String,
    /// Argument vector, exactly as assembled
    pub args: Vec<String>,
    /// Working directory override, if any
    pub cwd: Option<PathBuf>,
}

/// Executor that records invocations without spawning them.
///
/// Useful for previewing what a run would do and for asserting on exact
/// argument vectors. Every call reports success with empty output.
#[derive(Debug, Default)]
pub struct DryRunExecutor {
    invocations: Mutex<Vec<Invocation>>,
}

impl DryRunExecutor {
    /// Create a new recording executor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the invocations recorded so far, in call order.
    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.lock().unwrap().clone()
    }
}

impl ProcessExecutor for DryRunExecutor {
    fn run(&self, binary: &str, args: &[String], options: &ExecOptions) -> ExecResult {
        self.invocations.lock().unwrap().push(Invocation {
            binary: binary.to_string(),
            args: args.to_vec(),
            cwd: options.cwd.clone(),
        });
        Ok(ProcessOutput::default())
    }
}
