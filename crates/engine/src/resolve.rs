//! Command resolution.
//!
//! A configured entry resolves to an invocation recipe: which binary to
//! spawn, how the argument vector is assembled from a file list, and
//! whether a working-directory override applies. The whole raw command
//! string is offered to the package manifest first; only on a miss is it
//! split into a binary and an argument template.
//!
//! Resolution is pure. It fails only for entries with no usable command
//! at all, and even then the caller defers that failure to execution time
//! so one broken entry cannot block the rest.

use menshen_config::{CommandSpec, PackageManifest};
use menshen_core::{Error, Result};
use menshen_template::Template;
use std::path::{Path, PathBuf};

/// Runner for package-manifest scripts.
const PACKAGE_RUNNER: &str = "npm";

/// Caller-supplied knobs for resolution and task building.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Keep package-script runs chatty; the default passes `--silent`
    pub verbose: bool,
    /// Repository root, forwarded as the working directory to invocations
    /// of the version-control binary and to nothing else
    pub git_dir: Option<PathBuf>,
    /// Upper bound on files per invocation; `None` or `0` means unbounded
    pub chunk_size: Option<usize>,
}

/// How a resolved command assembles its argument vector.
#[derive(Debug, Clone)]
enum ArgvPlan {
    /// Package-script run: fixed runner prefix, file list appended verbatim
    /// unless trapped
    Prefixed {
        prefix: Vec<String>,
        append_files: bool,
    },
    /// Direct binary: the remainder of the command line is a template,
    /// expanded against each file chunk
    Templated(Template),
    /// Direct binary with trap: tokens are fixed, no file injection at all
    Fixed(Vec<String>),
}

/// A command specification resolved to an invocation recipe.
///
/// Everything decision-shaped is baked in here: the binary, the argument
/// plan, the working directory. Only the file list remains a parameter,
/// supplied chunk by chunk through [`ResolvedCommand::build_argv`].
#[derive(Debug, Clone)]
pub struct ResolvedCommand {
    title: String,
    binary: String,
    plan: ArgvPlan,
    working_dir: Option<PathBuf>,
}

impl ResolvedCommand {
    /// Resolve one entry against the package manifest.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CommandNotFound`] when the entry has no usable
    /// command string. Callers building task lists catch this and defer it
    /// to execution time.
    pub fn resolve(
        spec: &CommandSpec,
        manifest: &PackageManifest,
        options: &RunOptions,
    ) -> Result<Self> {
        let title = spec.title().to_string();
        let Some(raw) = spec.command_line() else {
            return Err(Error::CommandNotFound { title });
        };

        // the whole command string is a script name when the manifest says so
        if manifest.script(raw).is_some() {
            tracing::debug!("Resolved '{raw}' to package script");
            let mut prefix = vec!["run".to_string()];
            if !options.verbose {
                prefix.push("--silent".to_string());
            }
            prefix.push(raw.to_string());
            prefix.push("--".to_string());

            return Ok(ResolvedCommand {
                title,
                binary: PACKAGE_RUNNER.to_string(),
                plan: ArgvPlan::Prefixed {
                    prefix,
                    append_files: !spec.trap(),
                },
                working_dir: None,
            });
        }

        let trimmed = raw.trim_start();
        let (binary, remainder) = match trimmed.find(char::is_whitespace) {
            Some(split_at) => trimmed.split_at(split_at),
            None => (trimmed, ""),
        };
        if binary.is_empty() {
            return Err(Error::CommandNotFound { title });
        }

        let plan = if spec.trap() {
            ArgvPlan::Fixed(remainder.split_whitespace().map(str::to_string).collect())
        } else {
            ArgvPlan::Templated(Template::parse(remainder))
        };

        let working_dir = if is_version_control_binary(binary) {
            options.git_dir.clone()
        } else {
            None
        };

        tracing::debug!("Resolved '{raw}' to binary '{binary}'");

        Ok(ResolvedCommand {
            title,
            binary: binary.to_string(),
            plan,
            working_dir,
        })
    }

    /// Display title for reporting.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The program this command spawns.
    pub fn binary(&self) -> &str {
        &self.binary
    }

    /// Working-directory override, set only for the version-control binary.
    pub fn working_dir(&self) -> Option<&Path> {
        self.working_dir.as_deref()
    }

    /// Whether this entry runs through the package-script runner.
    pub fn is_package_script(&self) -> bool {
        matches!(self.plan, ArgvPlan::Prefixed { .. })
    }

    /// Assemble the argument vector for one chunk of files.
    pub fn build_argv(&self, files: &[String]) -> Vec<String> {
        match &self.plan {
            ArgvPlan::Prefixed {
                prefix,
                append_files,
            } => {
                let mut argv = prefix.clone();
                if *append_files {
                    argv.extend(files.iter().cloned());
                }
                argv
            }
            ArgvPlan::Templated(template) => template.expand(files),
            ArgvPlan::Fixed(args) => args.clone(),
        }
    }
}

/// Whether a binary token names the version-control tool.
///
/// The basename is compared after stripping an optional `.exe` suffix, so
/// `git`, `/usr/bin/git` and `git.exe` all match while `digit` does not.
fn is_version_control_binary(binary: &str) -> bool {
    let name = binary.rsplit('/').next().unwrap_or(binary);
    let stem = if name.len() >= 4
        && name.is_char_boundary(name.len() - 4)
        && name[name.len() - 4..].eq_ignore_ascii_case(".exe")
    {
        &name[..name.len() - 4]
    } else {
        name
    };
    stem == "git"
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]

    use super::*;
    use menshen_config::StructuredCommand;

    fn manifest_with(scripts: &[(&str, &str)]) -> PackageManifest {
        let entries: Vec<String> = scripts
            .iter()
            .map(|(name, command)| format!("{name:?}: {command:?}"))
            .collect();
        let json = format!("{{\"scripts\": {{{}}}}}", entries.join(", "));
        serde_json::from_str(&json).unwrap()
    }

    fn files(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_string()).collect()
    }

    fn command(raw: &str) -> CommandSpec {
        serde_json::from_str(&format!("{raw:?}")).unwrap()
    }

    #[test]
    fn test_manifest_hit_resolves_to_package_runner() {
        let manifest = manifest_with(&[("lint", "eslint .")]);
        let resolved =
            ResolvedCommand::resolve(&command("lint"), &manifest, &RunOptions::default()).unwrap();

        assert_eq!(resolved.binary(), "npm");
        assert!(resolved.is_package_script());
        assert_eq!(
            resolved.build_argv(&files(&["a.js", "b.js"])),
            ["run", "--silent", "lint", "--", "a.js", "b.js"]
        );
    }

    #[test]
    fn test_verbose_drops_the_silent_flag() {
        let manifest = manifest_with(&[("lint", "eslint .")]);
        let options = RunOptions {
            verbose: true,
            ..RunOptions::default()
        };
        let resolved = ResolvedCommand::resolve(&command("lint"), &manifest, &options).unwrap();

        assert_eq!(
            resolved.build_argv(&files(&["a.js"])),
            ["run", "lint", "--", "a.js"]
        );
    }

    #[test]
    fn test_whole_command_string_is_the_script_key() {
        let manifest = manifest_with(&[("git add", "echo nope")]);
        let resolved =
            ResolvedCommand::resolve(&command("git add"), &manifest, &RunOptions::default())
                .unwrap();

        assert_eq!(resolved.binary(), "npm");
        assert_eq!(
            resolved.build_argv(&files(&["test.js"])),
            ["run", "--silent", "git add", "--", "test.js"]
        );
    }

    #[test]
    fn test_trapped_script_keeps_prefix_only() {
        let manifest = manifest_with(&[("test", "jest")]);
        let spec = CommandSpec::Structured(StructuredCommand {
            name: None,
            command: Some("test".to_string()),
            trap: true,
        });
        let resolved =
            ResolvedCommand::resolve(&spec, &manifest, &RunOptions::default()).unwrap();

        assert_eq!(
            resolved.build_argv(&files(&["a.js", "b.js"])),
            ["run", "--silent", "test", "--"]
        );
    }

    #[test]
    fn test_manifest_miss_splits_binary_and_appends_files() {
        let manifest = PackageManifest::default();
        let resolved =
            ResolvedCommand::resolve(&command("git add"), &manifest, &RunOptions::default())
                .unwrap();

        assert_eq!(resolved.binary(), "git");
        assert!(!resolved.is_package_script());
        assert_eq!(resolved.build_argv(&files(&["test.js"])), ["add", "test.js"]);
    }

    #[test]
    fn test_bare_name_miss_runs_the_binary_directly() {
        let manifest = PackageManifest::default();
        let resolved =
            ResolvedCommand::resolve(&command("eslint"), &manifest, &RunOptions::default())
                .unwrap();

        assert_eq!(resolved.binary(), "eslint");
        assert_eq!(resolved.build_argv(&files(&["a.js"])), ["a.js"]);
    }

    #[test]
    fn test_template_expands_per_chunk() {
        let manifest = PackageManifest::default();
        let resolved = ResolvedCommand::resolve(
            &command("tar <--out=<filename>.tar.gz>"),
            &manifest,
            &RunOptions::default(),
        )
        .unwrap();

        assert_eq!(resolved.binary(), "tar");
        assert_eq!(
            resolved.build_argv(&files(&["file1.js"])),
            ["--out=file1.tar.gz", ""]
        );
    }

    #[test]
    fn test_trapped_binary_keeps_tokens_without_expansion() {
        let manifest = PackageManifest::default();
        let spec = CommandSpec::Structured(StructuredCommand {
            name: Some("Aggregate".to_string()),
            command: Some("eslint --max-warnings 0 <full>".to_string()),
            trap: true,
        });
        let resolved =
            ResolvedCommand::resolve(&spec, &manifest, &RunOptions::default()).unwrap();

        assert_eq!(
            resolved.build_argv(&files(&["a.js", "b.js"])),
            ["--max-warnings", "0", "<full>"]
        );
    }

    #[test]
    fn test_structured_entry_without_command_fails_resolution() {
        let manifest = PackageManifest::default();
        let spec = CommandSpec::Structured(StructuredCommand {
            name: Some("broken".to_string()),
            command: None,
            trap: false,
        });

        let err = ResolvedCommand::resolve(&spec, &manifest, &RunOptions::default()).unwrap_err();
        assert!(matches!(err, Error::CommandNotFound { title } if title == "broken"));
    }

    #[test]
    fn test_blank_command_string_fails_resolution() {
        let manifest = PackageManifest::default();
        let err =
            ResolvedCommand::resolve(&command("   "), &manifest, &RunOptions::default())
                .unwrap_err();
        assert!(matches!(err, Error::CommandNotFound { .. }));
    }

    #[test]
    fn test_git_dir_applies_only_to_the_version_control_binary() {
        let manifest = manifest_with(&[("lint", "eslint .")]);
        let options = RunOptions {
            git_dir: Some(PathBuf::from("/repo")),
            ..RunOptions::default()
        };

        let git =
            ResolvedCommand::resolve(&command("git add"), &manifest, &options).unwrap();
        assert_eq!(git.working_dir(), Some(Path::new("/repo")));

        let pathed =
            ResolvedCommand::resolve(&command("/usr/bin/git add"), &manifest, &options).unwrap();
        assert_eq!(pathed.working_dir(), Some(Path::new("/repo")));

        let other =
            ResolvedCommand::resolve(&command("eslint --fix"), &manifest, &options).unwrap();
        assert_eq!(other.working_dir(), None);

        let script = ResolvedCommand::resolve(&command("lint"), &manifest, &options).unwrap();
        assert_eq!(script.working_dir(), None);
    }

    #[test]
    fn test_version_control_classification() {
        assert!(is_version_control_binary("git"));
        assert!(is_version_control_binary("/usr/bin/git"));
        assert!(is_version_control_binary("git.exe"));
        assert!(is_version_control_binary("git.EXE"));
        assert!(!is_version_control_binary("digit"));
        assert!(!is_version_control_binary("Git"));
        assert!(!is_version_control_binary("gitk"));
        assert!(!is_version_control_binary(""));
    }
}
