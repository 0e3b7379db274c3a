//! Tool settings: the command list and runner knobs.
//!
//! Settings live either in a `menshen.toml` at the repository root or under
//! the `"menshen"` key of `package.json`. The TOML file wins when both exist.
//!
//! ```toml
//! # menshen.toml
//! commands = [
//!   "lint",
//!   "prettier --write",
//!   { name = "Tests", command = "npm test", trap = true },
//! ]
//! chunk_size = 50
//! ```

use crate::commands::CommandList;
use crate::manifest::PackageManifest;
use menshen_core::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// The standalone settings file name.
pub const SETTINGS_FILE: &str = "menshen.toml";

/// menshen settings as configured by the user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// One command or an ordered list of commands to run over the file list
    pub commands: CommandList,

    /// Maximum number of files per invocation; unbounded when absent.
    ///
    /// Written `chunkSize` in `package.json` and `chunk_size` in
    /// `menshen.toml`; both spellings are accepted everywhere.
    #[serde(default, rename = "chunkSize", alias = "chunk_size")]
    pub chunk_size: Option<usize>,
}

impl Settings {
    /// Locate and load settings for a repository.
    ///
    /// Looks for `menshen.toml` in `dir` first, then falls back to the
    /// manifest's embedded `menshen` section.
    ///
    /// # Errors
    ///
    /// Returns an error when neither source exists, or when `menshen.toml`
    /// cannot be read or parsed.
    pub fn discover(dir: &Path, manifest: &PackageManifest) -> Result<Self> {
        let path = dir.join(SETTINGS_FILE);
        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let settings: Settings = toml::from_str(&content)
                .map_err(|e| Error::Config(format!("invalid {}: {e}", path.display())))?;
            tracing::debug!(path = %path.display(), "loaded settings file");
            return Ok(settings);
        }

        if let Some(settings) = &manifest.menshen {
            tracing::debug!("using settings embedded in package.json");
            return Ok(settings.clone());
        }

        Err(Error::Config(format!(
            "no configuration found: add a {SETTINGS_FILE} or a \"menshen\" key to package.json"
        )))
    }

    /// Validate the loaded settings.
    ///
    /// # Errors
    ///
    /// Returns an error when the command list is empty.
    pub fn validate(&self) -> Result<()> {
        if self.commands.is_empty() {
            return Err(Error::Config(
                "the commands list is empty; configure at least one command".to_string(),
            ));
        }
        Ok(())
    }
}
