//! Package manifest access
//!
//! menshen reads the `package.json` of the repository it guards. Two pieces
//! matter: the `scripts` mapping, which decides whether a configured entry is
//! run through the package runner, and the optional `menshen` key, which may
//! embed the tool settings. Everything else in the file is ignored.

use crate::settings::Settings;
use indexmap::IndexMap;
use menshen_core::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// The manifest file name.
pub const MANIFEST_FILE: &str = "package.json";

/// Parsed view of a repository's `package.json`.
///
/// A missing manifest is not an error: repositories that only run direct
/// binaries need none, so loading falls back to an empty scripts mapping.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageManifest {
    /// Script-name to command-string mapping, in authored order
    #[serde(default)]
    pub scripts: IndexMap<String, String>,

    /// Tool settings embedded under the `menshen` key
    #[serde(default)]
    pub menshen: Option<Settings>,
}

impl PackageManifest {
    /// Load the manifest from `dir/package.json`.
    ///
    /// # Errors
    ///
    /// Returns an error when the file exists but cannot be read or parsed.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(MANIFEST_FILE);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no package manifest, using empty scripts");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let manifest: PackageManifest = serde_json::from_str(&content)
            .map_err(|e| Error::Manifest(format!("invalid {}: {e}", path.display())))?;
        tracing::debug!(
            path = %path.display(),
            scripts = manifest.scripts.len(),
            "loaded package manifest"
        );
        Ok(manifest)
    }

    /// Look up a script by its exact name.
    ///
    /// The whole configured command string is the key; absence means "not a
    /// package script".
    pub fn script(&self, name: &str) -> Option<&str> {
        self.scripts.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_missing_manifest_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = PackageManifest::load(dir.path()).unwrap();
        assert!(manifest.scripts.is_empty());
        assert!(manifest.menshen.is_none());
    }

    #[test]
    fn test_load_scripts_in_order() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(MANIFEST_FILE),
            r#"{
                "name": "demo",
                "scripts": {
                    "lint": "eslint .",
                    "format": "prettier --write .",
                    "test": "vitest run"
                }
            }"#,
        )
        .unwrap();

        let manifest = PackageManifest::load(dir.path()).unwrap();
        assert_eq!(manifest.script("lint"), Some("eslint ."));
        assert_eq!(manifest.script("missing"), None);
        let names: Vec<&String> = manifest.scripts.keys().collect();
        assert_eq!(names, ["lint", "format", "test"]);
    }

    #[test]
    fn test_embedded_settings() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(MANIFEST_FILE),
            r#"{
                "scripts": {"lint": "eslint ."},
                "menshen": {
                    "commands": ["lint", "git add"],
                    "chunkSize": 10
                }
            }"#,
        )
        .unwrap();

        let manifest = PackageManifest::load(dir.path()).unwrap();
        let settings = manifest.menshen.unwrap();
        assert_eq!(settings.commands.len(), 2);
        assert_eq!(settings.chunk_size, Some(10));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(MANIFEST_FILE), "{ not json").unwrap();
        let err = PackageManifest::load(dir.path()).unwrap_err();
        assert!(err.to_string().contains("package.json"));
    }
}
