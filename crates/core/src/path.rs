//! File path decomposition
//!
//! This module splits POSIX-style path strings into the four components the
//! argument templating engine substitutes:
//!
//! - `full`: the input path, unchanged
//! - `dir`: everything before the final segment (`"."` when there is no separator)
//! - `base`: the final segment with its extension removed
//! - `ext`: the extension without the leading dot (empty when there is none)
//!
//! Decomposition is purely structural: there are no error conditions, and
//! malformed paths are echoed back component by component. Only `/` is
//! treated as a separator.
//!
//! # Examples
//!
//! ```
//! use menshen_core::path::PathParts;
//!
//! let parts = PathParts::decompose("src/lib.rs");
//! assert_eq!(parts.full, "src/lib.rs");
//! assert_eq!(parts.dir, "src");
//! assert_eq!(parts.base, "lib");
//! assert_eq!(parts.ext, "rs");
//! ```

/// Components of a decomposed file path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathParts {
    /// The input path, unchanged
    pub full: String,
    /// Everything before the final path segment, `"."` when absent
    pub dir: String,
    /// The final path segment without its extension
    pub base: String,
    /// The extension without the leading dot, empty when absent
    pub ext: String,
}

impl PathParts {
    /// Decompose a path string into its components
    ///
    /// # Examples
    ///
    /// ```
    /// use menshen_core::path::PathParts;
    ///
    /// let parts = PathParts::decompose("test.js");
    /// assert_eq!(parts.dir, ".");
    /// assert_eq!(parts.base, "test");
    /// assert_eq!(parts.ext, "js");
    /// ```
    pub fn decompose(path: &str) -> Self {
        let (dir, file) = match path.rfind('/') {
            Some(idx) => {
                let dir = &path[..idx];
                // a leading-slash-only prefix keeps the root separator
                (if dir.is_empty() { "/" } else { dir }, &path[idx + 1..])
            }
            None => (".", path),
        };
        let (base, ext) = match file.rfind('.') {
            Some(idx) => (&file[..idx], &file[idx + 1..]),
            None => (file, ""),
        };
        PathParts {
            full: path.to_string(),
            dir: dir.to_string(),
            base: base.to_string(),
            ext: ext.to_string(),
        }
    }
}

impl std::fmt::Display for PathParts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.full)
    }
}
