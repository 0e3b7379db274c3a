//! Git repository queries.
//!
//! Menshen runs against the files staged in the index, so this module
//! answers two questions through git2 (libgit2): where is the repository,
//! and which paths are staged. Paths come back repository-relative, in the
//! stable path order libgit2 reports.

use menshen_core::{Error, Result};
use std::path::Path;

/// Helper function to convert git2 errors to `menshen_core` errors
#[inline]
#[allow(clippy::needless_pass_by_value)]
fn git_err(e: git2::Error) -> Error {
    Error::Git(e.to_string())
}

/// Find the git working tree root starting from the given path.
///
/// Searches upward from `start_path` for a repository and returns its
/// working tree root, or `None` when the path is not inside one (or the
/// repository is bare).
#[must_use]
pub fn find_working_tree(start_path: &Path) -> Option<std::path::PathBuf> {
    use git2::Repository;

    if let Ok(repo) = Repository::discover(start_path) {
        if let Some(workdir) = repo.workdir() {
            return Some(workdir.to_path_buf());
        }
    }

    None
}

/// List the paths staged in the index, relative to the repository root.
///
/// Covers added, modified, renamed and type-changed index entries. Staged
/// deletions are left out since the file no longer exists to run tools on.
///
/// # Errors
///
/// Returns an error when `repo_root` cannot be opened as a repository or
/// its status cannot be read.
pub fn staged_files(repo_root: &Path) -> Result<Vec<String>> {
    use git2::{Repository, StatusOptions};

    let repo = Repository::open(repo_root).map_err(git_err)?;

    let mut options = StatusOptions::new();
    options.include_untracked(false);
    let statuses = repo.statuses(Some(&mut options)).map_err(git_err)?;

    let mut files = Vec::new();
    for entry in statuses.iter() {
        let status = entry.status();
        if status.is_index_new()
            || status.is_index_modified()
            || status.is_index_renamed()
            || status.is_index_typechange()
        {
            if let Some(path) = entry.path() {
                files.push(path.to_string());
            }
        }
    }

    tracing::debug!("Found {} staged file(s)", files.len());
    Ok(files)
}

/// List every path in the index, relative to the repository root.
///
/// This is the file set for whole-tree runs, where staged-only filtering
/// is explicitly bypassed.
///
/// # Errors
///
/// Returns an error when `repo_root` cannot be opened as a repository or
/// its index cannot be read.
pub fn tracked_files(repo_root: &Path) -> Result<Vec<String>> {
    use git2::Repository;

    let repo = Repository::open(repo_root).map_err(git_err)?;
    let index = repo.index().map_err(git_err)?;

    let files = index
        .iter()
        .map(|entry| String::from_utf8_lossy(&entry.path).into_owned())
        .collect();
    Ok(files)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]

    use super::*;
    use std::fs;

    fn init_repo(dir: &Path) -> git2::Repository {
        git2::Repository::init(dir).unwrap()
    }

    fn stage(repo: &git2::Repository, name: &str) {
        let mut index = repo.index().unwrap();
        index.add_path(Path::new(name)).unwrap();
        index.write().unwrap();
    }

    #[test]
    fn test_staged_files_lists_added_paths() {
        let dir = tempfile::tempdir().unwrap();
        let repo = init_repo(dir.path());

        fs::write(dir.path().join("a.js"), "let a = 1;\n").unwrap();
        fs::write(dir.path().join("b.js"), "let b = 2;\n").unwrap();
        stage(&repo, "a.js");
        stage(&repo, "b.js");

        let staged = staged_files(dir.path()).unwrap();
        assert_eq!(staged, vec!["a.js".to_string(), "b.js".to_string()]);
    }

    #[test]
    fn test_unstaged_files_are_not_listed() {
        let dir = tempfile::tempdir().unwrap();
        let repo = init_repo(dir.path());

        fs::write(dir.path().join("staged.js"), "x\n").unwrap();
        fs::write(dir.path().join("loose.js"), "y\n").unwrap();
        stage(&repo, "staged.js");

        let staged = staged_files(dir.path()).unwrap();
        assert_eq!(staged, vec!["staged.js".to_string()]);
    }

    #[test]
    fn test_tracked_files_follow_the_index() {
        let dir = tempfile::tempdir().unwrap();
        let repo = init_repo(dir.path());

        fs::write(dir.path().join("a.js"), "x\n").unwrap();
        stage(&repo, "a.js");

        let tracked = tracked_files(dir.path()).unwrap();
        assert_eq!(tracked, vec!["a.js".to_string()]);
    }

    #[test]
    fn test_find_working_tree_from_a_subdirectory() {
        let dir = tempfile::tempdir().unwrap();
        init_repo(dir.path());

        let nested = dir.path().join("src").join("deep");
        fs::create_dir_all(&nested).unwrap();

        let found = find_working_tree(&nested).unwrap();
        assert_eq!(
            found.canonicalize().unwrap(),
            dir.path().canonicalize().unwrap()
        );
    }

    #[test]
    fn test_find_working_tree_outside_a_repository() {
        let dir = tempfile::tempdir().unwrap();
        assert!(find_working_tree(dir.path()).is_none());
    }

    #[test]
    fn test_staged_files_on_a_plain_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = staged_files(dir.path()).unwrap_err();
        assert!(matches!(err, Error::Git(_)));
    }
}
