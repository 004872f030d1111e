//! Repository root discovery.
//!
//! [`locate_repo_root`] walks from a start path up through its ancestors until it
//! finds a `.git` entry, and [`strip_metadata_suffix`] turns that `.git` path back
//! into the working root. Both operate lexically on normalized paths and only ever
//! ask the filesystem whether an entry exists.
//!
//! # Public API
//! - [`RepoPath`]: A discovered (or caller supplied) repository path
//! - [`locate_repo_root`] / [`locate_repo_root_named`]: Upward search
//! - [`strip_metadata_suffix`] / [`strip_metadata_suffix_named`]: `.git` path to working root

use crate::core::error::{GitSiftError, Result};
use normalize_path::NormalizePath;
use std::env;
use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};

/// Name of the metadata directory that marks a repository root
pub const GIT_DIR_NAME: &str = ".git";

/// Path to a repository, normally the `.git` entry produced by discovery.
///
/// A path that does not end with the metadata directory (such as `/wat`) is
/// accepted as-is and treated as its own working root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoPath {
    path: PathBuf,
    working_root: PathBuf,
}

impl RepoPath {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_metadata_dir(path, GIT_DIR_NAME)
    }

    pub fn with_metadata_dir(path: impl Into<PathBuf>, metadata_dir: &str) -> Self {
        let path = path.into().normalize();
        let working_root =
            strip_metadata_suffix_named(&path, metadata_dir).unwrap_or_else(|_| path.clone());

        RepoPath { path, working_root }
    }

    pub fn as_path(&self) -> &Path {
        &self.path
    }

    /// Directory that status entries are relative to
    pub fn working_root(&self) -> &Path {
        &self.working_root
    }
}

impl AsRef<Path> for RepoPath {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for RepoPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// Search upward from `start_path` (default: the current directory) for `.git`.
///
/// Returns the `.git` path of the nearest ancestor, inclusive of the start path
/// itself. Fails with [`GitSiftError::RepoNotFound`] once the search reaches the
/// filesystem root; the root itself is never probed.
pub fn locate_repo_root(start_path: Option<&Path>) -> Result<RepoPath> {
    locate_repo_root_named(start_path, GIT_DIR_NAME)
}

/// [`locate_repo_root`] with a custom metadata directory name
pub fn locate_repo_root_named(start_path: Option<&Path>, metadata_dir: &str) -> Result<RepoPath> {
    let start = resolve_start_path(start_path)?;
    log::debug!("Searching for {metadata_dir} from {}", start.display());

    for candidate in start.ancestors() {
        if candidate.parent().is_none() {
            break;
        }

        let metadata_path = candidate.join(metadata_dir);
        if metadata_path.exists() {
            log::debug!("Found repository at {}", metadata_path.display());
            return Ok(RepoPath::with_metadata_dir(metadata_path, metadata_dir));
        }
    }

    log::debug!("Reached filesystem root without finding {metadata_dir}");
    Err(GitSiftError::repo_not_found(start))
}

/// Strip the trailing `.git` component, returning the working root.
///
/// ```
/// use git_sift::strip_metadata_suffix;
/// use std::path::{Path, PathBuf};
///
/// let root = strip_metadata_suffix(Path::new("/a/b/.git"))?;
/// assert_eq!(root, PathBuf::from("/a/b"));
/// assert!(strip_metadata_suffix(Path::new("/a/b")).is_err());
/// # Ok::<(), git_sift::GitSiftError>(())
/// ```
pub fn strip_metadata_suffix(path: &Path) -> Result<PathBuf> {
    strip_metadata_suffix_named(path, GIT_DIR_NAME)
}

/// [`strip_metadata_suffix`] with a custom metadata directory name
pub fn strip_metadata_suffix_named(path: &Path, metadata_dir: &str) -> Result<PathBuf> {
    let normalized = path.normalize();

    if normalized.file_name() != Some(OsStr::new(metadata_dir)) {
        return Err(GitSiftError::missing_metadata_suffix(path));
    }

    normalized
        .parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| GitSiftError::missing_metadata_suffix(path))
}

/// Absolute, lexically normalized start path, resolved at call time
fn resolve_start_path(start_path: Option<&Path>) -> Result<PathBuf> {
    let absolute = match start_path {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => env::current_dir()?.join(path),
        None => env::current_dir()?,
    };

    Ok(absolute.normalize())
}
