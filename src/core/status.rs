//! Classification of `git status` text.
//!
//! The long-format report that `git status` prints is split into three ordered
//! lists: new files (`new file:` lines), modified files (`modified:` lines) and
//! untracked files (bare paths listed under the `Untracked files:` header).
//!
//! # Public API
//! - [`StatusParser`]: Fetches status text from a [`StatusSource`] and classifies it
//! - [`parse_new_files`], [`parse_modified_files`], [`parse_untracked_files`],
//!   [`classify`]: The same classification over text the caller already holds
//!
//! Every [`StatusParser`] getter fetches the status text again, so results reflect
//! the repository at call time. Use [`StatusParser::report`] (or [`classify`] on a
//! captured snapshot) when all three lists must agree with each other.

use crate::core::{
    config::Config,
    error::Result,
    paths::{locate_repo_root, locate_repo_root_named, RepoPath},
    source::{GitCommandSource, StatusSource},
    state::StatusReport,
};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};

static NEW_FILE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"new file:[ \t]*([^\r\n]*)").expect("valid new file regex"));

static MODIFIED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"modified:[ \t]*([^\r\n]*)").expect("valid modified regex"));

const UNTRACKED_HEADER: &str = "Untracked files:";

/// Line scanner state for the untracked section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Searching,
    InUntrackedSection { seen_entry: bool },
}

/// Paths from `new file:` lines, in order of appearance
pub fn parse_new_files(status: &str) -> Vec<PathBuf> {
    capture_paths(&NEW_FILE_RE, status)
}

/// Paths from `modified:` lines, in order of appearance.
///
/// Unmerged `both modified:` entries match as well.
pub fn parse_modified_files(status: &str) -> Vec<PathBuf> {
    capture_paths(&MODIFIED_RE, status)
}

/// Bare paths listed under the `Untracked files:` header.
///
/// Inside the section only lines made of exactly one whitespace-separated token
/// count as paths; the parenthesised hint line and blank lines are skipped. The
/// section ends at the first blank line after an entry or at the next
/// unindented header line.
pub fn parse_untracked_files(status: &str) -> Vec<PathBuf> {
    let mut untracked = Vec::new();
    let mut state = ScanState::Searching;

    for line in status.lines() {
        state = match state {
            ScanState::InUntrackedSection { seen_entry } if !is_section_header(line) => {
                let mut tokens = line.split_whitespace();
                match (tokens.next(), tokens.next()) {
                    (Some(path), None) => {
                        untracked.push(PathBuf::from(path));
                        ScanState::InUntrackedSection { seen_entry: true }
                    }
                    (None, _) if seen_entry => ScanState::Searching,
                    _ => state,
                }
            }
            _ if line == UNTRACKED_HEADER => ScanState::InUntrackedSection { seen_entry: false },
            _ => ScanState::Searching,
        };
    }

    untracked
}

/// All three categories from one snapshot of status text
pub fn classify(status: &str) -> StatusReport {
    StatusReport {
        new_files: parse_new_files(status),
        modified_files: parse_modified_files(status),
        untracked_files: parse_untracked_files(status),
    }
}

fn capture_paths(pattern: &Regex, status: &str) -> Vec<PathBuf> {
    pattern
        .captures_iter(status)
        .filter_map(|caps| caps.get(1))
        .map(|capture| capture.as_str())
        .filter(|path| !path.is_empty())
        .map(PathBuf::from)
        .collect()
}

// Headers such as "Changes to be committed:" start at column zero; entries are indented
fn is_section_header(line: &str) -> bool {
    !line.starts_with(char::is_whitespace) && line.trim_end().ends_with(':')
}

/// Classifies the status of one repository.
///
/// ```
/// use git_sift::{GitSiftError, RepoPath, StatusParser};
/// use std::path::PathBuf;
///
/// let source = |_: &RepoPath| -> Result<String, GitSiftError> {
///     Ok("\tmodified:   src/lib.rs\n".to_string())
/// };
/// let parser = StatusParser::new(RepoPath::new("/repo/.git"), source).with_full_paths(true);
///
/// assert_eq!(parser.modified_files()?, vec![PathBuf::from("/repo/src/lib.rs")]);
/// # Ok::<(), GitSiftError>(())
/// ```
pub struct StatusParser<S = GitCommandSource> {
    repo_path: RepoPath,
    source: S,
    show_full_path: bool,
}

impl StatusParser<GitCommandSource> {
    /// Locate the repository above `start_path` (default: the current directory)
    /// and read its status with `git`.
    pub fn discover(start_path: Option<&Path>) -> Result<Self> {
        let repo_path = locate_repo_root(start_path)?;
        Ok(Self::new(repo_path, GitCommandSource::default()))
    }

    /// Like [`StatusParser::discover`], with the metadata directory, git binary
    /// and full-path default taken from `config`.
    pub fn from_config(config: &Config, start_path: Option<&Path>) -> Result<Self> {
        let repo_path = locate_repo_root_named(start_path, &config.metadata_dir)?;
        let source = GitCommandSource::new(config.git_binary.clone());
        Ok(Self::new(repo_path, source).with_full_paths(config.show_full_path))
    }
}

impl<S: StatusSource> StatusParser<S> {
    pub fn new(repo_path: RepoPath, source: S) -> Self {
        Self {
            repo_path,
            source,
            show_full_path: false,
        }
    }

    /// Join every returned path onto the repository's working root
    pub fn with_full_paths(mut self, show_full_path: bool) -> Self {
        self.show_full_path = show_full_path;
        self
    }

    pub fn repo_path(&self) -> &RepoPath {
        &self.repo_path
    }

    pub fn shows_full_paths(&self) -> bool {
        self.show_full_path
    }

    /// Raw status text, fetched from the source on every call
    pub fn status(&self) -> Result<String> {
        self.source.status_text(&self.repo_path)
    }

    pub fn new_files(&self) -> Result<Vec<PathBuf>> {
        let status = self.status()?;
        Ok(self.format_paths(parse_new_files(&status)))
    }

    pub fn modified_files(&self) -> Result<Vec<PathBuf>> {
        let status = self.status()?;
        Ok(self.format_paths(parse_modified_files(&status)))
    }

    pub fn untracked_files(&self) -> Result<Vec<PathBuf>> {
        let status = self.status()?;
        Ok(self.format_paths(parse_untracked_files(&status)))
    }

    /// All three lists from a single fetch
    pub fn report(&self) -> Result<StatusReport> {
        let status = self.status()?;
        let report = classify(&status);
        log::debug!(
            "Classified status for {}: {} new, {} modified, {} untracked",
            self.repo_path,
            report.new_files.len(),
            report.modified_files.len(),
            report.untracked_files.len()
        );

        Ok(StatusReport {
            new_files: self.format_paths(report.new_files),
            modified_files: self.format_paths(report.modified_files),
            untracked_files: self.format_paths(report.untracked_files),
        })
    }

    fn format_paths(&self, paths: Vec<PathBuf>) -> Vec<PathBuf> {
        if !self.show_full_path {
            return paths;
        }

        let root = self.repo_path.working_root();
        paths.into_iter().map(|path| root.join(path)).collect()
    }
}
