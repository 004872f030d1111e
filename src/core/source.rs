//! Where status text comes from.
//!
//! [`StatusSource`] is the seam between classification and the outside world.
//! The production implementation, [`GitCommandSource`], opens the repository with
//! `git2` and runs `git status` in its working directory. Tests and callers that
//! already hold a snapshot can pass any `Fn(&RepoPath) -> Result<String>` instead.
//!
//! Errors from the source are returned unchanged; nothing here retries.

use crate::core::{
    error::{GitSiftError, Result},
    paths::RepoPath,
};
use git2::Repository;
use std::process::Command;

/// Produces the human-readable `git status` report for a repository
pub trait StatusSource {
    fn status_text(&self, repo_path: &RepoPath) -> Result<String>;
}

impl<F> StatusSource for F
where
    F: Fn(&RepoPath) -> Result<String>,
{
    fn status_text(&self, repo_path: &RepoPath) -> Result<String> {
        self(repo_path)
    }
}

/// Runs the real `git status` command
#[derive(Debug, Clone)]
pub struct GitCommandSource {
    git_binary: String,
}

impl GitCommandSource {
    pub fn new(git_binary: impl Into<String>) -> Self {
        Self {
            git_binary: git_binary.into(),
        }
    }

    pub fn git_binary(&self) -> &str {
        &self.git_binary
    }
}

impl Default for GitCommandSource {
    fn default() -> Self {
        Self::new("git")
    }
}

impl StatusSource for GitCommandSource {
    fn status_text(&self, repo_path: &RepoPath) -> Result<String> {
        let repo = Repository::open(repo_path.as_path())?;
        let workdir = repo
            .workdir()
            .ok_or_else(|| GitSiftError::bare_repository(repo_path.as_path()))?;

        log::debug!(
            "Running {} status in {}",
            self.git_binary,
            workdir.display()
        );

        // The parser matches the English long-format sections, so pin the
        // locale and override status.short / status.showUntrackedFiles
        let output = Command::new(&self.git_binary)
            .args([
                "-c",
                "color.status=never",
                "status",
                "--long",
                "--untracked-files=normal",
            ])
            .env("LC_ALL", "C")
            .current_dir(workdir)
            .output()?;

        if !output.status.success() {
            let error_msg = String::from_utf8_lossy(&output.stderr);
            log::warn!("git status exited with {}", output.status);
            return Err(GitSiftError::status_command_failed(error_msg.trim()));
        }

        Ok(String::from_utf8(output.stdout)?)
    }
}
