//! Git Sift - find a repository's root and sort `git status` output into new,
//! modified and untracked files.
//!
//! The library is meant for small automation scripts that need to know which
//! files changed without depending on a structured status API.
//!
//! # Public API
//! The main public interface is re-exported from the `core` module:
//! - Repository discovery ([`locate_repo_root`], [`strip_metadata_suffix`])
//! - Status classification ([`StatusParser`], [`classify`])
//! - Pluggable status text ([`StatusSource`], [`GitCommandSource`])
//! - Error handling and configuration

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use crate::core::{
    classify,
    locate_repo_root,
    locate_repo_root_named,
    parse_modified_files,
    parse_new_files,
    parse_untracked_files,
    strip_metadata_suffix,
    strip_metadata_suffix_named,

    Config,
    FileCategory,
    FileEntry,
    GitCommandSource,
    // Error handling
    GitSiftError,
    RepoPath,
    Result,
    StatusParser,
    StatusReport,
    StatusSource,

    GIT_DIR_NAME,
};
