//! Core functionality for the git-sift tool.
//!
//! This module provides repository discovery, status classification, error
//! handling, configuration and output helpers.

pub mod category;
pub mod config;
pub mod dirs;
pub mod error;
pub mod output;
pub mod paths;
pub mod source;
pub mod state;
pub mod status;

// === Error handling ===
pub use error::{GitSiftError, Result};

// === Repository discovery ===
// Upward search for `.git` and conversion to the working root
pub use paths::{
    locate_repo_root, locate_repo_root_named, strip_metadata_suffix, strip_metadata_suffix_named,
    RepoPath, GIT_DIR_NAME,
};

// === Status text ===
// Where status text comes from, and how it is classified
pub use source::{GitCommandSource, StatusSource};
pub use status::{
    classify, parse_modified_files, parse_new_files, parse_untracked_files, StatusParser,
};

// === Classified data ===
pub use category::FileCategory;
pub use state::{FileEntry, StatusReport};

// === Configuration ===
pub use config::Config;

// === Output formatting ===
pub use output::{format_category_section, print_category_section, print_error, print_info};
