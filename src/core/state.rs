//! Classified status data structures.
//!
//! # Public API
//! - [`FileEntry`]: A single path tagged with its [`FileCategory`]
//! - [`StatusReport`]: All three category lists taken from one status snapshot

use crate::core::category::FileCategory;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub category: FileCategory,
    pub path: PathBuf,
}

/// New, modified and untracked paths in order of appearance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReport {
    pub new_files: Vec<PathBuf>,
    pub modified_files: Vec<PathBuf>,
    pub untracked_files: Vec<PathBuf>,
}

impl StatusReport {
    pub fn files(&self, category: FileCategory) -> &[PathBuf] {
        match category {
            FileCategory::New => &self.new_files,
            FileCategory::Modified => &self.modified_files,
            FileCategory::Untracked => &self.untracked_files,
        }
    }

    /// Flatten into tagged entries: new, then modified, then untracked
    pub fn entries(&self) -> Vec<FileEntry> {
        FileCategory::ALL
            .iter()
            .flat_map(|&category| {
                self.files(category).iter().map(move |path| FileEntry {
                    category,
                    path: path.clone(),
                })
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.new_files.len() + self.modified_files.len() + self.untracked_files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Nothing new, modified or untracked
    pub fn is_clean(&self) -> bool {
        self.is_empty()
    }
}
