//! Change categories reported by `git status`.
//!
//! [`FileCategory`] names the three mutually exclusive kinds of entry that
//! git-sift extracts from status text.

use colored::{ColoredString, Colorize};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileCategory {
    /// Staged file that is new to the index (`new file:`)
    New,
    /// Tracked file with changes (`modified:`)
    Modified,
    /// File listed under `Untracked files:`
    Untracked,
}

impl FileCategory {
    pub const ALL: [FileCategory; 3] = [
        FileCategory::New,
        FileCategory::Modified,
        FileCategory::Untracked,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FileCategory::New => "new",
            FileCategory::Modified => "modified",
            FileCategory::Untracked => "untracked",
        }
    }

    /// Section title used in grouped output
    pub fn section_title(&self) -> &'static str {
        match self {
            FileCategory::New => "New files",
            FileCategory::Modified => "Modified files",
            FileCategory::Untracked => "Untracked files",
        }
    }

    /// Apply the category color to some text
    pub fn paint(&self, text: &str) -> ColoredString {
        match self {
            FileCategory::New => text.green(),
            FileCategory::Modified => text.yellow(),
            FileCategory::Untracked => text.red(),
        }
    }
}

impl fmt::Display for FileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FileCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "new" => Ok(FileCategory::New),
            "modified" => Ok(FileCategory::Modified),
            "untracked" => Ok(FileCategory::Untracked),
            other => Err(format!(
                "unknown category '{other}' (expected new, modified or untracked)"
            )),
        }
    }
}
