//! Common assertion helpers for test output validation

#![allow(dead_code)]

use predicates::prelude::*;

/// Creates a predicate that checks for the not-in-repository error message
pub fn not_in_git_repo() -> impl Predicate<str> {
    predicates::str::contains("Not in a git repository")
}

/// Creates a predicate that checks for a category section header
pub fn has_section(title: &str) -> impl Predicate<str> {
    predicates::str::contains(title.to_string())
}

/// Creates a predicate that checks for the clean working tree message
pub fn is_clean_report() -> impl Predicate<str> {
    predicates::str::contains("Nothing new, modified or untracked")
}
