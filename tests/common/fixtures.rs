//! Predefined repository scenarios

#![allow(dead_code)]

use super::repository::*;
use git_sift::Result;

/// Scenario: one file of each category
///
/// - `staged.txt` is new and staged
/// - `initial.txt` is committed, then modified
/// - `untracked.txt` is never added
pub fn create_mixed_status_repo() -> Result<TestRepo> {
    let repo = setup_test_repo_with_initial_commit()?;

    create_file(&repo.path, "initial.txt", "changed content\n")?;
    create_file(&repo.path, "staged.txt", "staged content\n")?;
    git_add(&repo.path, "staged.txt")?;
    create_file(&repo.path, "untracked.txt", "untracked content\n")?;

    Ok(repo)
}

/// Scenario: a committed file inside a subdirectory, then modified
pub fn create_nested_change_repo() -> Result<TestRepo> {
    let repo = setup_test_repo_with_initial_commit()?;

    create_dir(&repo.path, "src")?;
    create_file(&repo.path, "src/lib.rs", "pub fn one() {}\n")?;
    git_add(&repo.path, "src/lib.rs")?;
    git_commit(&repo.path, "Add lib")?;
    create_file(&repo.path, "src/lib.rs", "pub fn two() {}\n")?;

    Ok(repo)
}
