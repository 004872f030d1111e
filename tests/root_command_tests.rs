use assert_cmd::prelude::*;
use std::process::Command;

mod common;
use common::{assertions, repository::*};

#[cfg(test)]
mod root_command_tests {
    use super::*;

    #[test]
    fn test_root_from_subdirectory() -> anyhow::Result<()> {
        let repo = setup_test_repo()?;
        create_dir(&repo.path, "deeply/nested")?;

        let mut cmd = Command::cargo_bin("git-sift")?;
        cmd.env("GIT_SIFT_CONFIG", repo.isolated_config())
            .arg("root")
            .arg(repo.path.join("deeply").join("nested"))
            .assert()
            .success()
            .stdout(format!("{}\n", repo.path.display()));

        Ok(())
    }

    #[test]
    fn test_root_not_in_git_repo() -> anyhow::Result<()> {
        let repo = setup_test_repo()?;

        let mut cmd = Command::cargo_bin("git-sift")?;
        cmd.env("GIT_SIFT_CONFIG", repo.isolated_config())
            .args(["root", "/"])
            .assert()
            .failure()
            .stderr(assertions::not_in_git_repo());

        Ok(())
    }

    #[test]
    fn test_root_uses_configured_metadata_dir() -> anyhow::Result<()> {
        let repo = setup_test_repo()?;
        let hg_root = repo.temp_dir.path().join("hg-project");
        std::fs::create_dir_all(hg_root.join(".hg"))?;
        std::fs::create_dir_all(hg_root.join("docs"))?;
        std::fs::write(repo.isolated_config(), r#"{ "metadata_dir": ".hg" }"#)?;

        let mut cmd = Command::cargo_bin("git-sift")?;
        cmd.env("GIT_SIFT_CONFIG", repo.isolated_config())
            .arg("root")
            .arg(hg_root.join("docs"))
            .assert()
            .success()
            .stdout(format!("{}\n", hg_root.display()));

        Ok(())
    }
}
