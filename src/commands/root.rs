use crate::core::{
    config::Config,
    error::Result,
    paths::{locate_repo_root_named, strip_metadata_suffix_named},
};
use std::path::{Path, PathBuf};

/// Working root of the repository containing `start_path`
pub fn resolve_working_root(config: &Config, start_path: Option<&Path>) -> Result<PathBuf> {
    let repo_path = locate_repo_root_named(start_path, &config.metadata_dir)?;
    strip_metadata_suffix_named(repo_path.as_path(), &config.metadata_dir)
}

pub fn execute_root(start_path: Option<&Path>) -> Result<()> {
    let config = Config::load()?;
    let root = resolve_working_root(&config, start_path)?;
    println!("{}", root.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_working_root_from_subdirectory() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let repo_root = temp_dir.path().join("repo");
        std::fs::create_dir_all(repo_root.join(".git"))?;
        std::fs::create_dir_all(repo_root.join("a").join("b"))?;

        let root = resolve_working_root(&Config::default(), Some(&repo_root.join("a").join("b")))?;
        assert_eq!(root, repo_root);
        Ok(())
    }

    #[test]
    fn test_resolve_working_root_honors_metadata_dir() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let repo_root = temp_dir.path().join("repo");
        std::fs::create_dir_all(repo_root.join(".sift-test-meta"))?;

        let config = Config {
            metadata_dir: ".sift-test-meta".to_string(),
            ..Config::default()
        };
        assert_eq!(resolve_working_root(&config, Some(&repo_root))?, repo_root);
        Ok(())
    }
}
