//! Test fixtures and builders

use anyhow::Result;
use std::path::Path;
use tempfile::TempDir;

use powerline_cwd::core::Environment;

/// A temporary directory tree with automatic cleanup
pub struct TestTree {
    pub temp_dir: TempDir,
}

impl TestTree {
    /// Root of the tree
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `rel` inside the tree, as a string
    pub fn abs(&self, rel: &str) -> String {
        self.path().join(rel).to_string_lossy().into_owned()
    }

    /// Environment whose home directory is `rel` inside the tree
    pub fn env_with_home(&self, rel: &str) -> Environment {
        Environment::default().with_home(self.abs(rel))
    }
}

/// Builder for creating directory trees with project markers
#[derive(Default)]
pub struct TestTreeBuilder {
    dirs: Vec<String>,
    files: Vec<String>,
}

impl TestTreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a directory and its parents
    pub fn with_dir(mut self, rel: impl Into<String>) -> Self {
        self.dirs.push(rel.into());
        self
    }

    /// Creates an empty file, creating parent directories as needed
    pub fn with_file(mut self, rel: impl Into<String>) -> Self {
        self.files.push(rel.into());
        self
    }

    /// Marks `rel` as a git project root with a `.git` directory
    pub fn with_git_root(self, rel: &str) -> Self {
        self.with_dir(format!("{rel}/.git"))
    }

    pub fn build(self) -> Result<TestTree> {
        let temp_dir = TempDir::new()?;

        for dir in &self.dirs {
            std::fs::create_dir_all(temp_dir.path().join(dir))?;
        }
        for file in &self.files {
            let path = temp_dir.path().join(file);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, "")?;
        }

        Ok(TestTree { temp_dir })
    }
}
