use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Where the subject folders live, relative to the home directory.
pub const DEFAULT_ROOT: &str = "Library/Mobile Documents/com~apple~CloudDocs/TU";

/// Settings shared by every command. The root never changes while the process runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    root: PathBuf,
}

impl Config {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The built-in root: [`DEFAULT_ROOT`] below the user's home directory.
    pub fn from_home() -> Result<Self> {
        let home = dirs::home_dir().context("Could not determine the home directory")?;
        Ok(Self::new(home.join(DEFAULT_ROOT)))
    }

    /// Folder holding one subdirectory per subject.
    pub fn root(&self) -> &Path {
        &self.root
    }
}
