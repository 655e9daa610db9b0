//! Filesystem infrastructure: implements the `LocalFs` port over `std::fs`.

use std::path::Path;

use anyhow::{Context, Result};

/// Production filesystem.
pub struct StdFs;

impl crate::application::ports::LocalFs for StdFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        std::fs::create_dir_all(path).with_context(|| format!("creating {}", path.display()))
    }
}
