//! Font file path resolution

use std::path::{Path, PathBuf};

/// Turns a font name as given by the app into a loadable path
pub trait AssetResolver {
    fn resolve(&self, name: &str) -> PathBuf;
}

/// Resolves relative names against an app data directory.
///
/// Absolute paths are passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPathResolver {
    root: PathBuf,
}

impl DataPathResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Default for DataPathResolver {
    fn default() -> Self {
        Self::new("data")
    }
}

impl AssetResolver for DataPathResolver {
    fn resolve(&self, name: &str) -> PathBuf {
        let path = Path::new(name);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}
