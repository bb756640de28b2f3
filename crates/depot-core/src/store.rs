//! Reads and writes the manifest document on disk.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::manifest::Manifest;

/// File name of the project manifest in the project directory.
pub const MANIFEST_FILE: &str = "depot.toml";

/// Errors during manifest load/save.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The file could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The file contents are not a valid manifest document.
    #[error("failed to parse manifest: {0}")]
    Parse(#[from] toml::de::Error),
    /// The document could not be serialized.
    #[error("failed to serialize manifest: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Loads and saves the manifest at a fixed path. Pure I/O boundary; every
/// invariant lives in [`Manifest`] and its callers.
#[derive(Debug, Clone)]
pub struct ManifestStore {
    path: PathBuf,
}

impl ManifestStore {
    /// Create a store for the manifest at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store for `depot.toml` inside `dir`.
    #[must_use]
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(MANIFEST_FILE))
    }

    /// The manifest path this store reads and writes.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a manifest file exists at the store's path.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read and parse the manifest from disk.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file cannot be read or parsed.
    pub fn load(&self) -> Result<Manifest, StoreError> {
        let raw = std::fs::read_to_string(&self.path)?;
        Ok(toml::from_str(&raw)?)
    }

    /// Serialize and write the manifest, creating parent directories if
    /// necessary.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the directory cannot be created or the file
    /// cannot be written.
    pub fn save(&self, manifest: &Manifest) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, toml::to_string(manifest)?)?;
        Ok(())
    }
}
