// Asset loading functionality

use super::AssetError;
use anyhow::Result;
use image::RgbaImage;
use std::path::{Path, PathBuf};

/// Asset loader responsible for finding and decoding sheet files
pub struct AssetLoader {
    base_path: PathBuf,
}

impl AssetLoader {
    /// Create a new asset loader with the given base path
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the full path for an asset
    pub fn resolve_path(&self, name: &str) -> PathBuf {
        self.base_path.join(name)
    }

    /// Check if an asset exists
    pub fn exists(&self, name: &str) -> bool {
        self.resolve_path(name).is_file()
    }

    /// Load and decode a sheet to RGBA8
    pub fn load_sheet(&self, name: &str) -> Result<RgbaImage> {
        let path = self.resolve_path(name);

        if !self.exists(name) {
            return Err(AssetError::NotFound(path.to_string_lossy().to_string()).into());
        }

        let bytes = std::fs::read(&path).map_err(AssetError::from)?;
        let image = image::load_from_memory(&bytes).map_err(|source| AssetError::Decode {
            path: path.to_string_lossy().to_string(),
            source,
        })?;

        Ok(image.to_rgba8())
    }

    /// Get the base path
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}
