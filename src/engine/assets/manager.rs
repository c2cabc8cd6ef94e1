// Central asset management system

use super::{AssetLoader, FrameAtlas, FrameRect, FrameSequence};
use anyhow::{Context, Result};
use image::RgbaImage;
use log::info;
use std::collections::HashMap;
use std::path::Path;

/// Central asset manager for the demo
///
/// Decodes each sheet once and keeps every sliced frame sequence by name.
pub struct AssetManager {
    /// Asset loader
    loader: AssetLoader,

    /// Decoded sheets, keyed by path relative to the asset root
    sheets: HashMap<String, RgbaImage>,

    /// Sliced frame sequences, keyed by name
    sequences: HashMap<String, FrameSequence>,
}

impl AssetManager {
    /// Create a new asset manager
    pub fn new<P: AsRef<Path>>(asset_path: P) -> Self {
        Self {
            loader: AssetLoader::new(asset_path),
            sheets: HashMap::new(),
            sequences: HashMap::new(),
        }
    }

    /// Load a sheet (cached) and slice it into a named frame sequence
    pub fn load_sequence(
        &mut self,
        name: &str,
        sheet_path: &str,
        rects: &[FrameRect],
    ) -> Result<&FrameSequence> {
        if !self.sequences.contains_key(name) {
            let sequence = {
                let sheet = self.sheet(sheet_path)?;
                FrameAtlas::build(name, sheet, rects)
                    .with_context(|| format!("slicing sheet '{}'", sheet_path))?
            };

            info!(
                "Loaded '{}': {} frames, tallest {}px",
                name,
                sequence.len(),
                sequence.max_height()
            );
            self.sequences.insert(name.to_string(), sequence);
        }

        self.sequences
            .get(name)
            .ok_or_else(|| anyhow::anyhow!("sequence '{}' vanished after loading", name))
    }

    /// Get a previously loaded sequence by name
    pub fn get_sequence(&self, name: &str) -> Option<&FrameSequence> {
        self.sequences.get(name)
    }

    /// Get statistics about loaded assets
    pub fn stats(&self) -> AssetStats {
        AssetStats {
            sheet_count: self.sheets.len(),
            sequence_count: self.sequences.len(),
            frame_count: self.sequences.values().map(FrameSequence::len).sum(),
        }
    }

    fn sheet(&mut self, sheet_path: &str) -> Result<&RgbaImage> {
        if !self.sheets.contains_key(sheet_path) {
            let sheet = self.loader.load_sheet(sheet_path)?;
            self.sheets.insert(sheet_path.to_string(), sheet);
        }

        self.sheets
            .get(sheet_path)
            .ok_or_else(|| anyhow::anyhow!("sheet '{}' vanished after loading", sheet_path))
    }
}

/// Statistics about loaded assets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetStats {
    pub sheet_count: usize,
    pub sequence_count: usize,
    pub frame_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::AssetError;

    fn temp_asset_dir(tag: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("walkabout-{}-{}", tag, std::process::id()));
        std::fs::create_dir_all(dir.join("sheets")).unwrap();
        RgbaImage::from_pixel(10, 6, image::Rgba([1, 2, 3, 255]))
            .save(dir.join("sheets/strip.png"))
            .unwrap();
        dir
    }

    #[test]
    fn test_sheet_is_decoded_once_for_two_sequences() {
        let dir = temp_asset_dir("manager-shared");
        let mut manager = AssetManager::new(&dir);

        manager
            .load_sequence("left", "sheets/strip.png", &[FrameRect::new(0, 0, 5, 6)])
            .unwrap();
        manager
            .load_sequence("right", "sheets/strip.png", &[FrameRect::new(5, 0, 5, 4)])
            .unwrap();

        let stats = manager.stats();
        assert_eq!(
            stats,
            AssetStats {
                sheet_count: 1,
                sequence_count: 2,
                frame_count: 2,
            }
        );
        assert_eq!(manager.get_sequence("right").unwrap().max_height(), 4);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_out_of_bounds_rect_is_fatal() {
        let dir = temp_asset_dir("manager-bounds");
        let mut manager = AssetManager::new(&dir);

        let err = manager
            .load_sequence("wide", "sheets/strip.png", &[FrameRect::new(8, 0, 5, 6)])
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AssetError>(),
            Some(AssetError::RegionOutOfBounds { .. })
        ));
        assert!(manager.get_sequence("wide").is_none());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_sheet_is_fatal() {
        let mut manager = AssetManager::new("/definitely/not/here");
        let err = manager
            .load_sequence("stop", "stop/stop.png", &[FrameRect::new(0, 0, 1, 1)])
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AssetError>(),
            Some(AssetError::NotFound(_))
        ));
        assert_eq!(manager.stats().sheet_count, 0);
    }
}
