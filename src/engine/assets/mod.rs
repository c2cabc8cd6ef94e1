// Asset management system
//
// Loads frame sheets from disk once at startup and slices them into
// per-frame sub-images. Everything here is read-only after loading.

mod atlas;
mod loader;
mod manager;

pub use atlas::{FrameAtlas, FrameRect, FrameSequence};
pub use loader::AssetLoader;
pub use manager::AssetManager;

/// Asset loading errors
///
/// All of these are fatal at startup: the demo cannot run without its sprites.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Failed to decode {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error(
        "Frame {index} of '{sheet}' ({x},{y} {width}x{height}) lies outside the {sheet_width}x{sheet_height} sheet"
    )]
    RegionOutOfBounds {
        sheet: String,
        index: usize,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        sheet_width: u32,
        sheet_height: u32,
    },

    #[error("Sheet '{0}' has no frames")]
    EmptySequence(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
