// Sprite frames: clip timing for the simulation, textures for the renderer

use super::characters::{AnimationClip, AnimationKind, AnimationPlayer};
use super::config::FrameRates;
use super::sheets::SpriteSheet;
use crate::engine::assets::AssetManager;
use crate::engine::renderer::{Renderer, TextureHandle};
use anyhow::{Context, Result};
use log::info;
use std::collections::HashMap;

/// Animation clips for every sheet, built once at startup
#[derive(Debug, Clone)]
pub struct SpriteLibrary {
    clips: HashMap<AnimationKind, AnimationClip>,
    tool: AnimationClip,
}

impl SpriteLibrary {
    /// Load and slice every sheet; any missing or malformed sheet is fatal
    pub fn load(assets: &mut AssetManager, rates: &FrameRates) -> Result<Self> {
        let mut clips = HashMap::new();
        for kind in AnimationKind::ALL {
            let sheet = SpriteSheet::for_animation(kind);
            let sequence = assets
                .load_sequence(sheet.name(), sheet.path(), sheet.frames())
                .with_context(|| format!("loading '{}' animation", kind.name()))?;
            clips.insert(kind, AnimationClip::from_sequence(sequence, rates.rate(kind)));
        }

        // The tool spins at the attack rate
        let sheet = SpriteSheet::Tool;
        let sequence = assets
            .load_sequence(sheet.name(), sheet.path(), sheet.frames())
            .context("loading tool frames")?;
        let tool = AnimationClip::from_sequence(sequence, rates.rate(AnimationKind::Attack));

        let stats = assets.stats();
        info!(
            "Sprite library ready: {} sheets, {} frames",
            stats.sheet_count, stats.frame_count
        );

        Ok(Self { clips, tool })
    }

    /// Build a library from clips directly
    pub fn from_clips(clips: HashMap<AnimationKind, AnimationClip>, tool: AnimationClip) -> Self {
        Self { clips, tool }
    }

    /// A fresh player over every character clip, showing the idle animation
    pub fn animation_player(&self) -> AnimationPlayer {
        AnimationPlayer::with_clips(self.clips.clone(), AnimationKind::Stop)
    }

    pub fn clip(&self, kind: AnimationKind) -> Option<&AnimationClip> {
        self.clips.get(&kind)
    }

    pub fn tool_clip(&self) -> &AnimationClip {
        &self.tool
    }
}

/// GPU textures for every extracted frame, one texture per frame
pub struct SpriteTextures {
    frames: HashMap<SpriteSheet, Vec<TextureHandle>>,
}

impl SpriteTextures {
    /// Upload every frame of every sheet already loaded into `assets`
    pub fn upload(renderer: &mut Renderer, assets: &AssetManager) -> Result<Self> {
        let mut frames = HashMap::new();

        for sheet in SpriteSheet::ALL {
            let sequence = assets
                .get_sequence(sheet.name())
                .with_context(|| format!("'{}' frames were never loaded", sheet.name()))?;

            let handles = sequence
                .frames()
                .iter()
                .enumerate()
                .map(|(i, frame)| {
                    renderer.upload_texture(frame, &format!("{} frame {}", sheet.name(), i))
                })
                .collect::<Result<Vec<_>>>()?;

            frames.insert(sheet, handles);
        }

        info!(
            "Uploaded {} sprite textures",
            renderer.texture_manager().texture_count()
        );

        Ok(Self { frames })
    }

    /// Texture for one frame of a sheet
    pub fn get(&self, sheet: SpriteSheet, frame: usize) -> Option<TextureHandle> {
        self.frames.get(&sheet)?.get(frame).copied()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::game::config::FRAME_RATES;
    use glam::Vec2;

    /// Character frame size used by every test clip
    pub const BODY: Vec2 = Vec2::new(100.0, 200.0);
    /// Tallest attack frame
    pub const ATTACK_HEIGHT: f32 = 140.0;
    pub const TOOL: Vec2 = Vec2::new(100.0, 16.0);

    /// Uniform-size frames with the real frame counts and rates
    pub fn library() -> SpriteLibrary {
        let mut clips = HashMap::new();
        for kind in AnimationKind::ALL {
            let frames = SpriteSheet::for_animation(kind).frames().len();
            let size = if kind == AnimationKind::Attack {
                Vec2::new(BODY.x, ATTACK_HEIGHT)
            } else {
                BODY
            };
            clips.insert(kind, AnimationClip::new(vec![size; frames], FRAME_RATES.rate(kind)));
        }

        let tool_frames = SpriteSheet::Tool.frames().len();
        let tool = AnimationClip::new(
            vec![TOOL; tool_frames],
            FRAME_RATES.rate(AnimationKind::Attack),
        );

        SpriteLibrary::from_clips(clips, tool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::AssetError;
    use crate::game::config::FRAME_RATES;
    use image::RgbaImage;
    use std::path::PathBuf;

    /// Blank sheets big enough for every authored frame
    fn asset_dir(tag: &str, skip: Option<SpriteSheet>) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("walkabout-{}-{}", tag, std::process::id()));
        for sheet in SpriteSheet::ALL {
            if Some(sheet) == skip {
                continue;
            }
            let path = dir.join(sheet.path());
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            RgbaImage::new(1960, 220).save(&path).unwrap();
        }
        dir
    }

    #[test]
    fn test_load_builds_every_clip() {
        let dir = asset_dir("sprites-all", None);
        let mut assets = AssetManager::new(&dir);

        let library = SpriteLibrary::load(&mut assets, &FRAME_RATES).unwrap();

        let attack = library.clip(AnimationKind::Attack).unwrap();
        assert_eq!(attack.len(), 3);
        assert_eq!(attack.max_height(), 146.0);
        assert_eq!(library.clip(AnimationKind::Stop).unwrap().len(), 14);
        assert_eq!(library.clip(AnimationKind::Walk).unwrap().len(), 9);
        assert_eq!(library.clip(AnimationKind::Jump).unwrap().len(), 14);

        let tool = library.tool_clip();
        assert_eq!(tool.len(), 5);
        assert_eq!(tool.frame_duration_ms(), attack.frame_duration_ms());

        assert_eq!(assets.stats().sequence_count, 5);
        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_missing_sheet_is_fatal() {
        let dir = asset_dir("sprites-missing", Some(SpriteSheet::Attack));
        let mut assets = AssetManager::new(&dir);

        let err = SpriteLibrary::load(&mut assets, &FRAME_RATES).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AssetError>(),
            Some(AssetError::NotFound(_))
        ));
        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_undersized_sheet_is_fatal() {
        let dir = asset_dir("sprites-small", None);
        RgbaImage::new(300, 220)
            .save(dir.join(SpriteSheet::Walk.path()))
            .unwrap();
        let mut assets = AssetManager::new(&dir);

        let err = SpriteLibrary::load(&mut assets, &FRAME_RATES).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AssetError>(),
            Some(AssetError::RegionOutOfBounds { .. })
        ));
        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_player_starts_idle() {
        let library = test_support::library();
        let player = library.animation_player();
        assert_eq!(player.current(), AnimationKind::Stop);
        assert!(player.clip(AnimationKind::Attack).is_some());
    }
}
