// Game configuration constants

use super::characters::{AnimationKind, CharacterStats};

/// Per-animation playback rates in frames per second
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameRates {
    rates: &'static [(AnimationKind, f32)],
    /// Rate for any animation missing from the table
    fallback: f32,
}

pub const FRAME_RATES: FrameRates = FrameRates {
    rates: &[
        (AnimationKind::Stop, 12.0),
        (AnimationKind::Walk, 18.0),
        (AnimationKind::Jump, 20.0),
        (AnimationKind::Attack, 14.0),
    ],
    fallback: 14.0,
};

impl FrameRates {
    pub const fn new(rates: &'static [(AnimationKind, f32)], fallback: f32) -> Self {
        Self { rates, fallback }
    }

    /// Frames per second for `kind`
    pub fn rate(&self, kind: AnimationKind) -> f32 {
        self.rates
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, fps)| *fps)
            .unwrap_or(self.fallback)
    }
}

impl Default for FrameRates {
    fn default() -> Self {
        FRAME_RATES
    }
}

/// Everything the demo is tuned with
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    /// Clear colour, sRGB
    pub background: [u8; 3],
    /// Nominal ticks per second
    pub target_fps: f32,
    /// Ground level as a fraction of the viewport height (from the top)
    pub ground_ratio: f32,
    pub frame_rates: FrameRates,
    /// Projectile speed (px/tick)
    pub tool_speed: f32,
    pub character: CharacterStats,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            background: [0xb7, 0xb7, 0xa4],
            target_fps: 24.0,
            ground_ratio: 0.65,
            frame_rates: FRAME_RATES,
            tool_speed: 12.0,
            character: CharacterStats::standard(),
        }
    }
}

impl GameConfig {
    /// Ground level for a viewport of the given height
    pub fn ground_y(&self, viewport_height: f32) -> f32 {
        viewport_height * self.ground_ratio
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_frame_rates() {
        let rates = FrameRates::default();
        assert_eq!(rates.rate(AnimationKind::Stop), 12.0);
        assert_eq!(rates.rate(AnimationKind::Walk), 18.0);
        assert_eq!(rates.rate(AnimationKind::Jump), 20.0);
        assert_eq!(rates.rate(AnimationKind::Attack), 14.0);
    }

    #[test]
    fn test_unmapped_animation_uses_fallback() {
        let rates = FrameRates::new(&[(AnimationKind::Walk, 30.0)], 9.0);
        assert_eq!(rates.rate(AnimationKind::Walk), 30.0);
        assert_eq!(rates.rate(AnimationKind::Jump), 9.0);
    }

    #[test]
    fn test_ground_level() {
        let config = GameConfig::default();
        assert_relative_eq!(config.ground_y(720.0), 468.0);
        assert_eq!(config.background, [183, 183, 164]);
    }
}
