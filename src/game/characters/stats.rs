// Character stats
//
// Movement values are per tick, not per second: the demo ticks at a fixed
// nominal rate and its motion is tuned to that rate.

/// Movement and launch tuning for the character
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterStats {
    // Movement
    /// Horizontal speed while a direction is held (px/tick)
    pub move_speed: f32,
    /// Upward velocity applied when a jump starts (px/tick)
    pub jump_strength: f32,

    // Physics
    /// Added to the vertical velocity every tick (px/tick^2)
    pub gravity: f32,

    // Attack
    /// Horizontal offset of a new projectile, in the facing direction
    pub launch_distance: f32,
    /// Launch height above the feet, as a fraction of the tallest attack frame
    pub launch_height_ratio: f32,
}

/// The character's stats
pub const BASE_STATS: CharacterStats = CharacterStats {
    move_speed: 6.0,
    jump_strength: 28.0,

    gravity: 4.0,

    launch_distance: 80.0,
    launch_height_ratio: 0.55,
};

impl Default for CharacterStats {
    fn default() -> Self {
        BASE_STATS
    }
}

impl CharacterStats {
    /// Get the standard character stats
    pub fn standard() -> Self {
        BASE_STATS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stats() {
        let stats = CharacterStats::default();
        assert_eq!(stats.move_speed, 6.0);
        assert_eq!(stats.jump_strength, 28.0);
        assert_eq!(stats.gravity, 4.0);
    }

    #[test]
    fn test_standard_equals_default() {
        assert_eq!(CharacterStats::standard(), CharacterStats::default());
    }

    #[test]
    fn test_jump_returns_to_ground() {
        // Impulse is a whole number of gravity steps, so the arc is symmetric
        let stats = CharacterStats::standard();
        assert_eq!(stats.jump_strength % stats.gravity, 0.0);
    }
}
