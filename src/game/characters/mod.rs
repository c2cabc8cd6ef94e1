// Character system
//
// This module contains everything related to the playable character:
// - Character data structure and per-tick update steps
// - Character stats (movement and launch tuning)
// - Motion state machine
// - Vertical jump kinematics
// - Animation clips and playback

pub mod animation;
pub mod character;
pub mod kinematics;
pub mod state;
pub mod stats;

// Re-export commonly used types
pub use animation::{AnimationClip, AnimationKind, AnimationPlayer, FrameClock};
pub use character::Character;
pub use state::{Facing, MotionState};
pub use stats::CharacterStats;
