// Character animation system

use crate::engine::assets::FrameSequence;
use glam::Vec2;
use std::collections::HashMap;

/// The character's animations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationKind {
    /// Standing still
    Stop,
    Walk,
    Jump,
    Attack,
}

impl AnimationKind {
    pub const ALL: [AnimationKind; 4] = [Self::Stop, Self::Walk, Self::Jump, Self::Attack];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Stop => "stop",
            Self::Walk => "walk",
            Self::Jump => "jump",
            Self::Attack => "attack",
        }
    }
}

/// Frame timing and geometry for one animation
///
/// Only the sizes of the frames are kept here; the pixels live with the
/// renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClip {
    frame_sizes: Vec<Vec2>,
    /// Duration of each frame in milliseconds
    frame_duration_ms: f32,
    max_height: f32,
}

impl AnimationClip {
    /// Create a clip from its frame sizes, played at `fps` frames per second
    pub fn new(frame_sizes: Vec<Vec2>, fps: f32) -> Self {
        let max_height = frame_sizes.iter().map(|s| s.y).fold(0.0, f32::max);
        let frame_duration_ms = if fps > 0.0 {
            1000.0 / fps
        } else {
            f32::INFINITY
        };

        Self {
            frame_sizes,
            frame_duration_ms,
            max_height,
        }
    }

    /// Create a clip matching a sliced frame sequence
    pub fn from_sequence(sequence: &FrameSequence, fps: f32) -> Self {
        Self::new(sequence.frame_sizes(), fps)
    }

    /// Number of frames
    pub fn len(&self) -> usize {
        self.frame_sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frame_sizes.is_empty()
    }

    pub fn frame_duration_ms(&self) -> f32 {
        self.frame_duration_ms
    }

    /// Height of the tallest frame
    pub fn max_height(&self) -> f32 {
        self.max_height
    }

    /// Size of a frame, or zero for an index outside the clip
    pub fn frame_size(&self, index: usize) -> Vec2 {
        self.frame_sizes.get(index).copied().unwrap_or(Vec2::ZERO)
    }
}

/// One frame advance reported by a [`FrameClock`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameStep {
    /// Frame index after the advance
    pub frame: usize,
    /// The index wrapped back to 0
    pub wrapped: bool,
}

/// Frame index plus elapsed-time accumulator
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameClock {
    frame: usize,
    elapsed_ms: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to frame 0 with an empty accumulator
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn accumulate(&mut self, dt_ms: f32) {
        self.elapsed_ms += dt_ms;
    }

    /// Take one frame step if a full frame duration has accumulated
    pub fn step(&mut self, clip: &AnimationClip) -> Option<FrameStep> {
        if clip.is_empty() || self.elapsed_ms < clip.frame_duration_ms {
            return None;
        }

        self.elapsed_ms -= clip.frame_duration_ms;
        self.frame = (self.frame + 1) % clip.len();

        Some(FrameStep {
            frame: self.frame,
            wrapped: self.frame == 0,
        })
    }

    /// Accumulate `dt_ms` and take every step it covers; returns how many
    /// times the index wrapped
    pub fn advance(&mut self, dt_ms: f32, clip: &AnimationClip) -> usize {
        self.accumulate(dt_ms);

        let mut wraps = 0;
        while let Some(step) = self.step(clip) {
            if step.wrapped {
                wraps += 1;
            }
        }
        wraps
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    pub fn elapsed_ms(&self) -> f32 {
        self.elapsed_ms
    }
}

/// Manages animation playback for a character
#[derive(Debug, Clone)]
pub struct AnimationPlayer {
    /// All available animations
    clips: HashMap<AnimationKind, AnimationClip>,
    /// Currently playing animation
    current: AnimationKind,
    clock: FrameClock,
}

impl AnimationPlayer {
    /// Create a player showing `initial`
    pub fn new(initial: AnimationKind) -> Self {
        Self {
            clips: HashMap::new(),
            current: initial,
            clock: FrameClock::new(),
        }
    }

    /// Create a player with every clip already registered
    pub fn with_clips(clips: HashMap<AnimationKind, AnimationClip>, initial: AnimationKind) -> Self {
        Self {
            clips,
            current: initial,
            clock: FrameClock::new(),
        }
    }

    /// Add an animation clip
    pub fn add_clip(&mut self, kind: AnimationKind, clip: AnimationClip) {
        self.clips.insert(kind, clip);
    }

    /// Switch to another animation from its first frame
    ///
    /// Re-entering the current animation, or asking for one that has no clip,
    /// changes nothing. Returns whether the switch happened.
    pub fn play(&mut self, kind: AnimationKind) -> bool {
        if kind == self.current || !self.clips.contains_key(&kind) {
            return false;
        }

        self.current = kind;
        self.clock.reset();
        true
    }

    /// Add elapsed time without stepping (see [`AnimationPlayer::step`])
    pub fn accumulate(&mut self, dt_ms: f32) {
        self.clock.accumulate(dt_ms);
    }

    /// Take a single frame step of the current animation if one is due
    pub fn step(&mut self) -> Option<FrameStep> {
        let clip = self.clips.get(&self.current)?;
        self.clock.step(clip)
    }

    /// Advance the current animation by `dt_ms`, catching up on every frame
    /// boundary crossed; returns how many times it wrapped
    pub fn advance(&mut self, dt_ms: f32) -> usize {
        match self.clips.get(&self.current) {
            Some(clip) => self.clock.advance(dt_ms, clip),
            None => 0,
        }
    }

    /// Get the current animation
    pub fn current(&self) -> AnimationKind {
        self.current
    }

    /// Get the current frame index
    pub fn current_frame(&self) -> usize {
        self.clock.frame()
    }

    pub fn elapsed_ms(&self) -> f32 {
        self.clock.elapsed_ms()
    }

    /// Get the clip info for the current animation
    pub fn current_clip(&self) -> Option<&AnimationClip> {
        self.clips.get(&self.current)
    }

    /// Size of the frame being shown
    pub fn current_frame_size(&self) -> Vec2 {
        self.current_clip()
            .map(|clip| clip.frame_size(self.current_frame()))
            .unwrap_or(Vec2::ZERO)
    }

    pub fn clip(&self, kind: AnimationKind) -> Option<&AnimationClip> {
        self.clips.get(&kind)
    }
}
