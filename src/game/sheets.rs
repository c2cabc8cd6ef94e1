// Sprite sheet catalogue: file paths and frame regions

use super::characters::AnimationKind;
use crate::engine::assets::FrameRect;

const STOP_FRAMES: [FrameRect; 14] = [
    FrameRect::new(3, 8, 128, 195),
    FrameRect::new(140, 12, 135, 188),
    FrameRect::new(285, 8, 125, 195),
    FrameRect::new(424, 11, 126, 190),
    FrameRect::new(563, 10, 129, 192),
    FrameRect::new(700, 9, 134, 193),
    FrameRect::new(843, 9, 128, 193),
    FrameRect::new(986, 0, 122, 212),
    FrameRect::new(1126, 9, 123, 193),
    FrameRect::new(1268, 2, 118, 208),
    FrameRect::new(1408, 0, 118, 211),
    FrameRect::new(1540, 6, 134, 199),
    FrameRect::new(1687, 9, 120, 194),
    FrameRect::new(1825, 11, 124, 190),
];

const WALK_FRAMES: [FrameRect; 9] = [
    FrameRect::new(16, 0, 102, 198),
    FrameRect::new(139, 4, 134, 190),
    FrameRect::new(301, 2, 88, 194),
    FrameRect::new(445, 0, 77, 197),
    FrameRect::new(569, 2, 107, 194),
    FrameRect::new(698, 4, 127, 190),
    FrameRect::new(851, 2, 100, 193),
    FrameRect::new(1003, 1, 74, 196),
    FrameRect::new(1127, 2, 104, 193),
];

const JUMP_FRAMES: [FrameRect; 14] = [
    FrameRect::new(14, 16, 103, 155),
    FrameRect::new(137, 15, 132, 157),
    FrameRect::new(274, 22, 132, 144),
    FrameRect::new(415, 3, 124, 182),
    FrameRect::new(552, 3, 124, 182),
    FrameRect::new(703, 27, 96, 133),
    FrameRect::new(840, 32, 96, 123),
    FrameRect::new(977, 32, 96, 123),
    FrameRect::new(1114, 27, 96, 133),
    FrameRect::new(1235, 5, 128, 178),
    FrameRect::new(1370, 0, 132, 188),
    FrameRect::new(1507, 22, 132, 144),
    FrameRect::new(1644, 15, 132, 157),
    FrameRect::new(1782, 11, 130, 165),
];

const ATTACK_FRAMES: [FrameRect; 3] = [
    FrameRect::new(8, 3, 240, 139),
    FrameRect::new(261, 0, 256, 146),
    FrameRect::new(535, 3, 229, 139),
];

const TOOL_FRAMES: [FrameRect; 5] = [
    FrameRect::new(0, 3, 144, 12),
    FrameRect::new(168, 0, 105, 19),
    FrameRect::new(307, 1, 125, 17),
    FrameRect::new(451, 1, 135, 16),
    FrameRect::new(618, 0, 100, 19),
];

/// One of the five sheets the demo is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteSheet {
    Stop,
    Walk,
    Jump,
    Attack,
    /// The thrown tool
    Tool,
}

impl SpriteSheet {
    pub const ALL: [SpriteSheet; 5] = [
        Self::Stop,
        Self::Walk,
        Self::Jump,
        Self::Attack,
        Self::Tool,
    ];

    /// Sheet holding the frames of a character animation
    pub fn for_animation(kind: AnimationKind) -> Self {
        match kind {
            AnimationKind::Stop => Self::Stop,
            AnimationKind::Walk => Self::Walk,
            AnimationKind::Jump => Self::Jump,
            AnimationKind::Attack => Self::Attack,
        }
    }

    /// Name the sliced sequence is stored under
    pub fn name(&self) -> &'static str {
        match self {
            Self::Stop => "stop",
            Self::Walk => "walk",
            Self::Jump => "jump",
            Self::Attack => "attack",
            Self::Tool => "tool",
        }
    }

    /// Image path relative to the asset root
    pub fn path(&self) -> &'static str {
        match self {
            Self::Stop => "stop/stop.png",
            Self::Walk => "walk/walk.png",
            Self::Jump => "jump/jump.png",
            Self::Attack => "push/push.png",
            Self::Tool => "tool/tool.png",
        }
    }

    /// Frame regions, in playback order
    pub fn frames(&self) -> &'static [FrameRect] {
        match self {
            Self::Stop => &STOP_FRAMES,
            Self::Walk => &WALK_FRAMES,
            Self::Jump => &JUMP_FRAMES,
            Self::Attack => &ATTACK_FRAMES,
            Self::Tool => &TOOL_FRAMES,
        }
    }
}
