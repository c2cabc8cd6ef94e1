// Thrown tool projectiles

use super::characters::{AnimationClip, Facing, FrameClock};
use glam::Vec2;
use log::debug;

/// A tool flying horizontally across the screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    /// Top-left corner of the tool sprite
    pub position: Vec2,
    /// Horizontal velocity (px/tick)
    pub vel_x: f32,
    pub facing: Facing,
}

/// Every projectile in flight plus the tool animation they all share
#[derive(Debug, Clone)]
pub struct ProjectileSet {
    projectiles: Vec<Projectile>,
    /// Tool frames, timed at the attack frame rate
    tool: AnimationClip,
    clock: FrameClock,
    speed: f32,
}

impl ProjectileSet {
    pub fn new(tool: AnimationClip, speed: f32) -> Self {
        Self {
            projectiles: Vec::new(),
            tool,
            clock: FrameClock::new(),
            speed,
        }
    }

    /// Launch a projectile from `origin` in the `facing` direction
    pub fn spawn(&mut self, origin: Vec2, facing: Facing) {
        let projectile = Projectile {
            position: origin,
            vel_x: facing.sign() * self.speed,
            facing,
        };
        debug!("Projectile spawned at {:?} facing {:?}", origin, facing);
        self.projectiles.push(projectile);
    }

    /// Restart the shared tool animation from its first frame
    pub fn reset_tool_animation(&mut self) {
        self.clock.reset();
    }

    /// Advance the tool animation, move every projectile, then drop those
    /// more than two tool widths outside the viewport
    pub fn tick(&mut self, dt_ms: f32, viewport_width: f32) {
        self.clock.advance(dt_ms, &self.tool);

        for projectile in &mut self.projectiles {
            projectile.position.x += projectile.vel_x;
        }

        let margin = self.tool_frame_size().x * 2.0;
        let before = self.projectiles.len();
        self.projectiles
            .retain(|p| p.position.x > -margin && p.position.x < viewport_width + margin);

        let culled = before - self.projectiles.len();
        if culled > 0 {
            debug!("Culled {} projectile(s) off screen", culled);
        }
    }

    /// Projectiles currently in flight
    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub fn len(&self) -> usize {
        self.projectiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projectiles.is_empty()
    }

    /// Frame of the tool animation every projectile shows
    pub fn tool_frame(&self) -> usize {
        self.clock.frame()
    }

    pub fn tool_frame_size(&self) -> Vec2 {
        self.tool.frame_size(self.clock.frame())
    }
}
