// The stage: one character, its projectiles, and the viewport they live in

use super::characters::Character;
use super::config::GameConfig;
use super::projectiles::ProjectileSet;
use super::sheets::SpriteSheet;
use super::sprites::SpriteLibrary;
use crate::core::math::clamp;
use crate::engine::input::{Action, PlayerInput};
use glam::Vec2;
use log::info;

/// One sprite to draw this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub sheet: SpriteSheet,
    pub frame: usize,
    /// Top-left corner in window pixels
    pub position: Vec2,
    pub size: Vec2,
    /// Mirror horizontally
    pub flip: bool,
}

/// Owns all simulation state and runs one tick at a time
pub struct Stage {
    character: Character,
    projectiles: ProjectileSet,
    viewport: Vec2,
    ground_ratio: f32,
    ground_y: f32,
    draw_list: Vec<DrawCommand>,
}

impl Stage {
    /// Place an idle character centred on the ground of a `viewport`-sized screen
    pub fn new(library: &SpriteLibrary, config: &GameConfig, viewport: Vec2) -> Self {
        let ground_y = config.ground_y(viewport.y);
        let character = Character::new(
            Vec2::new(viewport.x / 2.0, ground_y),
            config.character,
            library.animation_player(),
        );

        Self {
            character,
            projectiles: ProjectileSet::new(library.tool_clip().clone(), config.tool_speed),
            viewport,
            ground_ratio: config.ground_ratio,
            ground_y,
            draw_list: Vec::new(),
        }
    }

    /// Run one tick of `dt_ms` elapsed milliseconds
    ///
    /// The character is drawn with the frame it was positioned with, before
    /// its animation advances; projectiles are drawn after they move.
    pub fn tick(&mut self, dt_ms: f32, input: &PlayerInput) {
        self.draw_list.clear();

        self.character.update_movement(input);
        self.character.integrate_horizontal(self.viewport.x);
        self.character.apply_vertical(self.ground_y, input);

        let character_sprite = self.character_command();
        self.draw_list.push(character_sprite);

        self.character
            .advance_animation(dt_ms, input, &mut self.projectiles);
        self.projectiles.tick(dt_ms, self.viewport.x);

        let tool_frame = self.projectiles.tool_frame();
        let tool_size = self.projectiles.tool_frame_size();
        self.draw_list
            .extend(self.projectiles.projectiles().iter().map(|p| DrawCommand {
                sheet: SpriteSheet::Tool,
                frame: tool_frame,
                position: p.position,
                size: tool_size,
                flip: p.facing.is_left(),
            }));
    }

    fn character_command(&self) -> DrawCommand {
        let animation = self.character.animation();
        DrawCommand {
            sheet: SpriteSheet::for_animation(animation.current()),
            frame: animation.current_frame(),
            position: self.character.top_left(),
            size: self.character.frame_size(),
            flip: self.character.facing.is_left(),
        }
    }

    /// Forward an action press edge
    pub fn on_press(&mut self, action: Action) {
        self.character.on_press(action, &mut self.projectiles);
    }

    /// Forward an action release edge; `input` already reflects the release
    pub fn on_release(&mut self, action: Action, input: &PlayerInput) {
        self.character.on_release(action, input);
    }

    /// Fit the stage to a new viewport size
    ///
    /// A character standing on the ground follows it, even onto a lower
    /// ground line, rather than being clamped to at most the new ground and
    /// left floating. One in the air is only pulled down if the new ground
    /// is above it.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width, height);
        self.ground_y = height * self.ground_ratio;

        let airborne = self.character.is_jumping();
        let position = &mut self.character.position;
        position.x = clamp(position.x, 0.0, width);
        position.y = if airborne {
            position.y.min(self.ground_y)
        } else {
            self.ground_y
        };

        info!(
            "Stage resized to {}x{}, ground at {}",
            width, height, self.ground_y
        );
    }

    /// Sprites produced by the last tick: the character, then each projectile
    pub fn draw_list(&self) -> &[DrawCommand] {
        &self.draw_list
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn projectiles(&self) -> &ProjectileSet {
        &self.projectiles
    }

    pub fn ground_y(&self) -> f32 {
        self.ground_y
    }
}
