// The player-controlled character

use crate::core::math::clamp;
use crate::engine::input::{Action, PlayerInput};
use crate::game::projectiles::ProjectileSet;
use glam::Vec2;
use log::debug;
use std::mem;

use super::animation::{AnimationKind, AnimationPlayer};
use super::kinematics::{self, VerticalStep};
use super::state::{Facing, MotionEvent, MotionState};
use super::stats::CharacterStats;

/// The animated character
///
/// `position` is the point between its feet: x is the horizontal centre of
/// the frame shown and y its bottom edge.
#[derive(Debug, Clone)]
pub struct Character {
    pub position: Vec2,
    /// Horizontal velocity (px/tick)
    pub vel_x: f32,
    pub facing: Facing,
    pub stats: CharacterStats,
    state: MotionState,
    animation: AnimationPlayer,
}

impl Character {
    /// Create an idle character standing at `position`
    pub fn new(position: Vec2, stats: CharacterStats, mut animation: AnimationPlayer) -> Self {
        let state = MotionState::default();
        animation.play(state.animation());

        Self {
            position,
            vel_x: 0.0,
            facing: Facing::default(),
            stats,
            state,
            animation,
        }
    }

    fn transition(&mut self, event: MotionEvent) {
        let next = self.state.next(event);
        if mem::discriminant(&next) != mem::discriminant(&self.state) {
            debug!("Character {:?} -> {:?} on {:?}", self.state, next, event);
        }
        self.state = next;
        self.animation.play(self.state.animation());
    }

    fn steer(&mut self, facing: Facing) {
        self.facing = facing;
        self.vel_x = facing.sign() * self.stats.move_speed;
        self.transition(MotionEvent::Steer(Some(facing)));
    }

    /// React to an action press edge
    pub fn on_press(&mut self, action: Action, projectiles: &mut ProjectileSet) {
        match action {
            Action::MoveLeft => self.steer(Facing::Left),
            Action::MoveRight => self.steer(Facing::Right),
            Action::Jump => self.transition(MotionEvent::JumpPressed {
                impulse: self.stats.jump_strength,
            }),
            Action::Attack => {
                let was_attacking = self.state.is_attacking();
                self.transition(MotionEvent::AttackPressed);
                if !was_attacking && self.state.is_attacking() {
                    projectiles.reset_tool_animation();
                    self.launch(projectiles);
                }
            }
        }
    }

    /// React to an action release edge; `input` already reflects the release
    pub fn on_release(&mut self, action: Action, input: &PlayerInput) {
        if action.is_horizontal() {
            if !input.any_horizontal() {
                self.vel_x = 0.0;
                self.transition(MotionEvent::HorizontalReleased);
            }
        } else if action == Action::Attack {
            self.transition(MotionEvent::AttackReleased);
        }
    }

    /// Apply held horizontal input; left wins when both are held
    ///
    /// Does nothing during an attack, which keeps whatever velocity it
    /// started with.
    pub fn update_movement(&mut self, input: &PlayerInput) {
        if self.state.is_attacking() {
            return;
        }

        match held_direction(input) {
            Some(facing) => self.steer(facing),
            None if !self.state.is_jumping() => {
                self.vel_x = 0.0;
                self.transition(MotionEvent::Steer(None));
            }
            None => {}
        }
    }

    /// Move by the horizontal velocity and keep the shown frame on screen
    pub fn integrate_horizontal(&mut self, viewport_width: f32) {
        let half_width = self.frame_size().x / 2.0;
        self.position.x = clamp(
            self.position.x + self.vel_x,
            half_width,
            viewport_width - half_width,
        );
    }

    /// One jump physics step; lands on `ground_y`
    pub fn apply_vertical(&mut self, ground_y: f32, input: &PlayerInput) {
        let MotionState::Jumping { vel_y } = self.state else {
            return;
        };

        match kinematics::step(self.position.y, vel_y, self.stats.gravity, ground_y) {
            VerticalStep::Airborne { pos_y, vel_y } => {
                self.position.y = pos_y;
                self.transition(MotionEvent::Airborne { vel_y });
            }
            VerticalStep::Landed { pos_y } => {
                self.position.y = pos_y;
                self.transition(MotionEvent::Landed {
                    moving: input.any_horizontal(),
                });
            }
        }
    }

    /// Advance the animation clock; each completed attack cycle either
    /// launches another projectile (trigger held) or ends the attack
    pub fn advance_animation(
        &mut self,
        dt_ms: f32,
        input: &PlayerInput,
        projectiles: &mut ProjectileSet,
    ) {
        self.animation.accumulate(dt_ms);

        while let Some(step) = self.animation.step() {
            if !step.wrapped || self.animation.current() != AnimationKind::Attack {
                continue;
            }

            if self.state.attack_hold() {
                self.launch(projectiles);
            } else {
                self.transition(MotionEvent::AttackCycleCompleted {
                    moving: input.any_horizontal(),
                });
            }
        }
    }

    /// Where a projectile launched now would start
    pub fn launch_point(&self) -> Vec2 {
        let attack_height = self
            .animation
            .clip(AnimationKind::Attack)
            .map(|clip| clip.max_height())
            .unwrap_or(0.0);

        Vec2::new(
            self.position.x + self.facing.sign() * self.stats.launch_distance,
            self.position.y - attack_height * self.stats.launch_height_ratio,
        )
    }

    fn launch(&self, projectiles: &mut ProjectileSet) {
        projectiles.spawn(self.launch_point(), self.facing);
    }

    /// Size of the frame currently shown
    pub fn frame_size(&self) -> Vec2 {
        self.animation.current_frame_size()
    }

    /// Top-left corner of the frame currently shown
    pub fn top_left(&self) -> Vec2 {
        let size = self.frame_size();
        Vec2::new(self.position.x - size.x / 2.0, self.position.y - size.y)
    }

    pub fn state(&self) -> MotionState {
        self.state
    }

    pub fn animation(&self) -> &AnimationPlayer {
        &self.animation
    }

    pub fn is_jumping(&self) -> bool {
        self.state.is_jumping()
    }

    pub fn is_attacking(&self) -> bool {
        self.state.is_attacking()
    }
}

fn held_direction(input: &PlayerInput) -> Option<Facing> {
    if input.is_pressed(Action::MoveLeft) {
        Some(Facing::Left)
    } else if input.is_pressed(Action::MoveRight) {
        Some(Facing::Right)
    } else {
        None
    }
}
