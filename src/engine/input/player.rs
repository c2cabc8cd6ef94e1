// Held-action state for the local player

use super::action::Action;
use std::collections::HashSet;

/// Which actions are currently held down
///
/// Edges (press/release) are reported by `press`/`release` returning `true`
/// the moment the held state actually changes; there is no per-frame
/// buffering.
#[derive(Debug, Default, Clone)]
pub struct PlayerInput {
    pressed: HashSet<Action>,
}

impl PlayerInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an action is currently held
    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    /// Whether either horizontal direction is held
    pub fn any_horizontal(&self) -> bool {
        self.is_pressed(Action::MoveLeft) || self.is_pressed(Action::MoveRight)
    }

    /// Register an action press; returns `true` on a new press edge
    pub fn press(&mut self, action: Action) -> bool {
        self.pressed.insert(action)
    }

    /// Register an action release; returns `true` on a new release edge
    pub fn release(&mut self, action: Action) -> bool {
        self.pressed.remove(&action)
    }

    /// Release everything, returning the actions that were held
    pub fn release_all(&mut self) -> Vec<Action> {
        self.pressed.drain().collect()
    }
}
