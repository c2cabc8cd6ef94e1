// Input manager - translates window events into action edges

use super::action::{Action, InputSource};
use super::config::InputConfig;
use super::player::PlayerInput;
use std::collections::HashSet;
use winit::event::{ElementState, KeyEvent, MouseButton};
use winit::keyboard::PhysicalKey;

/// A change in an action's held state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEdge {
    Pressed(Action),
    Released(Action),
}

/// Main input manager
///
/// An action is held while any of its bound sources is held, so pressing
/// ArrowLeft and KeyA together and releasing one of them keeps moving left.
pub struct InputManager {
    config: InputConfig,
    player: PlayerInput,
    held_sources: HashSet<InputSource>,
}

impl InputManager {
    /// Create a new input manager with the given bindings
    pub fn new(config: InputConfig) -> Self {
        Self {
            config,
            player: PlayerInput::new(),
            held_sources: HashSet::new(),
        }
    }

    /// Process a keyboard event from winit
    ///
    /// Auto-repeat events are ignored: they are not new presses.
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) -> Option<InputEdge> {
        let PhysicalKey::Code(key_code) = event.physical_key else {
            return None;
        };

        if event.repeat && event.state == ElementState::Pressed {
            return None;
        }

        self.process_source(InputSource::key(key_code), event.state)
    }

    /// Process a mouse button event from winit
    pub fn process_mouse_event(
        &mut self,
        button: MouseButton,
        state: ElementState,
    ) -> Option<InputEdge> {
        self.process_source(InputSource::mouse(button), state)
    }

    /// Update held state for one source and report the resulting edge, if any
    pub fn process_source(&mut self, source: InputSource, state: ElementState) -> Option<InputEdge> {
        let action = self.config.get_action(source)?;

        match state {
            ElementState::Pressed => {
                self.held_sources.insert(source);
                self.player.press(action).then_some(InputEdge::Pressed(action))
            }
            ElementState::Released => {
                self.held_sources.remove(&source);
                let still_held = self
                    .config
                    .sources(action)
                    .iter()
                    .any(|s| self.held_sources.contains(s));

                if still_held {
                    None
                } else {
                    self.player
                        .release(action)
                        .then_some(InputEdge::Released(action))
                }
            }
        }
    }

    /// Release every held action (e.g. on focus loss)
    pub fn release_all(&mut self) -> Vec<InputEdge> {
        self.held_sources.clear();
        self.player
            .release_all()
            .into_iter()
            .map(InputEdge::Released)
            .collect()
    }

    /// Current held-action state
    pub fn player(&self) -> &PlayerInput {
        &self.player
    }

    /// Get the binding configuration
    pub fn config(&self) -> &InputConfig {
        &self.config
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new(InputConfig::default())
    }
}
