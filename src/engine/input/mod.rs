// Input handling system
//
// - `action`: game actions and default key bindings
// - `config`: source -> action bindings
// - `player`: held-action state
// - `manager`: turns window events into press/release edges
//
// Edges are delivered synchronously, as they arrive; the game reacts to them
// immediately and reads held state during its per-frame tick.

pub mod action;
pub mod config;
pub mod manager;
pub mod player;

// Re-export commonly used types
pub use action::Action;
pub use manager::{InputEdge, InputManager};
pub use player::PlayerInput;
