// Game layer: the character, its projectiles, and the stage that runs them
//
// Nothing here touches the GPU or the window; the stage takes elapsed time
// and held input as arguments and hands back draw commands.

pub mod characters;
pub mod config;
pub mod projectiles;
pub mod sheets;
pub mod sprites;
pub mod stage;

pub use config::GameConfig;
pub use sprites::{SpriteLibrary, SpriteTextures};
pub use stage::Stage;
