// Input handling system
//
// Keyboard events from winit are mapped to actions and sampled once per tick
// into the booleans the arena consumes.
//
// - `action`: game actions and default key bindings
// - `player`: held / just-pressed state and the per-tick sample
// - `manager`: winit event processing

pub mod action;
pub mod manager;
pub mod player;

// Re-export commonly used types
pub use action::Action;
pub use manager::InputManager;
pub use player::{InputState, TickInput};
