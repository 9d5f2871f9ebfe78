// Game layer: settings, actors, combat and the arena that ties them together

pub mod arena;
pub mod characters;
pub mod combat;
pub mod events;
pub mod hud;
pub mod settings;

pub use arena::Arena;
pub use events::{EventQueue, GameEvent, SoundCue};
pub use hud::HudSnapshot;
pub use settings::{GameSettings, SettingsError};
