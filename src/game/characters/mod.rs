// Character system
//
// This module contains everything the two actors are built from:
// - Body placement and facing
// - Stats and spawn data
// - State machine and animation tracks
// - Movement, attack and jump subsystems
// - The player and the hostile bomb themselves

pub mod animation;
pub mod attack;
pub mod body;
pub mod hostile;
pub mod jump;
pub mod locomotion;
pub mod player;
pub mod state;
pub mod stats;

// Re-export commonly used types
pub use animation::{AnimationClip, AnimationClock, AnimationFrameData, Animator, TrackId, TrackLibrary};
pub use body::Body;
pub use hostile::Hostile;
pub use player::Player;
pub use state::{ActorState, ActorStateMachine};
pub use stats::ActorStats;
