// Combat: health pools and the per-tick hit resolver

pub mod health;
pub mod resolver;

pub use health::HealthPool;
pub use resolver::{CombatResolver, Strike};
