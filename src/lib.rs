// Two-actor arena combat: a player against a respawning bomb on a fixed tick

pub mod core;
pub mod engine;
pub mod game;
