// Core utilities shared by the engine and game layers

pub mod math;
pub mod time;
