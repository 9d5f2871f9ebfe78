// Engine modules: fixed-timestep loop and input

pub mod game_loop;
pub mod input;
