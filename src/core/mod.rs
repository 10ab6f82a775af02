//! Core game logic: grid state, configuration resolution, the runtime

mod config;
mod engine;
mod game;
mod grid;

pub use config::{GameConfig, ResolvedOptions};
pub use engine::{Engine, EngineError};
pub use game::Game;
pub use grid::{DotGrid, GridError};
