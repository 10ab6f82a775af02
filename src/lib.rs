//! tui-dots: a tiny terminal game engine.
//!
//! A fixed grid of colored dots, a caption line, a fixed-rate update loop and
//! arrow-key/mouse callbacks. Supply `create`/`update`/`on_key_press`/
//! `on_dot_clicked` in a [`core::GameConfig`], construct a [`core::Engine`],
//! call `run`.
//!
//! ```no_run
//! use tui_dots::core::{Engine, GameConfig};
//! use tui_dots::types::Color;
//!
//! let config = GameConfig::new().update(|game| {
//!     let frame = game.frame_count() as i32;
//!     game.set_dot(frame % 24, 0, Color::Blue).unwrap();
//! });
//! Engine::new(config).run().unwrap();
//! ```

pub mod core;
pub mod input;
pub mod render;
pub mod term;
pub mod types;

pub use crate::core::{Engine, GameConfig};
pub use crate::types::{Color, Direction};
