//! Game configuration and its one-shot resolution
//!
//! All options are optional; resolution applies defaults and the precedence
//! rule explicit > legacy > default exactly once, at engine construction.
//! Runtime code only ever sees [`ResolvedOptions`].

use std::time::Duration;

use log::warn;

use crate::core::game::Game;
use crate::types::{
    Color, Direction, DEFAULT_FRAME_RATE, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH,
};

pub type CreateFn = Box<dyn FnMut(&mut Game)>;
pub type UpdateFn = Box<dyn FnMut(&mut Game)>;
pub type KeyPressFn = Box<dyn FnMut(Direction)>;
pub type DotClickedFn = Box<dyn FnMut(i32, i32)>;

/// Configuration passed when constructing an engine.
///
/// ```no_run
/// use tui_dots::core::{Engine, GameConfig};
/// use tui_dots::types::Color;
///
/// let config = GameConfig::new()
///     .frame_rate(5.0)
///     .update(|game| {
///         game.set_dot(0, 0, Color::Red).unwrap();
///     });
/// let mut engine = Engine::new(config);
/// engine.run().unwrap();
/// ```
#[derive(Default)]
pub struct GameConfig {
    pub(crate) create: Option<CreateFn>,
    pub(crate) update: Option<UpdateFn>,
    pub(crate) on_key_press: Option<KeyPressFn>,
    pub(crate) on_dot_clicked: Option<DotClickedFn>,
    pub(crate) container_id: Option<String>,
    pub(crate) frame_rate: Option<f64>,
    pub(crate) default_dot_color: Option<Color>,
    pub(crate) grid_width: Option<u32>,
    pub(crate) grid_height: Option<u32>,
    pub(crate) legacy_grid_width: Option<u32>,
    pub(crate) legacy_grid_height: Option<u32>,
    pub(crate) clear_grid: Option<bool>,
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called once, just before the game starts running. Use it to
    /// initialise game state.
    pub fn create(mut self, f: impl FnMut(&mut Game) + 'static) -> Self {
        self.create = Some(Box::new(f));
        self
    }

    /// Called every tick while the game runs; the main place to define game
    /// behavior.
    pub fn update(mut self, f: impl FnMut(&mut Game) + 'static) -> Self {
        self.update = Some(Box::new(f));
        self
    }

    /// Called when the player presses one of the arrow keys.
    pub fn on_key_press(mut self, f: impl FnMut(Direction) + 'static) -> Self {
        self.on_key_press = Some(Box::new(f));
        self
    }

    /// Called when the player clicks on a dot.
    pub fn on_dot_clicked(mut self, f: impl FnMut(i32, i32) + 'static) -> Self {
        self.on_dot_clicked = Some(Box::new(f));
        self
    }

    /// Mount-point hint for backends that attach to a host container.
    /// The terminal backend has no container and ignores it.
    pub fn container_id(mut self, id: impl Into<String>) -> Self {
        self.container_id = Some(id.into());
        self
    }

    /// Ticks per second. Defaults to 24; non-positive values are treated as
    /// unset.
    pub fn frame_rate(mut self, rate: f64) -> Self {
        self.frame_rate = Some(rate);
        self
    }

    /// The color cells are initialised to and cleared to. Defaults to Gray.
    pub fn default_dot_color(mut self, color: Color) -> Self {
        self.default_dot_color = Some(color);
        self
    }

    /// Grid width in dots. Defaults to 24; 0 is treated as unset.
    pub fn grid_width(mut self, width: u32) -> Self {
        self.grid_width = Some(width);
        self
    }

    /// Grid height in dots. Defaults to 24; 0 is treated as unset.
    pub fn grid_height(mut self, height: u32) -> Self {
        self.grid_height = Some(height);
        self
    }

    /// Predecessor of [`GameConfig::grid_width`], kept for source
    /// compatibility with old games. An explicit `grid_width` wins over it.
    pub fn legacy_grid_width(mut self, width: u32) -> Self {
        self.legacy_grid_width = Some(width);
        self
    }

    /// Predecessor of [`GameConfig::grid_height`]. An explicit `grid_height`
    /// wins over it.
    pub fn legacy_grid_height(mut self, height: u32) -> Self {
        self.legacy_grid_height = Some(height);
        self
    }

    /// Whether the grid is reset to the default color at the start of every
    /// tick. Defaults to true.
    pub fn clear_grid(mut self, clear: bool) -> Self {
        self.clear_grid = Some(clear);
        self
    }

    /// Split the config into resolved options and the user hooks.
    pub(crate) fn resolve(self) -> (ResolvedOptions, Hooks) {
        let options = ResolvedOptions {
            width: resolve_dimension(
                "grid_width",
                self.grid_width,
                self.legacy_grid_width,
                DEFAULT_GRID_WIDTH,
            ),
            height: resolve_dimension(
                "grid_height",
                self.grid_height,
                self.legacy_grid_height,
                DEFAULT_GRID_HEIGHT,
            ),
            frame_rate: resolve_frame_rate(self.frame_rate),
            default_color: self.default_dot_color.unwrap_or(Color::Gray),
            clear_grid: self.clear_grid.unwrap_or(true),
            container_id: self.container_id,
        };
        let hooks = Hooks {
            create: self.create,
            update: self.update,
            on_key_press: self.on_key_press,
            on_dot_clicked: self.on_dot_clicked,
        };
        (options, hooks)
    }
}

fn resolve_dimension(name: &str, explicit: Option<u32>, legacy: Option<u32>, default: u32) -> u32 {
    if legacy.is_some() {
        warn!("legacy_{name} is deprecated; use {name}");
    }
    if let Some(value) = explicit {
        if value > 0 {
            return value;
        }
        warn!("{name} must be positive, ignoring {value}");
    }
    if let Some(value) = legacy {
        if value > 0 {
            return value;
        }
        warn!("legacy_{name} must be positive, ignoring {value}");
    }
    default
}

fn resolve_frame_rate(rate: Option<f64>) -> f64 {
    match rate {
        Some(rate) if rate > 0.0 => rate,
        Some(rate) => {
            warn!("frame_rate must be positive, ignoring {rate}");
            DEFAULT_FRAME_RATE
        }
        None => DEFAULT_FRAME_RATE,
    }
}

/// Options after defaulting and precedence. Immutable for the life of the
/// engine.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedOptions {
    pub width: u32,
    pub height: u32,
    pub frame_rate: f64,
    pub default_color: Color,
    pub clear_grid: bool,
    pub container_id: Option<String>,
}

impl ResolvedOptions {
    /// Time between ticks (1000 / frame_rate milliseconds)
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.frame_rate)
    }
}

/// The user callbacks, separated from game state so the engine can hand
/// `&mut Game` to a hook it holds by a disjoint borrow.
#[derive(Default)]
pub(crate) struct Hooks {
    pub create: Option<CreateFn>,
    pub update: Option<UpdateFn>,
    pub on_key_press: Option<KeyPressFn>,
    pub on_dot_clicked: Option<DotClickedFn>,
}
