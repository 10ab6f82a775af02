//! Game - the state handle user callbacks receive
//!
//! `create` and `update` get `&mut Game`: the dot grid, the caption, the
//! frame counter and the ended flag, and nothing else. Keeping the renderer
//! out of reach here means game logic can be driven and inspected headlessly.

use crate::core::grid::{DotGrid, GridError};
use crate::types::Color;

/// Mutable game state, exclusively owned by the engine and handed to user
/// callbacks one at a time.
#[derive(Debug)]
pub struct Game {
    grid: DotGrid,
    default_color: Color,
    text: String,
    frame_count: u64,
    ended: bool,
}

impl Game {
    pub(crate) fn new(grid: DotGrid, default_color: Color) -> Self {
        Self {
            grid,
            default_color,
            text: String::new(),
            frame_count: 0,
            ended: false,
        }
    }

    /// Grid width in dots
    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    /// Grid height in dots
    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    /// Returns the color of a dot.
    pub fn get_dot(&self, x: i32, y: i32) -> Result<Color, GridError> {
        self.grid.get(x, y)
    }

    /// Sets the color of a dot.
    pub fn set_dot(&mut self, x: i32, y: i32, color: Color) -> Result<(), GridError> {
        self.grid.set(x, y, color)
    }

    /// Sets the line of text shown below the grid.
    ///
    /// Commonly used for instructions or the player's score. Takes effect at
    /// the next flush; there is no immediate render.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// The current caption
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of ticks completed since the game started.
    ///
    /// 0 before the loop starts. The higher the frame rate, the faster this
    /// grows; useful for ramping difficulty over time.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Stop the game loop.
    ///
    /// The current update cycle finishes normally and its flush still
    /// happens; the next scheduled tick observes the flag and cancels. The
    /// transition is one-way and calling `end` again is a no-op.
    pub fn end(&mut self) {
        self.ended = true;
    }

    /// Whether `end` has been called
    pub fn ended(&self) -> bool {
        self.ended
    }

    pub(crate) fn advance_frame(&mut self) {
        self.frame_count += 1;
    }

    /// Reset every dot to the configured default color.
    pub(crate) fn clear(&mut self) {
        self.grid.clear_all(self.default_color);
    }

    pub(crate) fn grid(&self) -> &DotGrid {
        &self.grid
    }
}
