//! Engine - the game runtime
//!
//! Owns the game state, the user hooks, and (once running) the renderer.
//! Construction resolves configuration and allocates the grid but touches no
//! environment; the renderer is mounted by `run`, so everything up to the
//! loop can be driven headlessly.

use std::time::Instant;

use anyhow::Result;
use log::debug;
use thiserror::Error;

use crate::core::config::{GameConfig, Hooks, ResolvedOptions};
use crate::core::game::Game;
use crate::core::grid::{DotGrid, GridError};
use crate::input::{hit_test, map_key, RepeatFilter};
use crate::render::{Renderer, SurfaceEvent};
use crate::term::TerminalRenderer;
use crate::types::Color;

/// Violations of the engine's own sequencing, as opposed to user errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A flush was attempted before `run`/`attach` mounted a renderer.
    /// Unreachable through the public run sequence; kept as a defensive
    /// check.
    #[error("render flush attempted before a renderer was attached")]
    RendererUnavailable,
}

/// The game runtime.
///
/// Lifecycle: `Engine::new` (constructed) → `run` (running, ticking at the
/// configured frame rate) → `end` observed at a tick boundary (ended,
/// terminal). A second `run` call is a no-op.
pub struct Engine {
    game: Game,
    hooks: Hooks,
    options: ResolvedOptions,
    renderer: Option<Box<dyn Renderer>>,
    keys: RepeatFilter,
}

impl Engine {
    /// Resolve the configuration and allocate the grid.
    ///
    /// No renderer is created here and no environment is touched.
    pub fn new(config: GameConfig) -> Self {
        let (options, hooks) = config.resolve();
        let grid = DotGrid::new(options.width, options.height, options.default_color);
        Self {
            game: Game::new(grid, options.default_color),
            hooks,
            options,
            renderer: None,
            keys: RepeatFilter::new(),
        }
    }

    /// The resolved, immutable options
    pub fn options(&self) -> &ResolvedOptions {
        &self.options
    }

    /// The game state handed to callbacks
    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    /// Returns the color of a dot. Same contract as [`Game::get_dot`].
    pub fn get_dot(&self, x: i32, y: i32) -> Result<Color, GridError> {
        self.game.get_dot(x, y)
    }

    /// Sets the color of a dot. Same contract as [`Game::set_dot`].
    pub fn set_dot(&mut self, x: i32, y: i32, color: Color) -> Result<(), GridError> {
        self.game.set_dot(x, y, color)
    }

    /// Sets the caption below the grid.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.game.set_text(text);
    }

    /// Ticks completed so far; 0 before the loop starts.
    pub fn frame_count(&self) -> u64 {
        self.game.frame_count()
    }

    /// Stop the loop at the next tick boundary.
    pub fn end(&mut self) {
        self.game.end();
    }

    /// Mount a renderer without starting the loop.
    ///
    /// Returns false (and drops the candidate) if one is already attached;
    /// an engine instance mounts at most one renderer in its lifetime. Used
    /// directly by headless callers that drive [`Engine::tick`] themselves.
    pub fn attach(&mut self, mut renderer: Box<dyn Renderer>) -> Result<bool> {
        if self.renderer.is_some() {
            debug!("renderer already attached, ignoring");
            return Ok(false);
        }
        renderer.mount()?;
        self.renderer = Some(renderer);
        Ok(true)
    }

    /// Start the game on the terminal backend.
    ///
    /// A no-op when a renderer is already attached (a second `run` has the
    /// same observable effect as the first). The terminal is restored before
    /// returning, also on the error path.
    pub fn run(&mut self) -> Result<()> {
        if self.renderer.is_some() {
            debug!("run called with a renderer already attached, ignoring");
            return Ok(());
        }
        let renderer = TerminalRenderer::new(self.options.width, self.options.height);
        self.run_with(Box::new(renderer))
    }

    /// Start the game on the given renderer (headless runs, tests).
    pub fn run_with(&mut self, renderer: Box<dyn Renderer>) -> Result<()> {
        if !self.attach(renderer)? {
            return Ok(());
        }
        let result = self.run_loop();
        if let Some(renderer) = self.renderer.as_mut() {
            // Restore the host surface even when the loop failed.
            let _ = renderer.unmount();
        }
        result
    }

    fn run_loop(&mut self) -> Result<()> {
        // `create` runs exactly once, synchronously, before the first tick.
        if let Some(mut create) = self.hooks.create.take() {
            create(&mut self.game);
        }
        // The post-create state is visible before the first timed tick.
        self.flush()?;

        let interval = self.options.frame_interval();
        let mut last_tick = Instant::now();
        while !self.game.ended() {
            let timeout = interval.saturating_sub(last_tick.elapsed());
            let event = self
                .renderer
                .as_deref_mut()
                .ok_or(EngineError::RendererUnavailable)?
                .poll_event(timeout)?;
            if let Some(event) = event {
                self.dispatch(event);
            }

            let elapsed = last_tick.elapsed();
            if elapsed >= interval {
                // Carry the leftover so the average rate holds, but never
                // more than one interval to avoid a catch-up spiral.
                let carry = (elapsed - interval).min(interval);
                last_tick = Instant::now() - carry;
                self.tick()?;
            }
        }
        debug!("game ended after {} frames", self.game.frame_count());
        Ok(())
    }

    /// One update cycle.
    ///
    /// Cancelled (and idempotently so) once the game has ended. Otherwise:
    /// advance the frame counter, auto-clear the grid if configured, run the
    /// user `update`, flush. `end` called from inside `update` does not cut
    /// the cycle short, so mutations after it still reach the flush.
    pub fn tick(&mut self) -> Result<()> {
        if self.game.ended() {
            return Ok(());
        }
        self.game.advance_frame();
        if self.options.clear_grid {
            self.game.clear();
        }
        if let Some(update) = self.hooks.update.as_mut() {
            update(&mut self.game);
        }
        self.flush()
    }

    /// Push the whole grid (row-major) and the caption to the renderer.
    ///
    /// Unconditional, no dirty tracking: at most 576 dots on the default
    /// grid.
    pub fn flush(&mut self) -> Result<()> {
        let renderer = self
            .renderer
            .as_deref_mut()
            .ok_or(EngineError::RendererUnavailable)?;
        for (x, y, color) in self.game.grid().iter() {
            renderer.set_dot(x, y, color)?;
        }
        renderer.set_text(self.game.text())?;
        renderer.present()
    }

    /// Route one surface event to the user hooks.
    ///
    /// Keys go through repeat suppression and the arrow-key map; pointer
    /// presses go through the circular-dot hit-test. Events land between
    /// ticks, never during one (single-threaded loop).
    pub fn dispatch(&mut self, event: SurfaceEvent) {
        match event {
            SurfaceEvent::Key { code, kind } => {
                let Some(code) = self.keys.filter(code, kind) else {
                    return;
                };
                let Some(direction) = map_key(code) else {
                    return;
                };
                if let Some(on_key_press) = self.hooks.on_key_press.as_mut() {
                    on_key_press(direction);
                }
            }
            SurfaceEvent::Pointer { x, y } => {
                let Some(on_dot_clicked) = self.hooks.on_dot_clicked.as_mut() else {
                    return;
                };
                let layout = match self.renderer.as_ref() {
                    Some(renderer) => renderer.layout(),
                    None => Default::default(),
                };
                if let Some((gx, gy)) =
                    hit_test(x, y, layout, self.options.width, self.options.height)
                {
                    on_dot_clicked(gx, gy);
                }
            }
            SurfaceEvent::Quit => self.game.end(),
        }
    }
}
