//! Renderer seam between the engine and concrete backends
//!
//! The engine pushes full frames (every dot, then the caption, then
//! `present`) and pulls backend events through `poll_event`. Backends stay
//! dumb: input interpretation (key mapping, repeat suppression, click
//! hit-testing) lives in [`crate::input`], not here.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEventKind};

use crate::types::{Color, DEFAULT_DOT_SIZE, DEFAULT_GAP_SIZE};

/// Dot geometry of a render surface, in the surface's own units.
///
/// The pitch (dot size + gap) is what click hit-testing divides by.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotLayout {
    pub dot_size: f64,
    pub gap_size: f64,
}

impl DotLayout {
    pub fn new(dot_size: f64, gap_size: f64) -> Self {
        Self { dot_size, gap_size }
    }

    /// Distance between the top-left corners of adjacent cells
    pub fn pitch(&self) -> f64 {
        self.dot_size + self.gap_size
    }

    /// Radius of one dot
    pub fn radius(&self) -> f64 {
        self.dot_size / 2.0
    }
}

impl Default for DotLayout {
    fn default() -> Self {
        Self::new(DEFAULT_DOT_SIZE, DEFAULT_GAP_SIZE)
    }
}

/// Raw events a backend hands to the engine, before input dispatch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceEvent {
    /// A keyboard event, unfiltered; repeat suppression happens in dispatch.
    Key { code: KeyCode, kind: KeyEventKind },
    /// Pointer press at surface-local coordinates.
    Pointer { x: f64, y: f64 },
    /// The backend wants the game to stop (quit key, closed surface).
    Quit,
}

/// A render surface plus its event source.
pub trait Renderer {
    /// Take over the mount point (enter the terminal session, attach to a
    /// host container). Called once, when the engine attaches the renderer.
    fn mount(&mut self) -> Result<()> {
        Ok(())
    }

    /// Give the mount point back. Called when the run loop ends, also on the
    /// error path.
    fn unmount(&mut self) -> Result<()> {
        Ok(())
    }

    /// Dot geometry of this surface
    fn layout(&self) -> DotLayout;

    /// Draw one dot. Called for every cell on every flush.
    fn set_dot(&mut self, x: i32, y: i32, color: Color) -> Result<()>;

    /// Draw the caption below the grid.
    fn set_text(&mut self, text: &str) -> Result<()>;

    /// Make the frame visible. Called once per flush, after all dots and the
    /// caption.
    fn present(&mut self) -> Result<()>;

    /// Wait up to `timeout` for the next backend event.
    fn poll_event(&mut self, timeout: Duration) -> Result<Option<SurfaceEvent>>;
}

/// One flushed frame as seen by a [`MemoryRenderer`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    /// Dots in the order they were pushed (row-major)
    pub dots: Vec<(i32, i32, Color)>,
    pub text: String,
}

impl Frame {
    /// The last color pushed for (x, y) in this frame, if any.
    pub fn dot(&self, x: i32, y: i32) -> Option<Color> {
        self.dots
            .iter()
            .rev()
            .find(|&&(dx, dy, _)| dx == x && dy == y)
            .map(|&(_, _, color)| color)
    }
}

/// Everything a [`MemoryRenderer`] has been asked to draw.
#[derive(Debug, Default)]
pub struct RenderLog {
    /// Completed frames, one per `present` call
    pub frames: Vec<Frame>,
    current: Frame,
}

impl RenderLog {
    /// The most recently presented frame
    pub fn last_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }
}

/// Headless renderer: records flushes, replays scripted events.
///
/// The engine takes ownership of its renderer, so inspection goes through a
/// shared [`RenderLog`] handle obtained from [`MemoryRenderer::log`] before
/// the renderer is handed over. Single-threaded by design, like the engine.
pub struct MemoryRenderer {
    layout: DotLayout,
    log: Rc<RefCell<RenderLog>>,
    events: VecDeque<SurfaceEvent>,
}

impl MemoryRenderer {
    pub fn new() -> Self {
        Self {
            layout: DotLayout::default(),
            log: Rc::new(RefCell::new(RenderLog::default())),
            events: VecDeque::new(),
        }
    }

    pub fn with_layout(mut self, layout: DotLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Shared handle to the render log; clone-cheap, survives the renderer
    /// being moved into the engine.
    pub fn log(&self) -> Rc<RefCell<RenderLog>> {
        Rc::clone(&self.log)
    }

    /// Queue an event for `poll_event` to return.
    pub fn push_event(&mut self, event: SurfaceEvent) {
        self.events.push_back(event);
    }
}

impl Default for MemoryRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for MemoryRenderer {
    fn layout(&self) -> DotLayout {
        self.layout
    }

    fn set_dot(&mut self, x: i32, y: i32, color: Color) -> Result<()> {
        self.log.borrow_mut().current.dots.push((x, y, color));
        Ok(())
    }

    fn set_text(&mut self, text: &str) -> Result<()> {
        self.log.borrow_mut().current.text = text.to_string();
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        let mut log = self.log.borrow_mut();
        let frame = std::mem::take(&mut log.current);
        log.frames.push(frame);
        Ok(())
    }

    fn poll_event(&mut self, _timeout: Duration) -> Result<Option<SurfaceEvent>> {
        Ok(self.events.pop_front())
    }
}
