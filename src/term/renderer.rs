//! TerminalRenderer: draws the dot grid into a real terminal.
//!
//! Dots are colored `●` glyphs on a 2-cell pitch (one cell of dot, one cell
//! of gap, matching the square dot/gap layout), the caption sits below the
//! grid. Every flush redraws every dot; with at most a few hundred dots there
//! is nothing worth diffing.

use std::io::{self, Write};
use std::time::Duration;

use anyhow::Result;

use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyModifiers,
        KeyboardEnhancementFlags, MouseButton, MouseEventKind, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    style::{Color as TermColor, Print, ResetColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::render::{DotLayout, Renderer, SurfaceEvent};
use crate::types::Color;

const DOT_GLYPH: char = '●';

pub struct TerminalRenderer {
    stdout: io::Stdout,
    width: u32,
    height: u32,
}

impl TerminalRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            stdout: io::stdout(),
            width,
            height,
        }
    }

    /// Terminal row of the caption: below the last dot row and its gap row.
    fn text_row(&self) -> u16 {
        (self.height * 2) as u16
    }

    /// True for keys that should stop the game regardless of user hooks.
    fn is_quit_key(key: KeyEvent) -> bool {
        matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
    }
}

impl Renderer for TerminalRenderer {
    fn mount(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.queue(EnableMouseCapture)?;
        // Ask for repeat/release reporting where the terminal supports it;
        // the repeat filter copes either way.
        self.stdout.queue(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))?;
        self.stdout.flush()?;
        Ok(())
    }

    fn unmount(&mut self) -> Result<()> {
        self.stdout.queue(PopKeyboardEnhancementFlags)?;
        self.stdout.queue(DisableMouseCapture)?;
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    fn layout(&self) -> DotLayout {
        // Surface units are character cells: 1-cell dots, 1-cell gaps.
        DotLayout::new(1.0, 1.0)
    }

    fn set_dot(&mut self, x: i32, y: i32, color: Color) -> Result<()> {
        let col = (x * 2) as u16;
        let row = (y * 2) as u16;
        self.stdout.queue(cursor::MoveTo(col, row))?;
        self.stdout.queue(SetForegroundColor(palette(color)))?;
        self.stdout.queue(Print(DOT_GLYPH))?;
        Ok(())
    }

    fn set_text(&mut self, text: &str) -> Result<()> {
        let row = self.text_row();
        // Keep the caption within the grid's footprint (width dots on a
        // 2-cell pitch).
        let max_cols = (self.width * 2).saturating_sub(1) as usize;
        let clipped: String = text.chars().take(max_cols).collect();
        self.stdout.queue(cursor::MoveTo(0, row))?;
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(Print(clipped))?;
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.stdout.flush()?;
        Ok(())
    }

    fn poll_event(&mut self, timeout: Duration) -> Result<Option<SurfaceEvent>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) => {
                if Self::is_quit_key(key) {
                    return Ok(Some(SurfaceEvent::Quit));
                }
                Ok(Some(SurfaceEvent::Key {
                    code: key.code,
                    kind: key.kind,
                }))
            }
            Event::Mouse(mouse) => {
                if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                    // Report the center of the clicked character cell in
                    // surface units.
                    Ok(Some(SurfaceEvent::Pointer {
                        x: mouse.column as f64 + 0.5,
                        y: mouse.row as f64 + 0.5,
                    }))
                } else {
                    Ok(None)
                }
            }
            Event::Resize(_, _) => {
                // Queue a full clear; the next flush redraws everything.
                self.stdout.queue(terminal::Clear(terminal::ClearType::All))?;
                Ok(None)
            }
            _ => Ok(None),
        }
    }
}

/// Terminal color for each dot color.
///
/// RGB values follow the original palette (gainsboro for gray, gold for
/// yellow, CSS green rather than terminal bright green).
fn palette(color: Color) -> TermColor {
    match color {
        Color::Gray => TermColor::Rgb {
            r: 220,
            g: 220,
            b: 220,
        },
        Color::Black => TermColor::Rgb { r: 0, g: 0, b: 0 },
        Color::Red => TermColor::Rgb { r: 255, g: 0, b: 0 },
        Color::Orange => TermColor::Rgb {
            r: 255,
            g: 165,
            b: 0,
        },
        Color::Yellow => TermColor::Rgb {
            r: 255,
            g: 215,
            b: 0,
        },
        Color::Green => TermColor::Rgb { r: 0, g: 128, b: 0 },
        Color::Blue => TermColor::Rgb { r: 0, g: 0, b: 255 },
        Color::Indigo => TermColor::Rgb {
            r: 75,
            g: 0,
            b: 130,
        },
        Color::Violet => TermColor::Rgb {
            r: 238,
            g: 130,
            b: 238,
        },
    }
}
