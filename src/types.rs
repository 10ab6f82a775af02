//! Core types shared across the engine
//! This module contains pure data types with no external dependencies

/// Default grid dimensions (dots)
pub const DEFAULT_GRID_WIDTH: u32 = 24;
pub const DEFAULT_GRID_HEIGHT: u32 = 24;

/// Default update rate (ticks per second)
pub const DEFAULT_FRAME_RATE: f64 = 24.0;

/// Default dot geometry in surface units (pixels for pixel backends)
pub const DEFAULT_DOT_SIZE: f64 = 16.0;
pub const DEFAULT_GAP_SIZE: f64 = 8.0;

/// Dot colors
///
/// A closed set: every cell of the grid holds exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Gray,
    Black,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Indigo,
    Violet,
}

impl Color {
    /// All colors, in declaration order
    pub const ALL: [Color; 9] = [
        Color::Gray,
        Color::Black,
        Color::Red,
        Color::Orange,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Indigo,
        Color::Violet,
    ];

    /// Parse a color from its wire name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "GRAY" => Some(Color::Gray),
            "BLACK" => Some(Color::Black),
            "RED" => Some(Color::Red),
            "ORANGE" => Some(Color::Orange),
            "YELLOW" => Some(Color::Yellow),
            "GREEN" => Some(Color::Green),
            "BLUE" => Some(Color::Blue),
            "INDIGO" => Some(Color::Indigo),
            "VIOLET" => Some(Color::Violet),
            _ => None,
        }
    }

    /// Convert to the wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Gray => "GRAY",
            Color::Black => "BLACK",
            Color::Red => "RED",
            Color::Orange => "ORANGE",
            Color::Yellow => "YELLOW",
            Color::Green => "GREEN",
            Color::Blue => "BLUE",
            Color::Indigo => "INDIGO",
            Color::Violet => "VIOLET",
        }
    }
}

/// Logical input directions
///
/// The only key-input vocabulary the engine dispatches; everything that is
/// not an arrow key is dropped before it reaches user code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All directions, in declaration order
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Parse a direction from its wire name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "LEFT" => Some(Direction::Left),
            "RIGHT" => Some(Direction::Right),
            "UP" => Some(Direction::Up),
            "DOWN" => Some(Direction::Down),
            _ => None,
        }
    }

    /// Convert to the wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
            Direction::Up => "UP",
            Direction::Down => "DOWN",
        }
    }
}
