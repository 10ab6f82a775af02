//! Terminal rendering backend (crossterm)

mod renderer;

pub use renderer::TerminalRenderer;
