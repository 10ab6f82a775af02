//! Input dispatch: raw surface events to logical callbacks
//!
//! Three pure pieces the engine's run loop wires together: arrow-key mapping,
//! auto-repeat suppression, and click hit-testing.

mod filter;
mod hit;
mod map;

pub use filter::RepeatFilter;
pub use hit::hit_test;
pub use map::map_key;
