//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events to the two movement directions and tracks which
//! are held each frame, including on terminals without key-release events.

pub mod handler;
pub mod map;

pub use blockfall_types as types;

pub use handler::InputHandler;
pub use map::{direction_for_key, should_quit};
