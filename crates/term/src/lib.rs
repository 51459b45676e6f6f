//! Terminal "game renderer" module.
//!
//! Renders the board into a simple framebuffer that is then flushed to the
//! terminal with crossterm. No widget toolkit is involved.
//!
//! Goals:
//! - Keep `core` free of any drawing code
//! - Give precise control over aspect ratio (2 chars wide per cell by default)
//! - Only rewrite what changed between frames

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Offset, ViewConfig, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
