//! Core game logic module - pure, deterministic, and testable
//!
//! Everything needed to run the game without a terminal: the piece catalog, the
//! board of placed pieces, collision checks, gravity timing and horizontal
//! auto-shift. No UI, input or I/O dependencies.
//!
//! # Module Structure
//!
//! - [`pieces`]: the seven static shapes and uniform random selection
//! - [`board`]: placed pieces in spawn order plus the falling designation
//! - [`collision`]: bounds and overlap checks for a placement
//! - [`gravity`]: wall-clock fall interval
//! - [`das`]: held-key horizontal movement
//! - [`game_state`]: owns everything above and runs one tick per frame
//! - [`clock`], [`config`], [`rng`]: supporting sources
//!
//! # Rules
//!
//! - Pieces never rotate and lines are never cleared; the board only grows.
//! - A piece that cannot fall locks in place and a new one spawns immediately,
//!   even over occupied cells.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use blockfall_core::{GameState, GravityStep};
//! use blockfall_types::HeldKeys;
//!
//! let mut game = GameState::with_seed(12345);
//! game.start(Duration::ZERO);
//!
//! let report = game.tick(Duration::from_secs(1), HeldKeys::NONE);
//! assert_eq!(report.gravity, GravityStep::Fell);
//! assert_eq!(game.falling().map(|p| p.row), Some(1));
//! ```

pub mod board;
pub mod clock;
pub mod collision;
pub mod config;
pub mod das;
pub mod game_state;
pub mod gravity;
pub mod pieces;
pub mod rng;

pub use blockfall_types as types;

pub use board::{Board, PlacedPiece};
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use collision::{is_blocked, is_out_of_bounds};
pub use config::GameConfig;
pub use das::DasController;
pub use game_state::{GameState, TickReport};
pub use gravity::{GravityStep, GravityTimer};
pub use pieces::{all_shapes, get_shape, pick_random, Shape};
pub use rng::SimpleRng;
