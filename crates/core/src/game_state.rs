//! Game state module - owns the board, RNG and timers and drives one tick per frame.
//!
//! Tick order is fixed: gravity first, then horizontal auto-shift. Both go through
//! the same collision-checked move on the falling piece.

use std::time::Duration;

use tracing::{debug, trace};

use crate::board::{Board, PlacedPiece};
use crate::config::GameConfig;
use crate::das::DasController;
use crate::gravity::{GravityStep, GravityTimer};
use crate::pieces::pick_random;
use crate::rng::SimpleRng;
use crate::types::{HeldKeys, MoveOutcome};

/// What happened during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    pub gravity: GravityStep,
    /// Result of the horizontal move request, if a direction was held.
    pub shift: Option<MoveOutcome>,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    rng: SimpleRng,
    gravity: GravityTimer,
    das: DasController,
    started: bool,
    /// Number of pieces spawned so far.
    spawn_count: u32,
}

impl GameState {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            board: Board::new(),
            rng: SimpleRng::new(config.seed),
            gravity: GravityTimer::new(config.fall_speed),
            das: DasController::with_config(config.das_delay, config.das_speed),
            started: false,
            spawn_count: 0,
        }
    }

    /// Default configuration with a fixed seed.
    pub fn with_seed(seed: u32) -> Self {
        Self::new(&GameConfig::with_seed(seed))
    }

    /// Spawn the first piece and start the gravity interval at `now`.
    pub fn start(&mut self, now: Duration) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn();
        self.gravity.reset(now);
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for setting up scenarios.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn falling(&self) -> Option<&PlacedPiece> {
        self.board.falling()
    }

    pub fn gravity(&self) -> &GravityTimer {
        &self.gravity
    }

    pub fn das(&self) -> &DasController {
        &self.das
    }

    pub fn spawn_count(&self) -> u32 {
        self.spawn_count
    }

    /// Add a random piece at its spawn origin and make it the falling piece.
    ///
    /// Does not check whether the spawn cells are free.
    pub fn spawn(&mut self) {
        let piece = PlacedPiece::spawn(pick_random(&mut self.rng));
        debug!(
            kind = piece.shape().kind().as_str(),
            col = piece.col,
            row = piece.row,
            "spawn"
        );
        self.board.push_falling(piece);
        self.spawn_count += 1;
    }

    /// Move the falling piece by (`dx`, `dy`) if the target is clear.
    pub fn try_move(&mut self, dx: i8, dy: i8) -> MoveOutcome {
        let outcome = self.board.try_move_falling(dx, dy);
        if outcome.is_accepted() {
            trace!(dx, dy, "move accepted");
        }
        outcome
    }

    /// Lock the falling piece where it stands and spawn the next one.
    pub fn lock_and_respawn(&mut self) {
        if let Some(piece) = self.board.release_falling() {
            debug!(
                kind = piece.shape().kind().as_str(),
                col = piece.col,
                row = piece.row,
                pieces = self.board.pieces().len(),
                "lock"
            );
        }
        self.spawn();
    }

    /// Gravity check at `now`: fall one row when due, locking if the fall is blocked.
    pub fn apply_gravity(&mut self, now: Duration) -> GravityStep {
        if self.board.falling().is_none() || !self.gravity.poll(now) {
            return GravityStep::Waiting;
        }
        match self.try_move(0, 1) {
            MoveOutcome::Accepted => GravityStep::Fell,
            MoveOutcome::Rejected => {
                self.lock_and_respawn();
                GravityStep::Locked
            }
        }
    }

    /// Auto-shift check for this frame's held keys.
    pub fn apply_shift(&mut self, keys: HeldKeys) -> Option<MoveOutcome> {
        let dx = self.das.update(keys)?;
        Some(self.try_move(dx, 0))
    }

    /// Main game tick: gravity, then auto-shift.
    ///
    /// Does nothing before [`GameState::start`].
    pub fn tick(&mut self, now: Duration, keys: HeldKeys) -> TickReport {
        if !self.started {
            return TickReport::default();
        }
        let gravity = self.apply_gravity(now);
        let shift = self.apply_shift(keys);
        TickReport { gravity, shift }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}
