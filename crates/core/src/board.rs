//! Board module - placed pieces and the falling designation
//!
//! The board does not keep a cell grid. Occupancy is derived by overlaying every
//! placed piece's shape at its origin. Pieces are stored in spawn order and are
//! never removed, so the board only grows.
//! Coordinates: (col, row) where col ranges 0..9 (left to right), row ranges 0..19
//! (top to bottom).

use arrayvec::ArrayVec;

use crate::collision;
use crate::pieces::Shape;
use crate::types::{MoveOutcome, BOARD_HEIGHT, BOARD_WIDTH};

/// A shape anchored at a board origin (top-left of its bounding box).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedPiece {
    shape: &'static Shape,
    pub col: i8,
    pub row: i8,
}

impl PlacedPiece {
    pub fn new(shape: &'static Shape, col: i8, row: i8) -> Self {
        Self { shape, col, row }
    }

    /// Create a piece at its shape's spawn origin.
    pub fn spawn(shape: &'static Shape) -> Self {
        let (col, row) = shape.spawn_origin();
        Self::new(shape, col, row)
    }

    pub fn shape(&self) -> &'static Shape {
        self.shape
    }

    pub fn origin(&self) -> (i8, i8) {
        (self.col, self.row)
    }

    /// Same piece shifted by (`dx`, `dy`).
    pub fn offset(&self, dx: i8, dy: i8) -> Self {
        Self {
            shape: self.shape,
            col: self.col.saturating_add(dx),
            row: self.row.saturating_add(dy),
        }
    }

    /// Filled cells in board coordinates.
    ///
    /// Coordinates saturate at the `i8` range, which is far outside the board.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + Clone + '_ {
        let (col, row) = (self.col, self.row);
        self.shape
            .cells()
            .map(move |(dc, dr)| (col.saturating_add(dc), row.saturating_add(dr)))
    }

    /// Filled cells collected on the stack.
    pub fn cells_array(&self) -> ArrayVec<(i8, i8), 16> {
        self.cells().take(16).collect()
    }

    /// Whether this piece fills board cell (`col`, `row`).
    #[inline]
    pub fn occupies(&self, col: i8, row: i8) -> bool {
        match (col.checked_sub(self.col), row.checked_sub(self.row)) {
            (Some(dc), Some(dr)) => self.shape.is_filled(dc, dr),
            _ => false,
        }
    }
}

/// All placed pieces plus which one is falling.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Board {
    pieces: Vec<PlacedPiece>,
    falling: Option<usize>,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(&self) -> i8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> i8 {
        BOARD_HEIGHT
    }

    /// All pieces in spawn order, the falling one included.
    pub fn pieces(&self) -> &[PlacedPiece] {
        &self.pieces
    }

    pub fn falling(&self) -> Option<&PlacedPiece> {
        self.falling.and_then(|i| self.pieces.get(i))
    }

    pub fn falling_index(&self) -> Option<usize> {
        self.falling
    }

    /// Pieces that are no longer controlled.
    pub fn locked(&self) -> impl Iterator<Item = &PlacedPiece> {
        let falling = self.falling;
        self.pieces
            .iter()
            .enumerate()
            .filter(move |(i, _)| Some(*i) != falling)
            .map(|(_, p)| p)
    }

    /// Append `piece` and make it the falling piece.
    ///
    /// Occupancy is not checked: a spawn over existing cells is accepted as-is.
    pub fn push_falling(&mut self, piece: PlacedPiece) {
        self.pieces.push(piece);
        self.falling = Some(self.pieces.len() - 1);
    }

    /// Drop the falling designation. The piece stays on the board.
    pub fn release_falling(&mut self) -> Option<PlacedPiece> {
        self.falling.take().and_then(|i| self.pieces.get(i).copied())
    }

    /// Collision check for `candidate` standing in for the piece at `index`.
    pub fn is_blocked_as(&self, index: usize, candidate: &PlacedPiece) -> bool {
        let others = self
            .pieces
            .iter()
            .enumerate()
            .filter(move |(i, _)| *i != index)
            .map(|(_, p)| p);
        collision::is_blocked(candidate, others)
    }

    /// Collision check for the piece at `index` where it currently stands.
    pub fn is_blocked(&self, index: usize) -> bool {
        match self.pieces.get(index) {
            Some(piece) => self.is_blocked_as(index, piece),
            None => false,
        }
    }

    /// Shift the falling piece by (`dx`, `dy`) if the new position is clear.
    ///
    /// Rejected moves leave the origin untouched. With no falling piece this is a
    /// rejected no-op.
    pub fn try_move_falling(&mut self, dx: i8, dy: i8) -> MoveOutcome {
        let Some(index) = self.falling else {
            return MoveOutcome::Rejected;
        };
        let Some(current) = self.pieces.get(index).copied() else {
            return MoveOutcome::Rejected;
        };

        let candidate = current.offset(dx, dy);
        if self.is_blocked_as(index, &candidate) {
            return MoveOutcome::Rejected;
        }

        self.pieces[index] = candidate;
        MoveOutcome::Accepted
    }

    /// Whether any placed piece fills (`col`, `row`).
    pub fn is_occupied(&self, col: i8, row: i8) -> bool {
        self.pieces.iter().any(|p| p.occupies(col, row))
    }

    /// Overlay every piece into a row-major occupancy grid.
    ///
    /// Cells outside the board are dropped.
    pub fn occupancy(&self) -> [[bool; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize] {
        let mut grid = [[false; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        for piece in &self.pieces {
            for (col, row) in piece.cells() {
                if (0..BOARD_WIDTH).contains(&col) && (0..BOARD_HEIGHT).contains(&row) {
                    grid[row as usize][col as usize] = true;
                }
            }
        }
        grid
    }

    /// Remove every piece.
    pub fn clear(&mut self) {
        self.pieces.clear();
        self.falling = None;
    }
}
