//! Collision module - placement legality checks
//!
//! A placement is blocked when any filled cell leaves the board (bottom, left or
//! right edge) or lands on a filled cell of another placed piece. The top edge is
//! not checked: pieces only ever move down or sideways from a legal spawn.

use crate::board::PlacedPiece;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Whether a single board cell is outside the playfield.
///
/// Rows above the board (`row < 0`) are not considered out of bounds.
#[inline]
pub fn is_out_of_bounds(col: i8, row: i8) -> bool {
    row >= BOARD_HEIGHT || col < 0 || col >= BOARD_WIDTH
}

/// Check `piece` against the board edges and every piece in `others`.
///
/// `others` must not contain `piece` itself. Returns on the first blocking cell.
pub fn is_blocked<'a, I>(piece: &PlacedPiece, others: I) -> bool
where
    I: IntoIterator<Item = &'a PlacedPiece>,
{
    let cells = piece.cells_array();
    if cells.iter().any(|&(col, row)| is_out_of_bounds(col, row)) {
        return true;
    }
    others
        .into_iter()
        .any(|other| cells.iter().any(|&(col, row)| other.occupies(col, row)))
}
