//! Pieces module - the static piece catalog
//!
//! Each piece kind maps to a fixed boolean grid. Shapes never rotate.

use crate::rng::SimpleRng;
use crate::types::{PieceKind, SPAWN_COLUMN, SPAWN_COLUMN_WIDE, SPAWN_ROW};

/// Immutable rectangular grid of filled/empty cells.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Shape {
    kind: PieceKind,
    rows: &'static [&'static [bool]],
}

impl Shape {
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Number of rows in the bounding box.
    pub fn height(&self) -> i8 {
        self.rows.len() as i8
    }

    /// Number of columns in the bounding box.
    pub fn width(&self) -> i8 {
        self.rows.first().map_or(0, |r| r.len()) as i8
    }

    pub fn rows(&self) -> &'static [&'static [bool]] {
        self.rows
    }

    /// Whether the cell at (`col`, `row`) inside the bounding box is filled.
    pub fn is_filled(&self, col: i8, row: i8) -> bool {
        if col < 0 || row < 0 {
            return false;
        }
        self.rows
            .get(row as usize)
            .and_then(|r| r.get(col as usize))
            .copied()
            .unwrap_or(false)
    }

    /// Filled cells as (col, row) offsets from the origin, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + Clone + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cols)| {
            cols.iter()
                .enumerate()
                .filter(|(_, filled)| **filled)
                .map(move |(col, _)| (col as i8, row as i8))
        })
    }

    /// Spawn origin (col, row). Four-wide shapes shift one column left to stay centered.
    pub fn spawn_origin(&self) -> (i8, i8) {
        if self.width() == 4 {
            (SPAWN_COLUMN_WIDE, SPAWN_ROW)
        } else {
            (SPAWN_COLUMN, SPAWN_ROW)
        }
    }
}

const X: bool = true;
const O: bool = false;

static CATALOG: [Shape; 7] = [
    Shape {
        kind: PieceKind::T,
        rows: &[&[X, X, X], &[O, X, O]],
    },
    Shape {
        kind: PieceKind::O,
        rows: &[&[X, X], &[X, X]],
    },
    Shape {
        kind: PieceKind::I,
        rows: &[&[X, X, X, X]],
    },
    Shape {
        kind: PieceKind::L,
        rows: &[&[X, X, X], &[X, O, O]],
    },
    Shape {
        kind: PieceKind::J,
        rows: &[&[X, X, X], &[O, O, X]],
    },
    Shape {
        kind: PieceKind::S,
        rows: &[&[O, X, X], &[X, X, O]],
    },
    Shape {
        kind: PieceKind::Z,
        rows: &[&[X, X, O], &[O, X, X]],
    },
];

/// Look up the shape for a piece kind.
pub fn get_shape(kind: PieceKind) -> &'static Shape {
    &CATALOG[kind.index()]
}

/// All catalog shapes, in [`PieceKind::ALL`] order.
pub fn all_shapes() -> &'static [Shape] {
    &CATALOG
}

/// Draw one shape uniformly at random. Draws are independent; repeats are allowed.
pub fn pick_random(rng: &mut SimpleRng) -> &'static Shape {
    let i = rng.next_range(CATALOG.len() as u32) as usize;
    &CATALOG[i]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_matches_kind_index() {
        for kind in PieceKind::ALL {
            assert_eq!(get_shape(kind).kind(), kind);
        }
    }

    #[test]
    fn test_every_shape_has_four_cells() {
        for shape in all_shapes() {
            assert_eq!(shape.cells().count(), 4, "{:?}", shape.kind());
        }
    }

    #[test]
    fn test_shape_dimensions() {
        let i = get_shape(PieceKind::I);
        assert_eq!((i.width(), i.height()), (4, 1));

        let o = get_shape(PieceKind::O);
        assert_eq!((o.width(), o.height()), (2, 2));

        let t = get_shape(PieceKind::T);
        assert_eq!((t.width(), t.height()), (3, 2));
    }

    #[test]
    fn test_t_shape_cells() {
        let cells: Vec<_> = get_shape(PieceKind::T).cells().collect();
        assert_eq!(cells, vec![(0, 0), (1, 0), (2, 0), (1, 1)]);
    }

    #[test]
    fn test_is_filled_outside_box_is_false() {
        let s = get_shape(PieceKind::S);
        assert!(!s.is_filled(0, 0));
        assert!(s.is_filled(1, 0));
        assert!(!s.is_filled(-1, 0));
        assert!(!s.is_filled(3, 0));
        assert!(!s.is_filled(0, 2));
    }

    #[test]
    fn test_spawn_origin_centers_wide_piece() {
        assert_eq!(get_shape(PieceKind::I).spawn_origin(), (3, 0));
        for kind in [PieceKind::T, PieceKind::O, PieceKind::L, PieceKind::J, PieceKind::S, PieceKind::Z] {
            assert_eq!(get_shape(kind).spawn_origin(), (4, 0));
        }
    }

    #[test]
    fn test_pick_random_covers_all_kinds() {
        let mut rng = SimpleRng::new(7);
        let mut seen = [0u32; 7];
        for _ in 0..7000 {
            seen[pick_random(&mut rng).kind().index()] += 1;
        }
        // Uniform draws: each kind should land near 1000.
        for count in seen {
            assert!((700..1300).contains(&count), "skewed draw: {:?}", seen);
        }
    }
}
