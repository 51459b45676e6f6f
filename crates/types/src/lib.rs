//! Core types module - shared data structures and constants
//!
//! Pure data with no dependencies, shared by the core logic, the input layer and the
//! terminal renderer.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Spawn origin**: column 4, row 0 (column 3 for the 4-wide I piece)
//!
//! # Timing Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame interval (~60 FPS) |
//! | `DEFAULT_FALL_SPEED` | 1.0 | Gravity in cells per second |
//! | `DEFAULT_DAS_DELAY` | 16 | Auto-shift delay in ticks (not gated) |
//! | `DEFAULT_DAS_SPEED` | 6 | Auto-shift repeat in ticks (not gated) |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{HeldKeys, HorizontalDirection, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//!
//! let keys = HeldKeys { left: true, right: true };
//! assert_eq!(keys.direction(), HorizontalDirection::Left);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: i8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: i8 = 20;

/// Spawn origin column for pieces up to 3 cells wide
pub const SPAWN_COLUMN: i8 = 4;

/// Spawn origin column for the 4-wide I piece
pub const SPAWN_COLUMN_WIDE: i8 = 3;

/// Spawn origin row
pub const SPAWN_ROW: i8 = 0;

/// Frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity in cells per second
pub const DEFAULT_FALL_SPEED: f32 = 1.0;

/// Auto-shift initial delay in ticks.
pub const DEFAULT_DAS_DELAY: u32 = 16;

/// Auto-shift repeat interval in ticks.
pub const DEFAULT_DAS_SPEED: u32 = 6;

/// The seven piece kinds, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    T,
    O,
    I,
    L,
    J,
    S,
    Z,
}

impl PieceKind {
    /// All kinds, in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::T,
        PieceKind::O,
        PieceKind::I,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("z"), Some(PieceKind::Z));
    /// assert_eq!(PieceKind::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "t" => Some(PieceKind::T),
            "o" => Some(PieceKind::O),
            "i" => Some(PieceKind::I),
            "l" => Some(PieceKind::L),
            "j" => Some(PieceKind::J),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::T => "t",
            PieceKind::O => "o",
            PieceKind::I => "i",
            PieceKind::L => "l",
            PieceKind::J => "j",
            PieceKind::S => "s",
            PieceKind::Z => "z",
        }
    }

    /// Position in [`PieceKind::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Direction of a held horizontal key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalDirection {
    Left,
    Right,
    #[default]
    None,
}

impl HorizontalDirection {
    /// Column offset for one step in this direction.
    pub fn dx(&self) -> i8 {
        match self {
            HorizontalDirection::Left => -1,
            HorizontalDirection::Right => 1,
            HorizontalDirection::None => 0,
        }
    }
}

/// Held state of the two movement keys for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
}

impl HeldKeys {
    pub const NONE: HeldKeys = HeldKeys {
        left: false,
        right: false,
    };

    /// Resolve to a single direction. Left wins when both keys are down.
    pub fn direction(&self) -> HorizontalDirection {
        if self.left {
            HorizontalDirection::Left
        } else if self.right {
            HorizontalDirection::Right
        } else {
            HorizontalDirection::None
        }
    }
}

/// Result of a move request against the collision check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Accepted,
    Rejected,
}

impl MoveOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveOutcome::Accepted)
    }
}
