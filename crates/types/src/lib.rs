//! Core types module - shared data structures and constants
//!
//! Everything here is plain data with no dependencies, so the same definitions
//! are used by the simulation, the terminal view and the input mapping.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Spawn position**: horizontally centred on the shape width, `y = 0`
//!
//! # Timing
//!
//! Gravity fires once the accumulated frame time exceeds the drop interval:
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 900ms |
//! | 2 | 830ms |
//! | 5 | 620ms |
//! | 10 | 270ms |
//! | 13+ | 100ms (floor) |
//!
//! # Scoring
//!
//! | Rows cleared | Base points (x level) |
//! |--------------|-----------------------|
//! | 1 | 100 |
//! | 2 | 300 |
//! | 3 | 500 |
//! | 4 | 800 |
//!
//! Soft drop awards 1 point per row, hard drop 2 points per row.
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{PieceKind, COLS, ROWS};
//!
//! assert_eq!(PieceKind::from_code(3), Some(PieceKind::T));
//! assert_eq!(PieceKind::T.letter(), 'T');
//! assert_eq!((COLS, ROWS), (10, 20));
//! ```

/// Board width in cells (10 columns)
pub const COLS: u8 = 10;

/// Board height in cells (20 rows)
pub const ROWS: u8 = 20;

/// Default frame period of the terminal loop in milliseconds (~60 FPS)
pub const FRAME_MS: u32 = 16;

/// Drop interval at level 1
pub const BASE_DROP_MS: u32 = 900;

/// Drop interval reduction per level above 1
pub const DROP_STEP_MS: u32 = 70;

/// Drop interval floor
pub const MIN_DROP_MS: u32 = 100;

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Level at game start
pub const START_LEVEL: u32 = 1;

/// Line clear rewards, indexed by rows cleared in one lock (multiplied by level)
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Points per successful soft drop step
pub const SOFT_DROP_POINTS: u32 = 1;

/// Points per cell traversed by a hard drop
pub const HARD_DROP_POINTS: u32 = 2;

/// Horizontal offsets tried, in order, when a rotation collides.
///
/// All offsets keep the piece's vertical position.
pub const KICK_OFFSETS: [i8; 5] = [0, -1, 1, -2, 2];

/// The seven tetromino piece kinds
///
/// Each kind owns a canonical shape and a colour in the view layer:
/// - **I**: horizontal bar
/// - **O**: 2x2 square
/// - **T**: T-shaped
/// - **S** / **Z**: skew pieces
/// - **J** / **L**: hooks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in canonical order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Uppercase letter used in panels and logs
    pub fn letter(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
        }
    }

    /// Compact grid code: 1..=7 in canonical order (0 is reserved for empty)
    pub fn code(&self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::O => 2,
            PieceKind::T => 3,
            PieceKind::S => 4,
            PieceKind::Z => 5,
            PieceKind::J => 6,
            PieceKind::L => 7,
        }
    }

    /// Inverse of [`PieceKind::code`]
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1..=7 => Some(Self::ALL[(code - 1) as usize]),
            _ => None,
        }
    }
}

/// Discrete player actions dispatched by the presentation layer
///
/// Every action maps 1:1 to a session operation. While the game is over only
/// [`GameAction::Restart`] has an effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down (1 point)
    SoftDrop,
    /// Rotate 90° clockwise with horizontal kicks
    Rotate,
    /// Drop to the lowest free position and lock (2 points per cell)
    HardDrop,
    /// Reset board and game state
    Restart,
}

/// A cell on the game board
///
/// - `None`: empty
/// - `Some(kind)`: locked cell of that piece kind
pub type Cell = Option<PieceKind>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_constants_reach_floor_at_level_13() {
        // 900 - 12 * 70 = 60, clamped to the 100ms floor
        assert!(BASE_DROP_MS < DROP_STEP_MS * 12 + MIN_DROP_MS);
        assert!(BASE_DROP_MS - DROP_STEP_MS * 11 > MIN_DROP_MS);
    }

    #[test]
    fn kick_order_starts_unshifted() {
        assert_eq!(KICK_OFFSETS[0], 0);
        assert_eq!(KICK_OFFSETS.len(), 5);
    }

    #[test]
    fn codes_round_trip_through_all_kinds() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(PieceKind::from_code(0), None);
        assert_eq!(PieceKind::from_code(8), None);
    }

    #[test]
    fn letters_follow_canonical_order() {
        let letters: String = PieceKind::ALL.iter().map(PieceKind::letter).collect();
        assert_eq!(letters, "IOTSZJL");
    }
}
