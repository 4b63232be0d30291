//! The active falling piece.

use arrayvec::ArrayVec;

use crate::shape::{Shape, MAX_SIDE};
use crate::types::{PieceKind, COLS};

/// Active falling piece: kind, current rotation matrix and top-left anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece in spawn orientation, horizontally centred on row 0
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = Shape::canonical(kind);
        Self {
            kind,
            shape,
            x: ((COLS - shape.width()) / 2) as i8,
            y: 0,
        }
    }

    /// Board-space coordinates of every occupied cell
    pub fn cells(&self) -> ArrayVec<(i8, i8), { MAX_SIDE * MAX_SIDE }> {
        self.shape
            .minos()
            .into_iter()
            .map(|(dx, dy)| (self.x + dx, self.y + dy))
            .collect()
    }

    /// Same piece moved by (dx, dy)
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }
}
