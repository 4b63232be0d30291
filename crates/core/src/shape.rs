//! Shape module - tetromino cell matrices and their rotation
//!
//! A shape is a small boolean matrix (at most 4x4) with explicit width and
//! height. Rotating swaps the two dimensions, so an I piece alternates between
//! 4x1 and 1x4. Shapes are `Copy` and rotation is a pure function.

use arrayvec::ArrayVec;

use crate::types::PieceKind;

/// Largest side of any tetromino matrix
pub const MAX_SIDE: usize = 4;

/// Offset of a single occupied cell relative to the shape's top-left corner
pub type MinoOffset = (i8, i8);

/// Boolean cell matrix of a piece in one rotation state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    width: u8,
    height: u8,
    /// Row-major, only `[0..height][0..width]` is meaningful
    cells: [[bool; MAX_SIDE]; MAX_SIDE],
}

impl Shape {
    /// Build a shape from rows of 0/1 values.
    ///
    /// Panics if the matrix is empty, ragged, or larger than 4x4; only used
    /// with literal tables.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        assert!(height > 0 && height <= MAX_SIDE, "shape height out of range");
        assert!(width > 0 && width <= MAX_SIDE, "shape width out of range");

        let mut cells = [[false; MAX_SIDE]; MAX_SIDE];
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), width, "ragged shape row");
            for (x, &v) in row.iter().enumerate() {
                cells[y][x] = v != 0;
            }
        }

        Self {
            width: width as u8,
            height: height as u8,
            cells,
        }
    }

    /// Spawn orientation of a piece kind
    pub fn canonical(kind: PieceKind) -> Self {
        match kind {
            PieceKind::I => Self::from_rows(&[&[1, 1, 1, 1]]),
            PieceKind::O => Self::from_rows(&[&[1, 1], &[1, 1]]),
            PieceKind::T => Self::from_rows(&[&[0, 1, 0], &[1, 1, 1]]),
            PieceKind::S => Self::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
            PieceKind::Z => Self::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
            PieceKind::J => Self::from_rows(&[&[1, 0, 0], &[1, 1, 1]]),
            PieceKind::L => Self::from_rows(&[&[0, 0, 1], &[1, 1, 1]]),
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Occupied cells in row-major order
    pub fn minos(&self) -> ArrayVec<MinoOffset, { MAX_SIDE * MAX_SIDE }> {
        let mut out = ArrayVec::new();
        for y in 0..self.height as usize {
            for x in 0..self.width as usize {
                if self.cells[y][x] {
                    out.push((x as i8, y as i8));
                }
            }
        }
        out
    }

    /// Matrix rows as 0/1 vectors (for tests and debugging)
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.height as usize)
            .map(|y| {
                (0..self.width as usize)
                    .map(|x| u8::from(self.cells[y][x]))
                    .collect()
            })
            .collect()
    }
}

/// Rotate a shape 90° clockwise.
///
/// Transpose followed by row reversal: `rotated[x][h - 1 - y] = m[y][x]`.
/// The result has width and height swapped. The input is not modified.
pub fn rotate_matrix(shape: &Shape) -> Shape {
    let h = shape.height as usize;
    let w = shape.width as usize;
    let mut cells = [[false; MAX_SIDE]; MAX_SIDE];

    for y in 0..h {
        for x in 0..w {
            cells[x][h - y - 1] = shape.cells[y][x];
        }
    }

    Shape {
        width: shape.height,
        height: shape.width,
        cells,
    }
}
