//! Board module - the grid of locked cells
//!
//! The board is a 10x20 grid where each cell is empty or holds the kind of the
//! piece that was locked there. Storage is a flat row-major array so clears are
//! plain `copy_within` moves and nothing allocates.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).

use thiserror::Error;

use crate::piece::Piece;
use crate::types::{Cell, COLS, ROWS};

/// Total number of cells on the board
const BOARD_SIZE: usize = (COLS as usize) * (ROWS as usize);

/// Reasons a piece cannot be written into the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MergeError {
    /// An occupied cell of the piece sits above the visible top
    #[error("piece overflows the top of the board at column {x}, row {y}")]
    Overflow { x: i8, y: i8 },
}

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * COLS + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= COLS as i8 || y < 0 || y >= ROWS as i8 {
            return None;
        }
        Some((y as usize) * (COLS as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        COLS
    }

    pub fn height(&self) -> u8 {
        ROWS
    }

    /// Get cell at position (x, y); `None` if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y); returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// True if (x, y) is within bounds and holds a piece type
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= ROWS as usize {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_some())
    }

    /// Cells of one row, left to right
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * COLS as usize;
        &self.cells[start..start + COLS as usize]
    }

    /// Rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(COLS as usize)
    }

    /// Write the piece's occupied cells into the grid.
    ///
    /// Nothing is written when any occupied cell lies above row 0. Cells are
    /// not checked for overlap; callers only merge pieces that passed collision
    /// checks.
    pub fn merge_piece(&mut self, piece: &Piece) -> Result<(), MergeError> {
        let cells = piece.cells();
        if let Some(&(x, y)) = cells.iter().find(|&&(_, y)| y < 0) {
            return Err(MergeError::Overflow { x, y });
        }

        for &(x, y) in &cells {
            self.set(x, y, Some(piece.kind));
        }
        Ok(())
    }

    /// Remove every full row, shifting the rows above down, and return how many
    /// were removed.
    ///
    /// Rows are read bottom to top and compacted towards the floor, so rows that
    /// slide into a vacated slot are examined in the same pass. The vacated top
    /// rows are emptied, keeping the row count at `ROWS`.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = COLS as usize;
        let mut write_y = ROWS as usize;
        let mut cleared = 0;

        for read_y in (0..ROWS as usize).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * width;
                self.cells.copy_within(src..src + width, write_y * width);
            }
        }

        self.cells[..write_y * width].fill(None);
        cleared
    }

    /// Export the grid as compact codes (0 = empty, 1..=7 = kind)
    pub fn write_u8_grid(&self, out: &mut [[u8; COLS as usize]; ROWS as usize]) {
        for (dst, src) in out.iter_mut().zip(self.rows()) {
            for (d, s) in dst.iter_mut().zip(src) {
                *d = s.map_or(0, |kind| kind.code());
            }
        }
    }

    /// Number of occupied cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::rotate_matrix;
    use crate::types::PieceKind;

    fn fill_row(board: &mut Board, y: i8, kind: PieceKind) {
        for x in 0..COLS as i8 {
            board.set(x, y, Some(kind));
        }
    }

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_merge_writes_piece_kind() {
        let mut board = Board::new();
        let piece = Piece::spawn(PieceKind::T).shifted(0, 18);

        assert_eq!(board.merge_piece(&piece), Ok(()));
        assert!(board.is_occupied(4, 18));
        assert!(board.is_occupied(3, 19));
        assert!(board.is_occupied(5, 19));
        assert!(!board.is_occupied(3, 18));
        assert_eq!(board.get(4, 19), Some(Some(PieceKind::T)));
        assert_eq!(board.filled_count(), 4);
    }

    #[test]
    fn test_merge_overflow_writes_nothing() {
        let mut board = Board::new();
        let mut piece = Piece::spawn(PieceKind::J);
        piece.shape = rotate_matrix(&piece.shape);
        piece.y = -1;

        assert!(matches!(
            board.merge_piece(&piece),
            Err(MergeError::Overflow { y: -1, .. })
        ));
        assert_eq!(board.filled_count(), 0);
    }

    #[test]
    fn test_clear_cascading_rows_in_one_pass() {
        let mut board = Board::new();
        fill_row(&mut board, 19, PieceKind::I);
        fill_row(&mut board, 18, PieceKind::O);
        board.set(2, 17, Some(PieceKind::T));

        assert_eq!(board.clear_full_rows(), 2);
        assert_eq!(board.get(2, 19), Some(Some(PieceKind::T)));
        assert_eq!(board.filled_count(), 1);
    }

    #[test]
    fn test_clear_without_full_rows_is_noop() {
        let mut board = Board::new();
        board.set(0, 19, Some(PieceKind::S));
        let before = board.clone();

        assert_eq!(board.clear_full_rows(), 0);
        assert_eq!(board, before);
    }

    #[test]
    fn test_write_u8_grid_uses_kind_codes() {
        let mut board = Board::new();
        board.set(0, 0, Some(PieceKind::I));
        board.set(9, 19, Some(PieceKind::L));

        let mut grid = [[0u8; COLS as usize]; ROWS as usize];
        board.write_u8_grid(&mut grid);
        assert_eq!(grid[0][0], 1);
        assert_eq!(grid[19][9], 7);
        assert_eq!(grid[10][5], 0);
    }
}
