//! Placement module - collision tests and rotation kicks
//!
//! These are pure queries over a board and a candidate piece. They never
//! mutate anything; [`crate::session::GameSession`] decides what to commit.

use crate::board::Board;
use crate::piece::Piece;
use crate::shape::{rotate_matrix, Shape};
use crate::types::{COLS, KICK_OFFSETS, ROWS};

/// Test the piece displaced by (dx, dy) with its current shape.
pub fn collides(board: &Board, piece: &Piece, dx: i8, dy: i8) -> bool {
    collides_with_shape(board, piece, dx, dy, &piece.shape)
}

/// Test a hypothetical placement of `shape` at the piece's anchor plus (dx, dy).
///
/// A cell collides when it is left of column 0, right of the last column, at or
/// below the floor, or on an occupied board cell. Cells above the top (y < 0)
/// only get the horizontal and floor checks; overflow is detected at merge time.
pub fn collides_with_shape(board: &Board, piece: &Piece, dx: i8, dy: i8, shape: &Shape) -> bool {
    let ox = piece.x + dx;
    let oy = piece.y + dy;

    shape.minos().iter().any(|&(mx, my)| {
        let x = ox + mx;
        let y = oy + my;
        if x < 0 || x >= COLS as i8 || y >= ROWS as i8 {
            return true;
        }
        y >= 0 && board.is_occupied(x, y)
    })
}

/// Rotate clockwise, trying each horizontal kick in order at the same row.
///
/// Returns the rotated (and possibly shifted) piece for the first offset that
/// fits, or `None` if every offset collides.
pub fn try_rotate(board: &Board, piece: &Piece) -> Option<Piece> {
    let rotated = rotate_matrix(&piece.shape);

    KICK_OFFSETS
        .iter()
        .find(|&&dx| !collides_with_shape(board, piece, dx, 0, &rotated))
        .map(|&dx| Piece {
            shape: rotated,
            x: piece.x + dx,
            ..*piece
        })
}

/// Number of rows the piece can fall before it would collide
pub fn drop_distance(board: &Board, piece: &Piece) -> u32 {
    let mut distance: i8 = 0;
    while !collides(board, piece, 0, distance + 1) {
        distance += 1;
    }
    distance as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn spawn_on_empty_board_fits() {
        let board = Board::new();
        for kind in PieceKind::ALL {
            assert!(!collides(&board, &Piece::spawn(kind), 0, 0));
        }
    }

    #[test]
    fn walls_and_floor_collide() {
        let board = Board::new();
        let piece = Piece::spawn(PieceKind::O); // x = 4, width 2
        assert!(!collides(&board, &piece, -4, 0));
        assert!(collides(&board, &piece, -5, 0));
        assert!(!collides(&board, &piece, 4, 0));
        assert!(collides(&board, &piece, 5, 0));
        assert!(!collides(&board, &piece, 0, 18));
        assert!(collides(&board, &piece, 0, 19));
    }

    #[test]
    fn cells_above_top_do_not_collide() {
        let mut board = Board::new();
        // Even with the top row full, a piece entirely above it is not blocked.
        for x in 0..COLS as i8 {
            board.set(x, 0, Some(PieceKind::Z));
        }
        let piece = Piece::spawn(PieceKind::I);
        assert!(!collides(&board, &piece, 0, -1));
        assert!(collides(&board, &piece, 0, 0));
        // Horizontal bounds still apply above the top.
        assert!(collides(&board, &piece, -4, -1));
    }

    #[test]
    fn rotation_kicks_off_right_wall() {
        let board = Board::new();
        // Vertical I against the right wall.
        let mut piece = Piece::spawn(PieceKind::I);
        piece.shape = rotate_matrix(&piece.shape);
        piece.x = 7;
        piece.y = 5;

        // Unshifted the bar would span columns 7..=10; -1 is the first fit.
        let rotated = try_rotate(&board, &piece).expect("kick should fit");
        assert_eq!(rotated.shape.width(), 4);
        assert_eq!(rotated.x, 6);
        assert_eq!(rotated.y, 5);
    }

    #[test]
    fn rotation_without_fitting_kick_is_rejected() {
        let board = Board::new();
        // At column 9 the widest kick (-2) still leaves the bar past the wall.
        let mut piece = Piece::spawn(PieceKind::I);
        piece.shape = rotate_matrix(&piece.shape);
        piece.x = 9;
        piece.y = 5;

        assert_eq!(try_rotate(&board, &piece), None);
    }

    #[test]
    fn rotation_prefers_left_kick_over_right() {
        let mut board = Board::new();
        // T at x=3,y=10 rotates into a 2x3 matrix whose left column covers row 10.
        // Blocking (2,10) and (3,10) rules out offsets 0 and -1; +1 fits.
        board.set(2, 10, Some(PieceKind::O));
        board.set(3, 10, Some(PieceKind::O));
        let piece = Piece::spawn(PieceKind::T).shifted(0, 10);

        let rotated = try_rotate(&board, &piece).expect("kick should fit");
        assert_eq!(rotated.x, 4);
    }

    #[test]
    fn drop_distance_on_empty_board() {
        let board = Board::new();
        assert_eq!(drop_distance(&board, &Piece::spawn(PieceKind::I)), 19);
        assert_eq!(drop_distance(&board, &Piece::spawn(PieceKind::T)), 18);
    }
}
