//! Board tests - storage, merging and row clearing through the public API

use blockfall::core::{Board, MergeError, Piece};
use blockfall::types::{PieceKind, COLS, ROWS};

fn fill_row(board: &mut Board, y: i8, kind: PieceKind) {
    for x in 0..COLS as i8 {
        board.set(x, y, Some(kind));
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), COLS);
    assert_eq!(board.height(), ROWS);
    assert_eq!(board.rows().count(), ROWS as usize);
    assert_eq!(board.filled_count(), 0);

    for y in 0..ROWS as i8 {
        for x in 0..COLS as i8 {
            assert_eq!(board.get(x, y), Some(None), "cell ({x}, {y}) should be empty");
        }
    }
}

#[test]
fn test_board_bounds() {
    let mut board = Board::new();
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, ROWS as i8), None);
    assert!(!board.set(COLS as i8, 0, Some(PieceKind::T)));
    assert!(!board.is_occupied(0, -1));
}

#[test]
fn test_clear_non_contiguous_rows_keeps_order() {
    let mut board = Board::new();
    fill_row(&mut board, 5, PieceKind::I);
    fill_row(&mut board, 12, PieceKind::O);
    fill_row(&mut board, 19, PieceKind::S);

    // One marker in each band between the full rows
    board.set(9, 4, Some(PieceKind::T));
    board.set(0, 11, Some(PieceKind::J));
    board.set(3, 18, Some(PieceKind::L));

    assert_eq!(board.clear_full_rows(), 3);
    assert_eq!(board.rows().count(), ROWS as usize);
    assert_eq!(board.filled_count(), 3);

    // Each marker drops by the number of cleared rows below it
    assert_eq!(board.get(3, 19), Some(Some(PieceKind::L)));
    assert_eq!(board.get(0, 13), Some(Some(PieceKind::J)));
    assert_eq!(board.get(9, 7), Some(Some(PieceKind::T)));

    for y in 0..3 {
        assert!(board.row(y).iter().all(|c| c.is_none()), "row {y} should be empty");
    }
}

#[test]
fn test_clear_without_full_rows_is_noop() {
    let mut board = Board::new();
    for x in 0..COLS as i8 - 1 {
        board.set(x, 19, Some(PieceKind::Z));
    }
    let before = board.clone();
    assert_eq!(board.clear_full_rows(), 0);
    assert_eq!(board, before);
}

#[test]
fn test_clear_whole_board() {
    let mut board = Board::new();
    for y in 0..ROWS as i8 {
        fill_row(&mut board, y, PieceKind::J);
    }
    assert_eq!(board.clear_full_rows(), ROWS as usize);
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_merge_writes_piece_kind() {
    let mut board = Board::new();
    let mut piece = Piece::spawn(PieceKind::T);
    piece.y = 18;

    board.merge_piece(&piece).unwrap();
    // T spawns at x=3: top nub at (4, 18), base at (3..=5, 19)
    assert_eq!(board.get(4, 18), Some(Some(PieceKind::T)));
    for x in 3..=5 {
        assert_eq!(board.get(x, 19), Some(Some(PieceKind::T)));
    }
    assert_eq!(board.filled_count(), 4);
}

#[test]
fn test_merge_above_top_is_rejected_without_writes() {
    let mut board = Board::new();
    let mut piece = Piece::spawn(PieceKind::O);
    piece.y = -1;

    assert_eq!(
        board.merge_piece(&piece),
        Err(MergeError::Overflow { x: 4, y: -1 })
    );
    assert_eq!(board.filled_count(), 0);
}
