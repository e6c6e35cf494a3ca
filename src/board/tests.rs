use super::*;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::X.opponent(), Stone::O);
    assert_eq!(Stone::O.opponent(), Stone::X);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_stone_symbols() {
    assert_eq!(Stone::X.symbol(), 'X');
    assert_eq!(Stone::O.symbol(), 'O');
    assert_eq!(Stone::Empty.symbol(), ' ');
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(2, 3);
    assert_eq!(pos.to_index(), 2 * 6 + 3);

    let back = Pos::from_index(15);
    assert_eq!(back, pos);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(4, 5));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(5, 0));
    assert!(!Pos::is_valid(0, 6));
}

#[test]
fn test_pos_offset() {
    assert_eq!(Pos::new(0, 0).offset(1, 1), Some(Pos::new(1, 1)));
    assert_eq!(Pos::new(0, 0).offset(-1, 0), None);
    assert_eq!(Pos::new(4, 5).offset(0, 1), None);
}

#[test]
fn test_board_constants() {
    assert_eq!(ROWS, 5);
    assert_eq!(COLS, 6);
    assert_eq!(TOTAL_CELLS, 30);
}

#[test]
fn test_pos_corner_indices() {
    assert_eq!(Pos::new(0, 0).to_index(), 0);
    assert_eq!(Pos::new(0, 5).to_index(), 5);
    assert_eq!(Pos::new(4, 0).to_index(), 24);
    assert_eq!(Pos::new(4, 5).to_index(), 29);
}

#[test]
fn test_initial_board() {
    let board = Board::initial();
    assert_eq!(board.get(Pos::new(2, 3)), Stone::X);
    assert_eq!(board.get(Pos::new(2, 2)), Stone::O);
    assert_eq!(board.stone_count(), 2);
    let empty = board.cells().filter(|(_, s)| *s == Stone::Empty).count();
    assert_eq!(empty, 28);
}

#[test]
fn test_place_on_occupied_is_noop() {
    let mut board = Board::initial();
    assert!(!board.place_stone(Pos::new(2, 3), Stone::O));
    assert_eq!(board.get(Pos::new(2, 3)), Stone::X);
    assert_eq!(board.stone_count(), 2);
}

#[test]
fn test_apply_move_does_not_touch_original() {
    let board = Board::initial();
    let next = board.apply_move(Pos::new(1, 1), Stone::X);
    assert_eq!(board.get(Pos::new(1, 1)), Stone::Empty);
    assert_eq!(next.get(Pos::new(1, 1)), Stone::X);
}

#[test]
fn test_apply_move_idempotent() {
    let board = Board::initial();
    let m = Pos::new(3, 3);
    let once = board.apply_move(m, Stone::X);
    let twice = once.apply_move(m, Stone::X);
    assert_eq!(once, twice);
}

#[test]
fn test_full_board() {
    let mut board = Board::new();
    for idx in 0..TOTAL_CELLS {
        assert!(!board.is_full());
        let stone = if idx % 2 == 0 { Stone::X } else { Stone::O };
        board.place_stone(Pos::from_index(idx), stone);
    }
    assert!(board.is_full());
}
