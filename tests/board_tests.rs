use broadside::{
    AttackError, AttackMark, AttackOutcome, Board, BoardState, ConfigError, Coordinate,
    Orientation, PlacementError, ShipId,
};

fn c(x: usize, y: usize) -> Coordinate {
    Coordinate::new(x, y)
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new(10).unwrap();
    assert_eq!(board.size(), 10);
    let grid = board.snapshot();
    assert_eq!(grid.len(), 10);
    assert!(grid.iter().all(|row| row.len() == 10 && row.iter().all(Option::is_none)));
    assert!(board.missed_attacks().is_empty());
    assert!(board.hit_coordinates().is_empty());
    assert!(board.ships().is_empty());
    // vacuously true before any placement
    assert!(board.all_ships_sunk());
}

#[test]
fn test_zero_size_rejected() {
    assert_eq!(Board::new(0).unwrap_err(), ConfigError::InvalidBoardSize(0));
}

#[test]
fn test_oversized_board_rejected() {
    let size = 1usize << (usize::BITS / 2);
    assert_eq!(Board::new(size).unwrap_err(), ConfigError::InvalidBoardSize(size));
    assert_eq!(
        Board::new(usize::MAX).unwrap_err(),
        ConfigError::InvalidBoardSize(usize::MAX)
    );
}

#[test]
fn test_place_horizontal() {
    let mut board = Board::new(10).unwrap();
    let id: ShipId = board
        .try_place_ship(3, c(0, 0), Orientation::Horizontal)
        .unwrap();
    assert_eq!(id.index(), 0);
    for y in 0..3 {
        assert_eq!(board.cell(c(0, y)), Some(Some(id)));
    }
    assert_eq!(board.cell(c(0, 3)), Some(None));
    assert_eq!(board.ships().len(), 1);
}

#[test]
fn test_place_vertical() {
    let mut board = Board::new(10).unwrap();
    assert!(board.place_ship(4, c(1, 1), Orientation::Vertical));
    for x in 1..5 {
        assert!(board.cell(c(x, 1)).unwrap().is_some());
    }
    assert_eq!(board.cell(c(5, 1)), Some(None));
    assert_eq!(board.cell(c(1, 2)), Some(None));
    assert_eq!(board.ships().len(), 1);
}

#[test]
fn test_place_out_of_bounds() {
    let mut board = Board::new(10).unwrap();
    assert!(!board.place_ship(3, c(0, 8), Orientation::Horizontal));
    assert!(!board.place_ship(4, c(8, 0), Orientation::Vertical));
    assert_eq!(
        board.try_place_ship(4, c(8, 0), Orientation::Vertical),
        Err(PlacementError::OutOfBounds)
    );
    assert!(board.ships().is_empty());
    assert!(board.snapshot().iter().flatten().all(Option::is_none));
}

#[test]
fn test_place_overlap_is_atomic() {
    let mut board = Board::new(10).unwrap();
    assert!(board.place_ship(3, c(0, 0), Orientation::Horizontal));
    assert_eq!(
        board.try_place_ship(2, c(0, 1), Orientation::Vertical),
        Err(PlacementError::Overlap(c(0, 1)))
    );
    assert_eq!(board.ships().len(), 1);
    // the non-overlapping cell of the refused ship stays empty
    assert_eq!(board.cell(c(1, 1)), Some(None));
}

#[test]
fn test_place_zero_length() {
    let mut board = Board::new(5).unwrap();
    assert_eq!(
        board.try_place_ship(0, c(0, 0), Orientation::Horizontal),
        Err(PlacementError::InvalidLength(0))
    );
}

#[test]
fn test_place_after_attack_refused() {
    let mut board = Board::new(10).unwrap();
    assert!(board.place_ship(2, c(0, 0), Orientation::Horizontal));
    board.receive_attack(c(5, 5)).unwrap();
    assert_eq!(
        board.try_place_ship(2, c(3, 3), Orientation::Horizontal),
        Err(PlacementError::AttacksStarted)
    );
    assert_eq!(board.ships().len(), 1);
    assert!(board.legal_placements(2).is_empty());
}

#[test]
fn test_miss_recorded() {
    let mut board = Board::new(10).unwrap();
    board.place_ship(3, c(2, 2), Orientation::Horizontal);
    let res = board.receive_attack(c(0, 0)).unwrap();
    assert_eq!(res, AttackOutcome::Miss { coord: c(0, 0) });
    assert_eq!(board.missed_attacks(), &[c(0, 0)]);
    assert!(board.hit_coordinates().is_empty());
    assert_eq!(board.cell(c(0, 0)), Some(None));
    assert_eq!(board.ships()[0].hits(), 0);
}

#[test]
fn test_hits_then_sink() {
    let mut board = Board::new(10).unwrap();
    assert!(board.place_ship(3, c(2, 2), Orientation::Horizontal));

    let first = board.receive_attack(c(2, 2)).unwrap();
    let (_, ship) = first.ship().unwrap();
    assert!(first.is_hit());
    assert_eq!(ship.hits(), 1);
    assert!(!first.sunk());
    assert!(board.missed_attacks().is_empty());

    assert!(!board.receive_attack(c(2, 3)).unwrap().sunk());
    let last = board.receive_attack(c(2, 4)).unwrap();
    assert!(last.is_hit());
    assert!(last.sunk());
    assert!(board.all_ships_sunk());
    assert_eq!(board.hit_coordinates(), &[c(2, 2), c(2, 3), c(2, 4)]);
    assert_eq!(last.to_string(), "Hit! Sunk Destroyer/Submarine!");
}

#[test]
fn test_repeat_attack_reports_previous_mark() {
    let mut board = Board::new(10).unwrap();
    board.place_ship(2, c(0, 0), Orientation::Horizontal);
    board.receive_attack(c(0, 0)).unwrap();
    board.receive_attack(c(9, 9)).unwrap();

    let err = board.receive_attack(c(0, 0)).unwrap_err();
    assert_eq!(err, AttackError::AlreadyHit(c(0, 0)));
    assert_eq!(err.to_string(), "Already hit this spot.");

    let err = board.receive_attack(c(9, 9)).unwrap_err();
    assert_eq!(err, AttackError::AlreadyMissed(c(9, 9)));
    assert_eq!(err.to_string(), "Already missed this spot.");

    assert_eq!(board.ships()[0].hits(), 1);
    assert_eq!(board.attack_mark(c(0, 0)), Some(AttackMark::Hit));
    assert_eq!(board.attack_mark(c(9, 9)), Some(AttackMark::Miss));
}

#[test]
fn test_out_of_bounds_attack() {
    let mut board = Board::new(10).unwrap();
    let err = board.receive_attack(c(10, 0)).unwrap_err();
    assert_eq!(err, AttackError::OutOfBounds(c(10, 0)));
    assert_eq!(err.to_string(), "Coordinates out of bounds.");
    assert!(board.missed_attacks().is_empty());
    assert!(!board.is_attacked(c(10, 0)));
}

#[test]
fn test_all_ships_sunk_needs_every_ship() {
    let mut board = Board::new(5).unwrap();
    board.place_ship(1, c(0, 0), Orientation::Horizontal);
    board.place_ship(2, c(4, 0), Orientation::Horizontal);
    assert!(!board.all_ships_sunk());
    board.receive_attack(c(0, 0)).unwrap();
    assert!(!board.all_ships_sunk());
    assert_eq!(board.ships_remaining(), 1);
    board.receive_attack(c(4, 0)).unwrap();
    board.receive_attack(c(4, 1)).unwrap();
    assert!(board.all_ships_sunk());
    assert_eq!(board.ships_remaining(), 0);
}

#[test]
fn test_unattacked_coordinates_shrink() {
    let mut board = Board::new(3).unwrap();
    assert_eq!(board.unattacked_coordinates().count(), 9);
    board.receive_attack(c(1, 1)).unwrap();
    let open: Vec<_> = board.unattacked_coordinates().collect();
    assert_eq!(open.len(), 8);
    assert!(!open.contains(&c(1, 1)));
}

#[test]
fn test_legal_placements_respect_bounds_and_ships() {
    let mut board = Board::new(3).unwrap();
    // 3 rows + 3 columns
    assert_eq!(board.legal_placements(3).len(), 6);
    assert_eq!(board.legal_placements(1).len(), 9);
    board.place_ship(3, c(0, 0), Orientation::Horizontal);
    // only rows 1 and 2 remain
    assert_eq!(
        board.legal_placements(3),
        vec![
            (c(1, 0), Orientation::Horizontal),
            (c(2, 0), Orientation::Horizontal)
        ]
    );
}

#[test]
fn test_board_state_snapshot() {
    let mut board = Board::new(4).unwrap();
    board.place_ship(2, c(1, 1), Orientation::Vertical);
    board.receive_attack(c(1, 1)).unwrap();
    board.receive_attack(c(0, 0)).unwrap();

    let state = BoardState::from(&board);
    assert_eq!(state.size, 4);
    assert_eq!(state.grid.iter().filter(|cell| cell.is_some()).count(), 2);
    assert_eq!(state.hits, vec![c(1, 1)]);
    assert_eq!(state.misses, vec![c(0, 0)]);
    assert_eq!(state.ships[0].hits(), 1);
}
