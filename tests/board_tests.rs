use broadside::{
    Board, BoardError, CellDisplay, Coord, GuessOutcome, InvalidGuess, Orientation, Ship,
    ShipType, FLEET, PLACEMENT_ATTEMPTS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn destroyer() -> Ship {
    Ship::new(ShipType::new("Destroyer", 2))
}

#[test]
fn test_guess_until_sunk() {
    let mut board = Board::new(5).unwrap();
    board
        .place_ship(destroyer(), Coord::new(2, 2), Orientation::Horizontal, false)
        .unwrap();

    let first = board.process_guess(Coord::new(2, 2));
    assert!(matches!(
        first,
        GuessOutcome::Hit { sunk: false, ship: 0, .. }
    ));
    assert!(first.is_valid());

    let second = board.process_guess(Coord::new(2, 3));
    assert_eq!(
        second,
        GuessOutcome::Hit {
            coord: Coord::new(2, 3),
            ship: 0,
            name: "Destroyer",
            sunk: true,
        }
    );
    assert!(board.all_ships_sunk());
    assert_eq!(board.remaining_ships(), 0);
}

#[test]
fn test_repeated_guess_is_rejected_without_mutation() {
    let mut board = Board::new(5).unwrap();
    board
        .place_ship(destroyer(), Coord::new(2, 2), Orientation::Horizontal, false)
        .unwrap();

    assert_eq!(
        board.process_guess(Coord::new(0, 0)),
        GuessOutcome::Miss { coord: Coord::new(0, 0) }
    );
    let hits = board.hits().clone();
    let misses = board.misses().clone();

    let again = board.process_guess(Coord::new(0, 0));
    assert_eq!(again, GuessOutcome::Invalid(InvalidGuess::AlreadyGuessed));
    assert_eq!(
        again.reason().map(|r| r.to_string()),
        Some("Already guessed this position".to_string())
    );
    assert_eq!(board.hits(), &hits);
    assert_eq!(board.misses(), &misses);
}

#[test]
fn test_out_of_bounds_guess_is_rejected() {
    let mut board = Board::new(5).unwrap();
    let outcome = board.process_guess(Coord::new(5, 0));
    assert_eq!(outcome, GuessOutcome::Invalid(InvalidGuess::OutOfBounds));
    assert_eq!(outcome.coord(), None);
    assert!(board.guessed().is_empty());
}

#[test]
fn test_empty_board_counts_as_sunk() {
    let board = Board::new(5).unwrap();
    assert!(board.all_ships_sunk());
    assert_eq!(board.remaining_ships(), 0);
}

#[test]
fn test_zero_size_board_rejected() {
    assert_eq!(Board::new(0).unwrap_err(), BoardError::InvalidBoardSize);
}

#[test]
fn test_overflowing_board_size_rejected() {
    assert_eq!(
        Board::new(usize::MAX).unwrap_err(),
        BoardError::InvalidBoardSize
    );
    assert_eq!(
        Board::new(1 << (usize::BITS / 2)).unwrap_err(),
        BoardError::InvalidBoardSize
    );
}

#[test]
fn test_random_placement_exhausts_on_tiny_board() {
    let mut board = Board::new(3).unwrap();
    let mut rng = SmallRng::seed_from_u64(7);
    let err = board
        .place_ships_randomly(&mut rng, 10, ShipType::new("Cruiser", 3), false)
        .unwrap_err();
    assert_eq!(
        err,
        BoardError::PlacementExhausted {
            length: 3,
            attempts: PLACEMENT_ATTEMPTS,
        }
    );
    // at most three length-3 ships fit on 3x3
    assert!(board.ships().len() <= 3);
}

#[test]
fn test_can_place_and_place_ship_errors() {
    let mut board = Board::new(5).unwrap();
    assert!(board.can_place(Coord::new(0, 3), 2, Orientation::Horizontal));
    assert!(!board.can_place(Coord::new(0, 4), 2, Orientation::Horizontal));
    assert!(!board.can_place(Coord::new(4, 0), 2, Orientation::Vertical));
    assert!(!board.can_place(Coord::new(0, 0), 0, Orientation::Vertical));

    board
        .place_ship(destroyer(), Coord::new(1, 1), Orientation::Vertical, false)
        .unwrap();
    assert!(!board.can_place(Coord::new(2, 0), 3, Orientation::Horizontal));

    assert_eq!(
        board.place_ship(destroyer(), Coord::new(2, 0), Orientation::Horizontal, false),
        Err(BoardError::ShipOverlaps)
    );
    assert_eq!(
        board.place_ship(destroyer(), Coord::new(4, 4), Orientation::Horizontal, false),
        Err(BoardError::ShipOutOfBounds)
    );
    assert_eq!(board.ships().len(), 1);
    assert_eq!(board.ship_map().len(), 2);
}

#[test]
fn test_cell_display_precedence() {
    let mut board = Board::new(3).unwrap();
    board
        .place_ship(destroyer(), Coord::new(0, 0), Orientation::Horizontal, true)
        .unwrap();

    assert_eq!(board.cell_display(Coord::new(0, 0), false), CellDisplay::Ship);
    assert_eq!(board.cell_display(Coord::new(0, 0), true), CellDisplay::Empty);

    board.process_guess(Coord::new(0, 0));
    board.process_guess(Coord::new(2, 2));
    assert_eq!(board.cell_display(Coord::new(0, 0), false), CellDisplay::Hit);
    assert_eq!(board.cell_display(Coord::new(0, 0), true), CellDisplay::Hit);
    assert_eq!(board.cell_display(Coord::new(2, 2), false), CellDisplay::Miss);
    assert_eq!(board.cell_display(Coord::new(0, 1), false), CellDisplay::Ship);
    assert_eq!(board.cell_display(Coord::new(1, 1), false), CellDisplay::Empty);
}

#[test]
fn test_hidden_placement_never_shows_ship_marks() {
    let mut board = Board::new(3).unwrap();
    board
        .place_ship(destroyer(), Coord::new(1, 0), Orientation::Horizontal, false)
        .unwrap();
    assert_eq!(board.cell_display(Coord::new(1, 0), false), CellDisplay::Empty);
}

#[test]
fn test_place_fleet_randomly_no_overlap() {
    let mut board = Board::new(10).unwrap();
    let mut rng = SmallRng::seed_from_u64(42);
    board.place_fleet_randomly(&mut rng, &FLEET, false).unwrap();

    let expected: usize = FLEET.iter().map(|s| s.length()).sum();
    assert_eq!(board.ships().len(), FLEET.len());
    assert_eq!(
        board.ship_map().len(),
        expected,
        "all ships should be placed without overlap"
    );
    assert_eq!(board.remaining_ships(), FLEET.len());
    assert!(!board.all_ships_sunk());
}

#[test]
fn test_try_place_once_rejects_oversized_ship() {
    let board = Board::new(4).unwrap();
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(board.try_place_once(&mut rng, 5), None);
    assert_eq!(board.try_place_once(&mut rng, 0), None);
    let (anchor, orient) = board.try_place_once(&mut rng, 4).unwrap();
    assert!(board.can_place(anchor, 4, orient));
}

#[test]
fn test_two_digit_coordinates_do_not_collide() {
    let mut board = Board::new(12).unwrap();
    board
        .place_ship(
            Ship::new(ShipType::new("Patrol Boat", 1)),
            Coord::new(1, 11),
            Orientation::Horizontal,
            false,
        )
        .unwrap();
    assert!(matches!(
        board.process_guess(Coord::new(11, 1)),
        GuessOutcome::Miss { .. }
    ));
    assert!(board.process_guess(Coord::new(1, 11)).is_sunk());
}

#[test]
fn test_reset_clears_everything() {
    let mut board = Board::new(5).unwrap();
    board
        .place_ship(destroyer(), Coord::new(0, 0), Orientation::Horizontal, true)
        .unwrap();
    board.process_guess(Coord::new(0, 0));
    board.process_guess(Coord::new(4, 4));

    board.reset();
    assert!(board.ships().is_empty());
    assert!(board.ship_map().is_empty());
    assert!(board.guessed().is_empty());
    assert!(board.hits().is_empty());
    assert!(board.misses().is_empty());
    assert_eq!(board.cell_display(Coord::new(0, 1), false), CellDisplay::Empty);
    assert!(board.process_guess(Coord::new(4, 4)).is_valid());
}
