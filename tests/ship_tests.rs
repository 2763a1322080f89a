use broadside::{Coord, Orientation, Ship, ShipType};

#[test]
fn test_place_horizontal() {
    let mut ship = Ship::new(ShipType::new("Test", 3));
    assert!(!ship.is_placed());
    ship.place(Coord::new(2, 1), Orientation::Horizontal);
    assert_eq!(
        ship.cells(),
        &[Coord::new(2, 1), Coord::new(2, 2), Coord::new(2, 3)]
    );
    assert_eq!(ship.anchor(), Some(Coord::new(2, 1)));
    assert_eq!(ship.orientation(), Some(Orientation::Horizontal));
}

#[test]
fn test_place_vertical_and_membership() {
    let mut ship = Ship::new(ShipType::new("Test", 4));
    ship.place(Coord::new(0, 0), Orientation::Vertical);
    for r in 0..4 {
        assert!(ship.has_coordinate(Coord::new(r, 0)));
    }
    assert!(!ship.has_coordinate(Coord::new(4, 0)));
    assert!(!ship.has_coordinate(Coord::new(0, 1)));
}

#[test]
fn test_hit_is_idempotent_and_sinks() {
    let mut ship = Ship::new(ShipType::new("Test", 2));
    ship.place(Coord::new(1, 1), Orientation::Horizontal);
    assert!(!ship.is_sunk());

    assert!(ship.hit(Coord::new(1, 1)));
    assert!(!ship.hit(Coord::new(1, 1)));
    assert_eq!(ship.hit_count(), 1);
    assert!(!ship.is_sunk());

    // miss
    assert!(!ship.hit(Coord::new(0, 0)));
    assert_eq!(ship.hit_count(), 1);

    assert!(ship.hit(Coord::new(1, 2)));
    assert!(ship.is_sunk());
}

#[test]
fn test_reset_clears_geometry_and_damage() {
    let mut ship = Ship::new(ShipType::new("Test", 1));
    ship.place(Coord::new(3, 3), Orientation::Vertical);
    assert!(ship.hit(Coord::new(3, 3)));
    assert!(ship.is_sunk());

    ship.reset();
    assert!(!ship.is_placed());
    assert!(ship.cells().is_empty());
    assert_eq!(ship.hit_count(), 0);
    assert!(!ship.is_sunk());
    assert!(!ship.hit(Coord::new(3, 3)));
}
