//! Game board state: ship placement, guess processing and win detection.

use alloc::vec::Vec;
use core::fmt;
use log::{debug, trace, warn};
use rand::Rng;

use crate::common::{BoardError, GuessOutcome, InvalidGuess};
use crate::config::PLACEMENT_ATTEMPTS;
use crate::coord::Coord;
use crate::grid::CellSet;
use crate::ship::{Orientation, Ship, ShipType};

/// What a renderer should draw for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellDisplay {
    Hit,
    Miss,
    Ship,
    Empty,
}

impl CellDisplay {
    pub fn glyph(self) -> char {
        match self {
            CellDisplay::Hit => 'X',
            CellDisplay::Miss => 'o',
            CellDisplay::Ship => 'S',
            CellDisplay::Empty => '.',
        }
    }
}

/// One player's board: the ships it owns and every guess made against it.
///
/// `guessed` is always the disjoint union of `hits` and `misses`.
#[derive(Clone)]
pub struct Board {
    size: usize,
    ships: Vec<Ship>,
    ship_map: CellSet,
    revealed: CellSet,
    guessed: CellSet,
    hits: CellSet,
    misses: CellSet,
}

impl Board {
    /// Create an empty `size×size` board (no ships placed).
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::InvalidBoardSize);
        }
        let empty = CellSet::try_new(size).map_err(|_| BoardError::InvalidBoardSize)?;
        Ok(Board {
            size,
            ships: Vec::new(),
            ship_map: empty.clone(),
            revealed: empty.clone(),
            guessed: empty.clone(),
            hits: empty.clone(),
            misses: empty,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Ships in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Board occupancy mask of all ships.
    pub fn ship_map(&self) -> &CellSet {
        &self.ship_map
    }

    pub fn guessed(&self) -> &CellSet {
        &self.guessed
    }

    pub fn hits(&self) -> &CellSet {
        &self.hits
    }

    pub fn misses(&self) -> &CellSet {
        &self.misses
    }

    fn check_placement(
        &self,
        anchor: Coord,
        length: usize,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        if length == 0 {
            return Err(BoardError::InvalidShipLength);
        }
        let mut overlaps = false;
        for i in 0..length {
            let cell = orientation.step(anchor, i);
            if !cell.in_bounds(self.size) {
                return Err(BoardError::ShipOutOfBounds);
            }
            overlaps |= self.ship_map.contains(cell);
        }
        if overlaps {
            return Err(BoardError::ShipOverlaps);
        }
        Ok(())
    }

    /// `true` when a ship of `length` anchored at `anchor` stays on the board
    /// and touches no placed ship.
    pub fn can_place(&self, anchor: Coord, length: usize, orientation: Orientation) -> bool {
        self.check_placement(anchor, length, orientation).is_ok()
    }

    /// Place `ship` at `anchor`. The board is unchanged on error.
    /// With `reveal`, the ship's cells render as ship marks.
    pub fn place_ship(
        &mut self,
        mut ship: Ship,
        anchor: Coord,
        orientation: Orientation,
        reveal: bool,
    ) -> Result<(), BoardError> {
        self.check_placement(anchor, ship.length(), orientation)?;
        ship.place(anchor, orientation);
        for &cell in ship.cells() {
            self.ship_map.insert(cell)?;
            if reveal {
                self.revealed.insert(cell)?;
            }
        }
        debug!(
            "placed {} at {} ({:?})",
            ship.ship_type().name(),
            anchor,
            orientation
        );
        self.ships.push(ship);
        Ok(())
    }

    /// Sample one random anchor and orientation for a ship of `length`.
    /// Returns it only if the placement would be legal.
    pub fn try_place_once<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        length: usize,
    ) -> Option<(Coord, Orientation)> {
        if length == 0 || length > self.size {
            return None;
        }
        let orient = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let max_r = if orient == Orientation::Vertical {
            self.size - length
        } else {
            self.size - 1
        };
        let max_c = if orient == Orientation::Horizontal {
            self.size - length
        } else {
            self.size - 1
        };
        let anchor = Coord::new(rng.random_range(0..=max_r), rng.random_range(0..=max_c));
        if self.can_place(anchor, length, orient) {
            Some((anchor, orient))
        } else {
            None
        }
    }

    fn place_random<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        ship_type: ShipType,
        reveal: bool,
    ) -> Result<(), BoardError> {
        let length = ship_type.length();
        if length == 0 {
            return Err(BoardError::InvalidShipLength);
        }
        for attempt in 1..=PLACEMENT_ATTEMPTS {
            if let Some((anchor, orient)) = self.try_place_once(rng, length) {
                trace!("{} placed on attempt {}", ship_type.name(), attempt);
                return self.place_ship(Ship::new(ship_type), anchor, orient, reveal);
            }
        }
        warn!(
            "gave up placing {} (length {}) on a {}x{} board",
            ship_type.name(),
            length,
            self.size,
            self.size
        );
        Err(BoardError::PlacementExhausted {
            length,
            attempts: PLACEMENT_ATTEMPTS,
        })
    }

    /// Randomly place `count` ships of `ship_type`.
    ///
    /// Each ship gets [`PLACEMENT_ATTEMPTS`] tries; ships placed before a
    /// `PlacementExhausted` failure remain on the board.
    pub fn place_ships_randomly<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        count: usize,
        ship_type: ShipType,
        reveal: bool,
    ) -> Result<(), BoardError> {
        for _ in 0..count {
            self.place_random(rng, ship_type, reveal)?;
        }
        Ok(())
    }

    /// Randomly place one ship per entry of `fleet`.
    pub fn place_fleet_randomly<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        fleet: &[ShipType],
        reveal: bool,
    ) -> Result<(), BoardError> {
        for &ship_type in fleet {
            self.place_random(rng, ship_type, reveal)?;
        }
        Ok(())
    }

    /// Process a guess at `coord`, marking hits/misses and reporting the result.
    ///
    /// Out-of-bounds and repeated guesses come back as
    /// [`GuessOutcome::Invalid`] and leave the board untouched.
    pub fn process_guess(&mut self, coord: Coord) -> GuessOutcome {
        if !coord.in_bounds(self.size) {
            return GuessOutcome::Invalid(InvalidGuess::OutOfBounds);
        }
        if self.guessed.contains(coord) {
            return GuessOutcome::Invalid(InvalidGuess::AlreadyGuessed);
        }
        let _ = self.guessed.insert(coord);

        match self.ships.iter().position(|s| s.has_coordinate(coord)) {
            Some(idx) => {
                let ship = &mut self.ships[idx];
                ship.hit(coord);
                let _ = self.hits.insert(coord);
                let sunk = ship.is_sunk();
                if sunk {
                    debug!("{} sunk at {}", ship.ship_type().name(), coord);
                }
                GuessOutcome::Hit {
                    coord,
                    ship: idx,
                    name: ship.ship_type().name(),
                    sunk,
                }
            }
            None => {
                let _ = self.misses.insert(coord);
                GuessOutcome::Miss { coord }
            }
        }
    }

    /// Returns `true` when all ships are sunk, including when there are none.
    pub fn all_ships_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }

    /// Number of ships still afloat.
    pub fn remaining_ships(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_sunk()).count()
    }

    /// What to draw at `coord`: hit, then miss, then (unless `hide_ships`)
    /// a revealed ship, then empty water.
    pub fn cell_display(&self, coord: Coord, hide_ships: bool) -> CellDisplay {
        if self.hits.contains(coord) {
            CellDisplay::Hit
        } else if self.misses.contains(coord) {
            CellDisplay::Miss
        } else if !hide_ships && self.revealed.contains(coord) {
            CellDisplay::Ship
        } else {
            CellDisplay::Empty
        }
    }

    /// Remove every ship and forget every guess.
    pub fn reset(&mut self) {
        self.ships.clear();
        self.ship_map.clear();
        self.revealed.clear();
        self.guessed.clear();
        self.hits.clear();
        self.misses.clear();
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  size: {},\n  ship_map: {:?},\n  hits: {:?},\n  misses: {:?},\n  ships: {:?}\n}}",
            self.size, self.ship_map, self.hits, self.misses, self.ships
        )
    }
}
