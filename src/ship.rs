//! Ship definitions, geometry and damage tracking.

use alloc::vec::Vec;
use core::fmt;

use crate::coord::Coord;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// The `i`-th cell of a ship anchored at `anchor`.
    #[inline]
    pub fn step(self, anchor: Coord, i: usize) -> Coord {
        match self {
            Orientation::Horizontal => Coord::new(anchor.row, anchor.col + i),
            Orientation::Vertical => Coord::new(anchor.row + i, anchor.col),
        }
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// One vessel: its type, the cells it covers once placed, and which of
/// those cells have been hit.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    ship_type: ShipType,
    placement: Option<(Coord, Orientation)>,
    cells: Vec<Coord>,
    hits: Vec<Coord>,
}

impl Ship {
    /// Create an unplaced ship.
    pub fn new(ship_type: ShipType) -> Self {
        Ship {
            ship_type,
            placement: None,
            cells: Vec::with_capacity(ship_type.length()),
            hits: Vec::new(),
        }
    }

    /// Fix the ship's geometry starting at `anchor`.
    ///
    /// Bounds and overlap are the board's business; calling this twice
    /// without [`Ship::reset`] simply overwrites the previous geometry.
    pub fn place(&mut self, anchor: Coord, orientation: Orientation) {
        self.cells.clear();
        self.cells
            .extend((0..self.ship_type.length()).map(|i| orientation.step(anchor, i)));
        self.placement = Some((anchor, orientation));
    }

    /// Register a hit at `coord`.
    /// Returns `true` only for a fresh hit on one of the ship's cells.
    pub fn hit(&mut self, coord: Coord) -> bool {
        if !self.has_coordinate(coord) || self.hits.contains(&coord) {
            return false;
        }
        self.hits.push(coord);
        true
    }

    /// Check if the ship is sunk (all segments hit).
    pub fn is_sunk(&self) -> bool {
        self.hits.len() == self.ship_type.length()
    }

    pub fn has_coordinate(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    /// Forget geometry and damage, returning the ship to its unplaced state.
    pub fn reset(&mut self) {
        self.placement = None;
        self.cells.clear();
        self.hits.clear();
    }

    /// Ship's type.
    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    pub fn length(&self) -> usize {
        self.ship_type.length()
    }

    pub fn is_placed(&self) -> bool {
        self.placement.is_some()
    }

    /// Anchor (first cell) of a placed ship.
    pub fn anchor(&self) -> Option<Coord> {
        self.placement.map(|(anchor, _)| anchor)
    }

    pub fn orientation(&self) -> Option<Orientation> {
        self.placement.map(|(_, orientation)| orientation)
    }

    /// Occupied cells, in placement order.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    pub fn hit_count(&self) -> usize {
        self.hits.len()
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", placement: {:?}, hits: {}/{} }}",
            self.ship_type.name(),
            self.placement,
            self.hits.len(),
            self.ship_type.length(),
        )
    }
}
