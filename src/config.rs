use alloc::vec::Vec;

use crate::common::ConfigError;
use crate::ship::ShipType;

pub const BOARD_SIZE: usize = 10;
/// Largest board whose columns can be labelled with a single letter.
pub const MAX_BOARD_SIZE: usize = 26;
pub const NUM_SHIPS: usize = 5;
pub const FLEET: [ShipType; NUM_SHIPS] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Cruiser", 3),
    ShipType::new("Submarine", 3),
    ShipType::new("Destroyer", 2),
];

/// Random placement tries per ship before giving up.
pub const PLACEMENT_ATTEMPTS: usize = 100;

/// Canonical name for a ship of the given length when a fleet is described
/// by lengths alone.
pub fn ship_type_for_length(length: usize) -> ShipType {
    let name = match length {
        5 => "Carrier",
        4 => "Battleship",
        3 => "Cruiser",
        2 => "Destroyer",
        1 => "Patrol Boat",
        _ => "Dreadnought",
    };
    ShipType::new(name, length)
}

/// Board size and fleet for one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    board_size: usize,
    fleet: Vec<ShipType>,
}

impl GameConfig {
    /// Validate and build a configuration.
    pub fn new(board_size: usize, fleet: Vec<ShipType>) -> Result<Self, ConfigError> {
        if board_size == 0 || board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::BoardSize {
                size: board_size,
                max: MAX_BOARD_SIZE,
            });
        }
        if fleet.is_empty() {
            return Err(ConfigError::EmptyFleet);
        }
        for ship in fleet.iter() {
            if ship.length() == 0 {
                return Err(ConfigError::ZeroLengthShip);
            }
            if ship.length() > board_size {
                return Err(ConfigError::ShipTooLong {
                    length: ship.length(),
                    size: board_size,
                });
            }
        }
        Ok(Self { board_size, fleet })
    }

    /// Build a configuration from ship lengths, naming each ship by length.
    pub fn from_lengths(board_size: usize, lengths: &[usize]) -> Result<Self, ConfigError> {
        let fleet = lengths.iter().map(|&l| ship_type_for_length(l)).collect();
        Self::new(board_size, fleet)
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }

    pub fn fleet(&self) -> &[ShipType] {
        &self.fleet
    }

    /// Most guesses a seat may take before the game is abandoned.
    pub fn turn_limit(&self) -> usize {
        2 * self.board_size * self.board_size
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            fleet: FLEET.to_vec(),
        }
    }
}
