//! Common types for Broadside: guess outcomes and error enums.

use core::fmt;

use crate::coord::Coord;
use crate::grid::GridError;

/// Why a guess was rejected. Rejected guesses never change board state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidGuess {
    /// Coordinate lies outside the board.
    OutOfBounds,
    /// Coordinate was guessed earlier in this game.
    AlreadyGuessed,
}

impl fmt::Display for InvalidGuess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidGuess::OutOfBounds => write!(f, "Invalid coordinates"),
            InvalidGuess::AlreadyGuessed => write!(f, "Already guessed this position"),
        }
    }
}

/// Result of a guess attempt against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Guess rejected; the board is unchanged.
    Invalid(InvalidGuess),
    /// Guess missed all ships.
    Miss { coord: Coord },
    /// Guess hit the ship at index `ship`; `sunk` when it was the last
    /// intact segment.
    Hit {
        coord: Coord,
        ship: usize,
        name: &'static str,
        sunk: bool,
    },
}

impl GuessOutcome {
    pub fn is_valid(&self) -> bool {
        !matches!(self, GuessOutcome::Invalid(_))
    }

    pub fn is_hit(&self) -> bool {
        matches!(self, GuessOutcome::Hit { .. })
    }

    pub fn is_sunk(&self) -> bool {
        matches!(self, GuessOutcome::Hit { sunk: true, .. })
    }

    /// Targeted coordinate, for valid guesses.
    pub fn coord(&self) -> Option<Coord> {
        match self {
            GuessOutcome::Invalid(_) => None,
            GuessOutcome::Miss { coord } | GuessOutcome::Hit { coord, .. } => Some(*coord),
        }
    }

    /// Rejection reason, for invalid guesses.
    pub fn reason(&self) -> Option<InvalidGuess> {
        match self {
            GuessOutcome::Invalid(reason) => Some(*reason),
            _ => None,
        }
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying cell set error.
    GridError(GridError),
    /// Board must have at least one cell and a cell count that fits in `usize`.
    InvalidBoardSize,
    /// Ships must be at least one cell long.
    InvalidShipLength,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Ship out of bounds
    ShipOutOfBounds,
    /// Random placement found no legal position within its attempt budget.
    PlacementExhausted { length: usize, attempts: usize },
}

impl From<GridError> for BoardError {
    fn from(err: GridError) -> Self {
        BoardError::GridError(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::GridError(e) => write!(f, "Grid error: {}", e),
            BoardError::InvalidBoardSize => write!(f, "Board size must be at least 1 and size*size must fit in usize"),
            BoardError::InvalidShipLength => write!(f, "Ship length must be at least 1"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::PlacementExhausted { length, attempts } => write!(
                f,
                "Unable to place ship of length {} after {} attempts",
                length, attempts
            ),
        }
    }
}

/// Errors raised by the targeting strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyError {
    /// Every cell has already been guessed; the game should have ended.
    ExhaustedBoard,
}

impl fmt::Display for StrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyError::ExhaustedBoard => write!(f, "No coordinates left to guess"),
        }
    }
}

/// Errors in a game configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Board size outside `1..=max`.
    BoardSize { size: usize, max: usize },
    /// Fleet has no ships.
    EmptyFleet,
    /// A ship does not fit on the board in either orientation.
    ShipTooLong { length: usize, size: usize },
    /// A ship has length zero.
    ZeroLengthShip,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::BoardSize { size, max } => {
                write!(f, "Board size {} is outside 1..={}", size, max)
            }
            ConfigError::EmptyFleet => write!(f, "Fleet must contain at least one ship"),
            ConfigError::ShipTooLong { length, size } => write!(
                f,
                "Ship of length {} does not fit on a {}x{} board",
                length, size, size
            ),
            ConfigError::ZeroLengthShip => write!(f, "Ship length must be at least 1"),
        }
    }
}

/// Errors ending a game early.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    Board(BoardError),
    Strategy(StrategyError),
    Config(ConfigError),
    /// A computer player produced a guess the board rejected.
    InvalidMove { coord: Coord, reason: InvalidGuess },
    /// Neither side finished the opponent within the turn cap.
    TurnLimitExceeded { turns: usize },
    /// The game already has a winner.
    GameOver,
    /// The human player's input source closed.
    InputClosed,
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl From<StrategyError> for GameError {
    fn from(err: StrategyError) -> Self {
        GameError::Strategy(err)
    }
}

impl From<ConfigError> for GameError {
    fn from(err: ConfigError) -> Self {
        GameError::Config(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Board(e) => write!(f, "Board error: {}", e),
            GameError::Strategy(e) => write!(f, "Strategy error: {}", e),
            GameError::Config(e) => write!(f, "Configuration error: {}", e),
            GameError::InvalidMove { coord, reason } => {
                write!(f, "Invalid move at {}: {}", coord, reason)
            }
            GameError::TurnLimitExceeded { turns } => {
                write!(f, "Game did not finish within {} turns", turns)
            }
            GameError::GameOver => write!(f, "Game is already over"),
            GameError::InputClosed => write!(f, "Input closed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GridError {}
#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
#[cfg(feature = "std")]
impl std::error::Error for StrategyError {}
#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
#[cfg(feature = "std")]
impl std::error::Error for GameError {}
