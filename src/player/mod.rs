//! Player trait and implementations
//!
//! This module defines the Player trait and provides concrete implementations:
//! - AiPlayer: search/finish targeting backed by [`crate::Adversary`]
//! - CliPlayer: Interactive command-line player

use rand::rngs::SmallRng;

use crate::{
    board::{Board, CellDisplay},
    common::{BoardError, GameError, GuessOutcome, InvalidGuess},
    coord::Coord,
    ship::ShipType,
};

/// Read-only view of the opponent's board with ships hidden.
#[derive(Clone, Copy)]
pub struct OpponentView<'a> {
    board: &'a Board,
}

impl<'a> OpponentView<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self { board }
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Cell as the attacker may see it: hits and misses only.
    pub fn cell(&self, coord: Coord) -> CellDisplay {
        self.board.cell_display(coord, true)
    }

    pub fn remaining_ships(&self) -> usize {
        self.board.remaining_ships()
    }
}

/// Interface implemented by different player types.
///
/// A Player is responsible for:
/// - Placing ships on its own board
/// - Selecting targets to attack
/// - Handling feedback from guesses
pub trait Player {
    /// Place every ship of `fleet` onto the provided board.
    fn place_fleet(
        &mut self,
        rng: &mut SmallRng,
        board: &mut Board,
        fleet: &[ShipType],
    ) -> Result<(), BoardError>;

    /// Choose the next target on the opponent's board.
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        own: &Board,
        opponent: OpponentView<'_>,
    ) -> Result<Coord, GameError>;

    /// Inform the player of the result of its last valid guess.
    fn handle_guess_result(&mut self, _outcome: &GuessOutcome) {}

    /// Inform the player of an opponent guess against its board.
    fn handle_opponent_guess(&mut self, _outcome: &GuessOutcome) {}

    /// Called when the board rejected the player's guess. Returning `Ok`
    /// gives the player another try on the same turn.
    fn handle_rejected_guess(&mut self, coord: Coord, reason: InvalidGuess) -> Result<(), GameError> {
        Err(GameError::InvalidMove { coord, reason })
    }
}

pub mod ai;
pub use ai::AiPlayer;

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::CliPlayer;
