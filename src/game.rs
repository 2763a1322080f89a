//! Turn sequencing between two seats.

use log::{debug, info};
use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::{GameError, GuessOutcome},
    config::GameConfig,
    coord::Coord,
    player::{OpponentView, Player},
};

/// One side of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    pub fn other(self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Seat),
}

/// Per-seat tally of a finished game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct SeatStats {
    pub guesses: usize,
    pub hits: usize,
    pub ships_remaining: usize,
}

/// Summary of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct GameReport {
    pub winner: Seat,
    pub turns: usize,
    pub first: SeatStats,
    pub second: SeatStats,
}

/// Both boards of a game plus whose turn it is.
///
/// Each seat's board holds that seat's own fleet; a seat fires at the
/// other seat's board.
pub struct GameEngine {
    config: GameConfig,
    boards: [Board; 2],
    stats: [SeatStats; 2],
    turn: Seat,
}

impl GameEngine {
    /// Create an engine with two empty boards; `First` moves first.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        let size = config.board_size();
        Ok(Self {
            boards: [Board::new(size)?, Board::new(size)?],
            config,
            stats: [SeatStats::default(); 2],
            turn: Seat::First,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Board holding `seat`'s own fleet.
    pub fn board(&self, seat: Seat) -> &Board {
        &self.boards[seat.index()]
    }

    /// Mutable board for ship placement.
    pub fn board_mut(&mut self, seat: Seat) -> &mut Board {
        &mut self.boards[seat.index()]
    }

    /// Seat whose move it is.
    pub fn turn(&self) -> Seat {
        self.turn
    }

    /// Let both players place the configured fleet on their own boards.
    pub fn setup(
        &mut self,
        rng: &mut SmallRng,
        first: &mut dyn Player,
        second: &mut dyn Player,
    ) -> Result<(), GameError> {
        let fleet = self.config.fleet().to_vec();
        first.place_fleet(rng, &mut self.boards[0], &fleet)?;
        second.place_fleet(rng, &mut self.boards[1], &fleet)?;
        info!(
            "fleets placed: {} ships each on a {}x{} board",
            fleet.len(),
            self.config.board_size(),
            self.config.board_size()
        );
        Ok(())
    }

    /// Fire at `coord` on behalf of the seat to move.
    ///
    /// A valid guess passes the turn unless it wins the game; a rejected
    /// guess leaves the turn where it was.
    pub fn fire(&mut self, coord: Coord) -> Result<GuessOutcome, GameError> {
        if self.winner().is_some() {
            return Err(GameError::GameOver);
        }
        let attacker = self.turn;
        let defender = attacker.other();
        let outcome = self.boards[defender.index()].process_guess(coord);
        if !outcome.is_valid() {
            return Ok(outcome);
        }
        let stats = &mut self.stats[attacker.index()];
        stats.guesses += 1;
        if outcome.is_hit() {
            stats.hits += 1;
        }
        if self.boards[defender.index()].all_ships_sunk() {
            info!("{:?} sank the last ship at {}", attacker, coord);
        } else {
            self.turn = defender;
        }
        Ok(outcome)
    }

    /// Seat whose opponent has no ship afloat. A board without ships counts
    /// as sunk; when both are, the seat to move takes it.
    fn winner(&self) -> Option<Seat> {
        [self.turn, self.turn.other()]
            .into_iter()
            .find(|seat| self.board(seat.other()).all_ships_sunk())
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(seat) => GameStatus::Won(seat),
            None => GameStatus::InProgress,
        }
    }

    /// Valid guesses made by both seats so far.
    pub fn turns(&self) -> usize {
        self.stats[0].guesses + self.stats[1].guesses
    }

    /// Summary of a finished game, `None` while it is still running.
    pub fn report(&self) -> Option<GameReport> {
        let winner = self.winner()?;
        let tally = |seat: Seat| SeatStats {
            ships_remaining: self.board(seat).remaining_ships(),
            ..self.stats[seat.index()]
        };
        Some(GameReport {
            winner,
            turns: self.turns(),
            first: tally(Seat::First),
            second: tally(Seat::Second),
        })
    }
}

/// Run turns until one fleet is sunk.
///
/// Rejected guesses go back to the player that made them; computer players
/// turn them into [`GameError::InvalidMove`]. A game that runs past
/// [`GameConfig::turn_limit`] is abandoned with
/// [`GameError::TurnLimitExceeded`].
pub fn play_game<'a>(
    engine: &mut GameEngine,
    first: &'a mut (dyn Player + 'a),
    second: &'a mut (dyn Player + 'a),
    rng: &mut SmallRng,
) -> Result<GameReport, GameError> {
    let limit = engine.config().turn_limit();
    loop {
        if let Some(report) = engine.report() {
            return Ok(report);
        }
        if engine.turns() >= limit {
            return Err(GameError::TurnLimitExceeded { turns: limit });
        }
        let seat = engine.turn();
        let (attacker, defender) = match seat {
            Seat::First => (&mut *first, &mut *second),
            Seat::Second => (&mut *second, &mut *first),
        };
        let coord = attacker.select_target(
            rng,
            engine.board(seat),
            OpponentView::new(engine.board(seat.other())),
        )?;
        let outcome = engine.fire(coord)?;
        match outcome {
            GuessOutcome::Invalid(reason) => {
                debug!("{:?} guess at {} rejected: {}", seat, coord, reason);
                attacker.handle_rejected_guess(coord, reason)?;
            }
            _ => {
                attacker.handle_guess_result(&outcome);
                defender.handle_opponent_guess(&outcome);
            }
        }
    }
}
