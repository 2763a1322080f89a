use rand::rngs::SmallRng;

use crate::{
    ai::Adversary,
    board::Board,
    common::{BoardError, GameError, GuessOutcome},
    coord::Coord,
    ship::ShipType,
};

use super::{OpponentView, Player};

/// Computer player driven by the search/finish [`Adversary`].
pub struct AiPlayer {
    adversary: Adversary,
}

impl AiPlayer {
    /// AI for a game played on `size×size` boards.
    pub fn new(size: usize) -> Self {
        Self {
            adversary: Adversary::new(size),
        }
    }

    pub fn adversary(&self) -> &Adversary {
        &self.adversary
    }
}

impl Player for AiPlayer {
    fn place_fleet(
        &mut self,
        rng: &mut SmallRng,
        board: &mut Board,
        fleet: &[ShipType],
    ) -> Result<(), BoardError> {
        board.place_fleet_randomly(rng, fleet, false)
    }

    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        _own: &Board,
        _opponent: OpponentView<'_>,
    ) -> Result<Coord, GameError> {
        Ok(self.adversary.make_move(rng)?)
    }

    fn handle_guess_result(&mut self, outcome: &GuessOutcome) {
        self.adversary.process_result(outcome);
    }
}
