#![cfg(feature = "std")]

use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};
use std::string::String;

use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::{BoardError, GameError, GuessOutcome, InvalidGuess},
    coord::Coord,
    input::{parse_coordinate, parse_placement},
    render::{legend, render_board, render_opponent},
    ship::{Ship, ShipType},
};

use super::{OpponentView, Player};

/// Interactive player reading commands from `input` and writing prompts and
/// boards to `output`.
pub struct CliPlayer<I: BufRead, O: Write> {
    input: I,
    output: O,
}

impl CliPlayer<StdinLock<'static>, Stdout> {
    /// Player on the process's stdin and stdout.
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<I: BufRead, O: Write> CliPlayer<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    /// Recover the output sink, e.g. to inspect what was printed.
    pub fn into_output(self) -> O {
        self.output
    }

    fn prompt(&mut self, text: &str) -> Result<String, GameError> {
        let _ = write!(self.output, "{}", text);
        let _ = self.output.flush();
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => Err(GameError::InputClosed),
            Ok(_) => Ok(line.trim().to_string()),
        }
    }

    fn say(&mut self, text: &str) {
        let _ = writeln!(self.output, "{}", text);
    }

    fn place_one(
        &mut self,
        rng: &mut SmallRng,
        board: &mut Board,
        ship_type: ShipType,
    ) -> Result<(), BoardError> {
        loop {
            let view = render_board(board, false);
            self.say(&view);
            let line = match self.prompt(&format!(
                "Place {} (length {}) as e.g. A5 H or A5 V, ENTER for random: ",
                ship_type.name(),
                ship_type.length()
            )) {
                Ok(line) => line,
                // no more input: finish the fleet at random
                Err(_) => String::new(),
            };
            if line.is_empty() {
                return board.place_ships_randomly(rng, 1, ship_type, true);
            }
            let (anchor, orientation) = match parse_placement(&line, board.size()) {
                Ok(p) => p,
                Err(e) => {
                    self.say(&format!("✗ {}", e));
                    continue;
                }
            };
            match board.place_ship(Ship::new(ship_type), anchor, orientation, true) {
                Ok(()) => {
                    self.say(&format!("✓ {} placed at {}", ship_type.name(), anchor));
                    return Ok(());
                }
                Err(e) => self.say(&format!("✗ {}", e)),
            }
        }
    }
}

impl<I: BufRead, O: Write> Player for CliPlayer<I, O> {
    fn place_fleet(
        &mut self,
        rng: &mut SmallRng,
        board: &mut Board,
        fleet: &[ShipType],
    ) -> Result<(), BoardError> {
        self.say("\nSHIP PLACEMENT");
        for &ship_type in fleet {
            self.place_one(rng, board, ship_type)?;
        }
        Ok(())
    }

    fn select_target(
        &mut self,
        _rng: &mut SmallRng,
        own: &Board,
        opponent: OpponentView<'_>,
    ) -> Result<Coord, GameError> {
        let view = format!(
            "\nOpponent board ({} ships afloat):\n{}{}\n\nYour board:\n{}{}",
            opponent.remaining_ships(),
            render_opponent(opponent),
            legend(false),
            render_board(own, false),
            legend(true),
        );
        self.say(&view);
        loop {
            let line = self.prompt("Target (e.g. B7): ")?;
            match parse_coordinate(&line, opponent.size()) {
                Ok(coord) => return Ok(coord),
                Err(e) => self.say(&format!("✗ {}", e)),
            }
        }
    }

    fn handle_guess_result(&mut self, outcome: &GuessOutcome) {
        let msg = match *outcome {
            GuessOutcome::Hit { coord, name, sunk: true, .. } => {
                format!("{}: hit! You sank the {}!", coord, name)
            }
            GuessOutcome::Hit { coord, .. } => format!("{}: hit!", coord),
            GuessOutcome::Miss { coord } => format!("{}: miss.", coord),
            GuessOutcome::Invalid(_) => return,
        };
        self.say(&msg);
    }

    fn handle_opponent_guess(&mut self, outcome: &GuessOutcome) {
        let msg = match *outcome {
            GuessOutcome::Hit { coord, name, sunk: true, .. } => {
                format!("Opponent fires at {}: your {} was sunk!", coord, name)
            }
            GuessOutcome::Hit { coord, name, .. } => {
                format!("Opponent fires at {}: your {} was hit.", coord, name)
            }
            GuessOutcome::Miss { coord } => format!("Opponent fires at {}: miss.", coord),
            GuessOutcome::Invalid(_) => return,
        };
        self.say(&msg);
    }

    fn handle_rejected_guess(&mut self, coord: Coord, reason: InvalidGuess) -> Result<(), GameError> {
        self.say(&format!("✗ {}: {}", coord, reason));
        Ok(())
    }
}
