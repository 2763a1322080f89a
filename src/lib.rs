#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod ai;
mod board;
mod common;
mod config;
mod coord;
mod game;
mod grid;
pub mod input;
#[cfg(feature = "std")]
mod logging;
pub mod player;
pub mod render;
mod ship;

pub use ai::*;
pub use board::*;
pub use common::*;
pub use config::*;
pub use coord::Coord;
pub use game::*;
pub use grid::{CellSet, Cells, GridError};
pub use input::{parse_coordinate, parse_placement, ParseCoordError};
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
pub use render::{render_board, render_engine, render_opponent};
pub use player::{AiPlayer, OpponentView, Player};
#[cfg(feature = "std")]
pub use player::CliPlayer;
pub use ship::*;
