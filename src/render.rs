//! Text rendering of boards. Everything drawn goes through
//! [`Board::cell_display`], so hit > miss > ship > water holds on screen.

use alloc::string::String;
use core::fmt::Write;

use crate::board::{Board, CellDisplay};
use crate::coord::Coord;
use crate::game::{GameEngine, Seat};
use crate::player::OpponentView;

/// Render a `size×size` grid with column letters and 1-based row numbers.
pub fn render_grid(size: usize, cell: impl Fn(Coord) -> CellDisplay) -> String {
    let mut out = String::new();
    out.push_str("   ");
    for c in 0..size {
        let _ = write!(out, " {}", (b'A' + (c % 26) as u8) as char);
    }
    out.push('\n');
    for r in 0..size {
        let _ = write!(out, "{:>2} ", r + 1);
        for c in 0..size {
            let _ = write!(out, " {}", cell(Coord::new(r, c)).glyph());
        }
        out.push('\n');
    }
    out
}

/// Render a player's board; `hide_ships` suppresses unhit ship marks.
pub fn render_board(board: &Board, hide_ships: bool) -> String {
    render_grid(board.size(), |coord| board.cell_display(coord, hide_ships))
}

/// Render what an attacker knows about the opponent's board.
pub fn render_opponent(view: OpponentView<'_>) -> String {
    render_grid(view.size(), |coord| view.cell(coord))
}

/// One-line legend for the glyphs used above.
pub fn legend(show_ships: bool) -> &'static str {
    if show_ships {
        "Legend: S=Ship  X=Hit  o=Miss  .=Water"
    } else {
        "Legend: X=Hit  o=Miss  .=Unknown"
    }
}

/// Both boards of a game, hits and misses only for the second seat.
pub fn render_engine(engine: &GameEngine) -> String {
    let mut out = String::new();
    out.push_str("Opponent board:\n");
    out.push_str(&render_board(engine.board(Seat::Second), true));
    out.push_str("\nYour board:\n");
    out.push_str(&render_board(engine.board(Seat::First), false));
    out
}
