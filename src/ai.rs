//! Hunt-and-finish targeting for the computer opponent.
//!
//! In [`Mode::Search`] the adversary fires at random checkerboard cells,
//! which any straight ship of length two or more must touch. A hit switches
//! it to [`Mode::Finish`], where it works through a queue of candidate cells
//! around the damaged ship. Once two hits line up, the cells just past both
//! ends of the line jump the queue.

use alloc::vec::Vec;
use log::{debug, trace, warn};
use rand::Rng;

use crate::common::{GuessOutcome, StrategyError};
use crate::coord::Coord;
use crate::grid::CellSet;

/// Targeting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// No live lead; sweep the board.
    Search,
    /// Work on a damaged ship that is still afloat.
    Finish,
}

/// Priority of a queued candidate. Higher tiers are served first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    /// Orthogonal neighbour of a hit.
    Adjacent,
    /// Extends a line of two or more colinear hits.
    Line,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Candidate {
    coord: Coord,
    priority: Priority,
}

/// Stateful guessing strategy for one game against one opponent board.
///
/// Keeps its own record of what it has fired at; it never inspects the
/// opponent board directly.
#[derive(Debug, Clone)]
pub struct Adversary {
    size: usize,
    mode: Mode,
    queue: Vec<Candidate>,
    guessed: CellSet,
    hit_trail: Vec<Coord>,
}

impl Adversary {
    /// Fresh strategy for a `size×size` opponent board.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            mode: Mode::Search,
            queue: Vec::new(),
            guessed: CellSet::new(size),
            hit_trail: Vec::new(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Queued candidates in the order they would be served.
    pub fn candidates(&self) -> Vec<Coord> {
        let mut ordered: Vec<Candidate> = self.queue.clone();
        // stable sort keeps insertion order within a tier
        ordered.sort_by(|a, b| b.priority.cmp(&a.priority));
        ordered.into_iter().map(|c| c.coord).collect()
    }

    /// Hits recorded against the ship currently being finished.
    pub fn hit_trail(&self) -> &[Coord] {
        &self.hit_trail
    }

    /// Cells this strategy has already fired at.
    pub fn guessed(&self) -> &CellSet {
        &self.guessed
    }

    /// Forget everything and return to search mode.
    pub fn reset(&mut self) {
        self.mode = Mode::Search;
        self.queue.clear();
        self.guessed.clear();
        self.hit_trail.clear();
    }

    /// Choose the next cell to fire at and remember it.
    pub fn make_move<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Coord, StrategyError> {
        let coord = match self.next_candidate() {
            Some(coord) => coord,
            None => {
                if self.mode == Mode::Finish {
                    debug!("finish queue drained, back to search");
                    self.enter_search();
                }
                self.search(rng)?
            }
        };
        assert!(
            coord.in_bounds(self.size) && !self.guessed.contains(coord),
            "adversary chose an invalid target {}",
            coord
        );
        self.record(coord);
        trace!("adversary fires at {} ({:?})", coord, self.mode);
        Ok(coord)
    }

    /// Update beliefs with the outcome of the last move.
    pub fn process_result(&mut self, outcome: &GuessOutcome) {
        if let Some(coord) = outcome.coord() {
            if !coord.in_bounds(self.size) {
                warn!("ignoring result for {} off a {}x{} board", coord, self.size, self.size);
                return;
            }
        }
        match *outcome {
            GuessOutcome::Invalid(reason) => {
                debug!("ignoring rejected guess: {}", reason);
            }
            GuessOutcome::Hit { coord, sunk: true, name, .. } => {
                self.record(coord);
                debug!("sank {} at {}, back to search", name, coord);
                self.enter_search();
            }
            GuessOutcome::Hit { coord, .. } => {
                self.record(coord);
                self.mode = Mode::Finish;
                self.hit_trail.push(coord);
                self.remove_candidate(coord);
                for n in coord.neighbors(self.size) {
                    self.enqueue(n, Priority::Adjacent);
                }
                self.refine_from(coord);
            }
            GuessOutcome::Miss { coord } => {
                self.record(coord);
                if self.mode == Mode::Search {
                    return;
                }
                self.remove_candidate(coord);
                if self.queue.is_empty() && self.hit_trail.len() > 1 {
                    self.refine_all();
                }
                if self.queue.is_empty() {
                    debug!("lead at {:?} exhausted, back to search", self.hit_trail.first());
                    self.enter_search();
                }
            }
        }
    }

    fn record(&mut self, coord: Coord) {
        if let Err(e) = self.guessed.insert(coord) {
            warn!("adversary could not record {}: {}", coord, e);
        }
    }

    fn enter_search(&mut self) {
        self.mode = Mode::Search;
        self.queue.clear();
        self.hit_trail.clear();
    }

    /// Pop the highest-priority candidate, earliest first within a tier.
    fn next_candidate(&mut self) -> Option<Coord> {
        self.queue.retain(|c| !self.guessed.contains(c.coord));
        let top = self.queue.iter().map(|c| c.priority).max()?;
        let idx = self.queue.iter().position(|c| c.priority == top)?;
        Some(self.queue.remove(idx).coord)
    }

    fn search<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Coord, StrategyError> {
        let open: Vec<Coord> = (0..self.size * self.size)
            .map(|i| Coord::from_index(i, self.size))
            .filter(|c| !self.guessed.contains(*c))
            .collect();
        let even: Vec<Coord> = open.iter().copied().filter(Coord::is_even_parity).collect();
        let pool = if even.is_empty() { &open } else { &even };
        if pool.is_empty() {
            return Err(StrategyError::ExhaustedBoard);
        }
        Ok(pool[rng.random_range(0..pool.len())])
    }

    fn enqueue(&mut self, coord: Coord, priority: Priority) {
        if !coord.in_bounds(self.size) || self.guessed.contains(coord) {
            return;
        }
        match self.queue.iter_mut().find(|c| c.coord == coord) {
            Some(existing) => existing.priority = existing.priority.max(priority),
            None => self.queue.push(Candidate { coord, priority }),
        }
    }

    fn remove_candidate(&mut self, coord: Coord) {
        self.queue.retain(|c| c.coord != coord);
    }

    /// Queue the cells past both ends of every colinear run of trail hits
    /// that passes through `pivot`.
    fn refine_from(&mut self, pivot: Coord) {
        let row: Vec<usize> = self
            .hit_trail
            .iter()
            .filter(|h| h.row == pivot.row)
            .map(|h| h.col)
            .collect();
        if row.len() >= 2 {
            self.extend_line(row, |col| Coord::new(pivot.row, col));
        }
        let col: Vec<usize> = self
            .hit_trail
            .iter()
            .filter(|h| h.col == pivot.col)
            .map(|h| h.row)
            .collect();
        if col.len() >= 2 {
            self.extend_line(col, |row| Coord::new(row, pivot.col));
        }
    }

    fn refine_all(&mut self) {
        let trail = self.hit_trail.clone();
        for hit in trail {
            self.refine_from(hit);
        }
    }

    fn extend_line(&mut self, positions: Vec<usize>, at: impl Fn(usize) -> Coord) {
        let (Some(&lo), Some(&hi)) = (positions.iter().min(), positions.iter().max()) else {
            return;
        };
        if let Some(before) = lo.checked_sub(1) {
            self.enqueue(at(before), Priority::Line);
        }
        self.enqueue(at(hi + 1), Priority::Line);
    }
}
