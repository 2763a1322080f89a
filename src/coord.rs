//! Board coordinates.

use core::fmt;

/// A `(row, col)` cell position on an `N×N` board, both zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns `true` when the coordinate lies on a `size×size` board.
    #[inline]
    pub fn in_bounds(&self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// Row-major key of the coordinate on a `size×size` board.
    ///
    /// Distinct for every in-bounds pair, so `(1, 11)` and `(11, 1)` never
    /// collide on boards of ten or more columns.
    #[inline]
    pub fn index(&self, size: usize) -> usize {
        self.row * size + self.col
    }

    /// Inverse of [`Coord::index`].
    #[inline]
    pub fn from_index(index: usize, size: usize) -> Self {
        Self::new(index / size, index % size)
    }

    /// Checkerboard colour: `true` when `row + col` is even.
    #[inline]
    pub fn is_even_parity(&self) -> bool {
        (self.row + self.col) % 2 == 0
    }

    /// The orthogonal neighbours that stay on a `size×size` board, in
    /// up, down, left, right order.
    pub fn neighbors(&self, size: usize) -> impl Iterator<Item = Coord> {
        let Coord { row, col } = *self;
        [
            row.checked_sub(1).map(|r| Coord::new(r, col)),
            Some(Coord::new(row + 1, col)),
            col.checked_sub(1).map(|c| Coord::new(row, c)),
            Some(Coord::new(row, col + 1)),
        ]
        .into_iter()
        .flatten()
        .filter(move |c| c.in_bounds(size))
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Coord::new(row, col)
    }
}

/// Human-facing label: column letter followed by the 1-based row (`B7`).
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.col < 26 {
            write!(f, "{}{}", (b'A' + self.col as u8) as char, self.row + 1)
        } else {
            write!(f, "({}, {})", self.row, self.col)
        }
    }
}
