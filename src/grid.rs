//! A runtime-sized bit set over the cells of an `N×N` board.
//!
//! Cells are keyed by [`Coord::index`] and packed into words of the unsigned
//! integer `T`, so membership tests and unions stay cheap regardless of the
//! board size chosen at startup.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::ops::{BitAnd, BitOr};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::coord::Coord;

/// Errors returned by cell set operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Row or column index is out of bounds `[0..N)`.
    IndexOutOfBounds { row: usize, col: usize },
    /// `size * size` cells do not fit in `usize`.
    SizeOverflow { size: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
            GridError::SizeOverflow { size } => {
                write!(f, "SizeOverflow: {}x{} cells", size, size)
            }
        }
    }
}

/// Set of cells on an `N×N` board, stored one bit per cell.
#[derive(Clone, PartialEq, Eq)]
pub struct CellSet<T = u64>
where
    T: PrimInt + Unsigned + Zero,
{
    size: usize,
    words: Vec<T>,
}

impl<T> CellSet<T>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn word_bits() -> usize {
        T::zero().count_zeros() as usize
    }

    #[inline]
    fn locate(&self, coord: Coord) -> (usize, usize) {
        let idx = coord.index(self.size);
        (idx / Self::word_bits(), idx % Self::word_bits())
    }

    #[inline]
    fn check_bounds(&self, coord: Coord) -> Result<(), GridError> {
        if coord.in_bounds(self.size) {
            Ok(())
        } else {
            Err(GridError::IndexOutOfBounds {
                row: coord.row,
                col: coord.col,
            })
        }
    }

    /// Create an empty set for a `size×size` board.
    ///
    /// # Panics
    ///
    /// Panics if `size * size` overflows `usize`; use [`CellSet::try_new`]
    /// for untrusted sizes.
    pub fn new(size: usize) -> Self {
        match Self::try_new(size) {
            Ok(set) => set,
            Err(e) => panic!("{}", e),
        }
    }

    /// Create an empty set, failing when the cell count overflows `usize`.
    pub fn try_new(size: usize) -> Result<Self, GridError> {
        let cells = size.checked_mul(size).ok_or(GridError::SizeOverflow { size })?;
        let words = cells.div_ceil(Self::word_bits());
        Ok(CellSet {
            size,
            words: vec![T::zero(); words],
        })
    }

    /// Board edge length this set was created for.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells in the set.
    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|w| w.is_zero())
    }

    /// Membership test; out-of-bounds coordinates are never members.
    pub fn contains(&self, coord: Coord) -> bool {
        if !coord.in_bounds(self.size) {
            return false;
        }
        let (w, b) = self.locate(coord);
        ((self.words[w] >> b) & T::one()) != T::zero()
    }

    /// Add `coord`. Returns `true` if it was not already present.
    pub fn insert(&mut self, coord: Coord) -> Result<bool, GridError> {
        self.check_bounds(coord)?;
        let (w, b) = self.locate(coord);
        let bit = T::one() << b;
        let fresh = (self.words[w] & bit).is_zero();
        self.words[w] = self.words[w] | bit;
        Ok(fresh)
    }

    /// Remove `coord`. Returns `true` if it was present.
    pub fn remove(&mut self, coord: Coord) -> Result<bool, GridError> {
        self.check_bounds(coord)?;
        let (w, b) = self.locate(coord);
        let bit = T::one() << b;
        let present = !(self.words[w] & bit).is_zero();
        self.words[w] = self.words[w] & !bit;
        Ok(present)
    }

    /// Clears every cell.
    pub fn clear(&mut self) {
        for w in self.words.iter_mut() {
            *w = T::zero();
        }
    }

    /// `true` when the two sets share no cell.
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.words
            .iter()
            .zip(other.words.iter())
            .all(|(a, b)| (*a & *b).is_zero())
    }

    /// Creates a set from an iterator over coordinates.
    pub fn from_coords<I>(size: usize, iter: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = Coord>,
    {
        let mut set = Self::new(size);
        for coord in iter {
            set.insert(coord)?;
        }
        Ok(set)
    }

    /// Members in row-major order.
    pub fn iter(&self) -> Cells<'_, T> {
        Cells { set: self, idx: 0 }
    }

    fn zip_with(&self, other: &Self, op: impl Fn(T, T) -> T) -> Self {
        debug_assert_eq!(self.size, other.size, "cell sets of different boards");
        CellSet {
            size: self.size,
            words: self
                .words
                .iter()
                .zip(other.words.iter())
                .map(|(a, b)| op(*a, *b))
                .collect(),
        }
    }
}

impl<T> fmt::Debug for CellSet<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CellSet<{}>:", self.size)?;
        for r in 0..self.size {
            for c in 0..self.size {
                let bit = if self.contains(Coord::new(r, c)) {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the members of a [`CellSet`].
#[derive(Clone, Copy)]
pub struct Cells<'a, T>
where
    T: PrimInt + Unsigned + Zero,
{
    set: &'a CellSet<T>,
    idx: usize,
}

impl<T> Iterator for Cells<'_, T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        let size = self.set.size;
        while self.idx < size * size {
            let coord = Coord::from_index(self.idx, size);
            self.idx += 1;
            if self.set.contains(coord) {
                return Some(coord);
            }
        }
        None
    }
}

/// Union of two sets over the same board.
impl<T> BitOr for &CellSet<T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = CellSet<T>;

    fn bitor(self, rhs: Self) -> CellSet<T> {
        self.zip_with(rhs, |a, b| a | b)
    }
}

/// Intersection of two sets over the same board.
impl<T> BitAnd for &CellSet<T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = CellSet<T>;

    fn bitand(self, rhs: Self) -> CellSet<T> {
        self.zip_with(rhs, |a, b| a & b)
    }
}
