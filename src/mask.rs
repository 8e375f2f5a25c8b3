//! Fixed-size cell masks packed into a single unsigned integer.
//!
//! A `CellMask<T, N>` stores one bit per cell of an `N×N` grid. Bit `y * N + x`
//! holds the cell at column `x`, row `y`. The type is `Copy`, allocation free
//! and usable without `std`.

use core::fmt;
use core::ops::{BitAnd, BitOr, BitOrAssign};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::common::Position;

/// Errors returned by mask operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskError {
    /// `N * N` does not fit in the bits of `T`.
    SizeTooLarge { n: usize, capacity: usize },
    /// Position lies outside the `N×N` grid.
    OutOfBounds { x: usize, y: usize },
}

impl fmt::Display for MaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaskError::SizeTooLarge { n, capacity } => {
                write!(f, "{}x{} grid does not fit in {} bits", n, n, capacity)
            }
            MaskError::OutOfBounds { x, y } => write!(f, "cell ({}, {}) is off the grid", x, y),
        }
    }
}

/// Set of cells on an `N×N` grid.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CellMask<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> CellMask<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    const CELLS: usize = N * N;

    /// Empty mask. Use [`CellMask::try_new`] when `N` is not known to fit `T`.
    #[inline]
    pub fn new() -> Self {
        CellMask { bits: T::zero() }
    }

    /// Empty mask, checking that `N * N` cells fit into `T`.
    pub fn try_new() -> Result<Self, MaskError> {
        let capacity = T::zero().count_zeros() as usize;
        if Self::CELLS > capacity {
            Err(MaskError::SizeTooLarge { n: N, capacity })
        } else {
            Ok(Self::new())
        }
    }

    /// Build a mask from a sequence of positions.
    pub fn from_positions<I>(positions: I) -> Result<Self, MaskError>
    where
        I: IntoIterator<Item = Position>,
    {
        let mut mask = Self::new();
        for pos in positions {
            mask.insert(pos)?;
        }
        Ok(mask)
    }

    #[inline]
    fn index(pos: Position) -> Result<usize, MaskError> {
        let (x, y) = (pos.x as usize, pos.y as usize);
        if x >= N || y >= N {
            return Err(MaskError::OutOfBounds { x, y });
        }
        Ok(y * N + x)
    }

    /// Whether `pos` is in the set.
    pub fn contains(&self, pos: Position) -> Result<bool, MaskError> {
        let idx = Self::index(pos)?;
        Ok((self.bits >> idx) & T::one() != T::zero())
    }

    /// Add `pos` to the set.
    pub fn insert(&mut self, pos: Position) -> Result<(), MaskError> {
        let idx = Self::index(pos)?;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    /// Remove `pos` from the set.
    pub fn remove(&mut self, pos: Position) -> Result<(), MaskError> {
        let idx = Self::index(pos)?;
        self.bits = self.bits & !(T::one() << idx);
        Ok(())
    }

    /// Number of cells in the set.
    #[inline]
    pub fn count(&self) -> usize {
        self.bits.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// True when the two masks share at least one cell.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        !(self.bits & other.bits).is_zero()
    }

    /// Positions in the set, row by row.
    pub fn iter(&self) -> Cells<T, N> {
        Cells {
            bits: self.bits,
            idx: 0,
        }
    }
}

impl<T, const N: usize> Default for CellMask<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for CellMask<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(|p| (p.x, p.y))).finish()
    }
}

/// Iterator over the positions held by a [`CellMask`].
#[derive(Clone)]
pub struct Cells<T, const N: usize> {
    bits: T,
    idx: usize,
}

impl<T, const N: usize> Iterator for Cells<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if (self.bits >> idx) & T::one() != T::zero() {
                return Some(Position::new((idx % N) as u8, (idx / N) as u8));
            }
        }
        None
    }
}

impl<T, const N: usize> BitAnd for CellMask<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        CellMask {
            bits: self.bits & rhs.bits,
        }
    }
}

impl<T, const N: usize> BitOr for CellMask<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        CellMask {
            bits: self.bits | rhs.bits,
        }
    }
}

impl<T, const N: usize> BitOrAssign for CellMask<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits = self.bits | rhs.bits;
    }
}
