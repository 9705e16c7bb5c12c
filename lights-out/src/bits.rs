//! Bit-packed GF(2) vectors.
//!
//! A single `u32` plays several roles in the solver, always with the same
//! bit indexing:
//!
//! * a [`Board`]: bit `i` is cell `i` in row-major order,
//! * a matrix [`Row`]: bits `0..25` are the coefficients of the presses and
//!   bit [`CONSTANT_COLUMN`] is the right hand side,
//! * an [`Assignment`]: bit `k` is the value of the `k`-th free variable,
//! * a solution: bit `i` means "press cell `i`".
//!
//! Addition over GF(2) is XOR, so whole rows are combined with `^`.

use crate::{CELL_MASK, CONSTANT_COLUMN};

/// Initial on/off state of every cell.
pub type Board = u32;

/// One equation of the augmented matrix.
pub type Row = u32;

/// Values chosen for the free variables, in analyzer order.
pub type Assignment = u32;

pub trait BitVector: Copy {
    fn test_bit(self, index: u8) -> bool;
    fn set_bit(self, index: u8) -> Self;
    fn clear_bit(self, index: u8) -> Self;
    fn flip_bit(self, index: u8) -> Self;

    /// Coefficient bits only, with the constant column masked out.
    fn coefficients(self) -> Self;

    /// Index of the lowest set coefficient bit, the column a reduced row
    /// solves for. `None` for rows without coefficients.
    fn pivot_column(self) -> Option<u8>;

    /// Whether the constant column is set.
    fn constant(self) -> bool;
}

impl BitVector for u32 {
    #[inline]
    fn test_bit(self, index: u8) -> bool {
        self & (1 << index) != 0
    }

    #[inline]
    fn set_bit(self, index: u8) -> Self {
        self | (1 << index)
    }

    #[inline]
    fn clear_bit(self, index: u8) -> Self {
        self & !(1 << index)
    }

    #[inline]
    fn flip_bit(self, index: u8) -> Self {
        self ^ (1 << index)
    }

    #[inline]
    fn coefficients(self) -> Self {
        self & CELL_MASK
    }

    #[inline]
    fn pivot_column(self) -> Option<u8> {
        let coefficients = self.coefficients();
        (coefficients != 0).then(|| coefficients.trailing_zeros() as u8)
    }

    #[inline]
    fn constant(self) -> bool {
        self.test_bit(CONSTANT_COLUMN)
    }
}
