use std::fmt;

use bitvec::prelude::*;
use itertools::Itertools;

use crate::{matrix::flip_vector, BitVector, Board, Cell, CELL_COUNT, CELL_MASK, COLUMN_COUNT};

/// A set of presses: bit `i` means "press cell `i`".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Solution(u32);

impl Solution {
    pub fn from_bits(bits: u32) -> Self {
        debug_assert!(bits & !CELL_MASK == 0, "solution {bits} has bits outside the grid");
        Self(bits)
    }

    pub fn bits(self) -> u32 {
        self.0
    }

    pub fn press_count(self) -> u32 {
        self.0.count_ones()
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn contains(self, cell: Cell) -> bool {
        self.0.test_bit(cell.index())
    }

    /// Pressed cells in row-major order.
    pub fn presses(&self) -> impl Iterator<Item = Cell> + '_ {
        self.0.view_bits::<Lsb0>()[..CELL_COUNT as usize]
            .iter_ones()
            .map(Cell::from_index)
    }

    /// The board these presses switch on when applied to an all-off grid.
    /// A solution solves exactly the board it toggles.
    pub fn toggled(self) -> Board {
        self.presses()
            .fold(0, |board, cell| board ^ flip_vector(cell.index()))
    }
}

impl From<Solution> for u32 {
    fn from(solution: Solution) -> Self {
        solution.0
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grid = self.0.view_bits::<Lsb0>()[..CELL_COUNT as usize]
            .chunks(COLUMN_COUNT as usize)
            .map(|row| row.iter().map(|bit| if *bit { '#' } else { '.' }).join(""))
            .join("\n");
        write!(f, "{grid}")
    }
}
