//! Minimum-press solver for the 5×5 Lights Out puzzle.
//!
//! Pressing a cell flips it and its orthogonal neighbours. Since pressing
//! twice is the same as not pressing at all, finding a set of presses that
//! clears a board is a linear system over GF(2). The solver reduces that
//! system with bit-packed Gaussian elimination and, when some presses are
//! left undetermined, searches the free variables for the assignment with
//! the fewest total presses.

pub mod bits;
pub mod board;
pub mod fixer;
pub mod free_variables;
pub mod gauss;
pub mod matrix;
pub mod optimizer;
pub mod report;
pub mod solution;
pub mod solver;
pub mod survey;

pub use bits::{Assignment, BitVector, Board, Row};
pub use board::Cell;
pub use optimizer::{BruteForce, Optimizer, ZeroValue};
pub use solution::Solution;
pub use solver::{BoardSolver, SolveResult};

/// Number of rows on the board.
pub const ROW_COUNT: u8 = 5;

/// Number of columns on the board.
pub const COLUMN_COUNT: u8 = 5;

/// Number of cells, which is also the number of variables and equations.
pub const CELL_COUNT: u8 = ROW_COUNT * COLUMN_COUNT;

/// Bit index of the augmented (right hand side) column of a matrix row.
pub const CONSTANT_COLUMN: u8 = CELL_COUNT;

/// Mask selecting the coefficient bits of a row, or every cell of a board.
pub const CELL_MASK: u32 = (1 << CELL_COUNT) - 1;
