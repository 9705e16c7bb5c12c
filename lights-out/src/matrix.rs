use crate::{BitVector, Board, Row, CELL_COUNT, COLUMN_COUNT, CONSTANT_COLUMN, ROW_COUNT};

/// Augmented coefficient matrix `[A | b]`, one row per cell.
///
/// Row `i` starts out as "which cells does pressing `i` flip", plus the
/// initial state of cell `i` in the constant column. The flip pattern is
/// symmetric, so rows double as columns of `A`.
pub type Matrix = [Row; CELL_COUNT as usize];

/// Builds the augmented matrix for `board`.
pub fn build(board: Board) -> Matrix {
    debug_assert!(board < 1 << CELL_COUNT, "board {board} has bits outside the grid");

    std::array::from_fn(|i| {
        let index = i as u8;
        let row = flip_vector(index);
        if board.test_bit(index) {
            row.set_bit(CONSTANT_COLUMN)
        } else {
            row
        }
    })
}

/// Cells toggled by pressing `index`: itself and its orthogonal neighbours.
pub fn flip_vector(index: u8) -> Row {
    let mut row = Row::default().set_bit(index);

    // North
    if index >= COLUMN_COUNT {
        row = row.set_bit(index - COLUMN_COUNT);
    }
    // South
    if index < (ROW_COUNT - 1) * COLUMN_COUNT {
        row = row.set_bit(index + COLUMN_COUNT);
    }
    // West
    if index % COLUMN_COUNT > 0 {
        row = row.set_bit(index - 1);
    }
    // East
    if index % COLUMN_COUNT < COLUMN_COUNT - 1 {
        row = row.set_bit(index + 1);
    }

    row
}
