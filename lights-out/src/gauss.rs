use crate::{matrix::Matrix, BitVector, CELL_COUNT};

/// Forward elimination into row echelon form.
///
/// Sweeps `(pivot_row, pivot_col)` from the top-left corner. A missing pivot
/// is swapped up from a lower row when one exists; otherwise only the column
/// advances. Each pivot is XORed into the lower rows that share its column,
/// so nothing below a pivot survives in that column.
///
/// Returns the number of pivot rows (`final_row`). Rows from `final_row`
/// onwards carry no coefficients; they are either zero or inconsistent.
pub fn eliminate(matrix: &mut Matrix) -> usize {
    let size = CELL_COUNT as usize;
    let mut pivot_row = 0;
    let mut pivot_col = 0;

    while pivot_row < size && pivot_col < CELL_COUNT {
        if !matrix[pivot_row].test_bit(pivot_col) && !swap_pivot(matrix, pivot_row, pivot_col) {
            pivot_col += 1;
            continue;
        }

        let pivot = matrix[pivot_row];
        for row in matrix[pivot_row + 1..].iter_mut() {
            if row.test_bit(pivot_col) {
                *row ^= pivot;
            }
        }

        pivot_row += 1;
        pivot_col += 1;
    }

    pivot_row
}

/// Brings a lower row with a 1 in `col` up to `row`. Returns whether one
/// was found.
fn swap_pivot(matrix: &mut Matrix, row: usize, col: u8) -> bool {
    match (row + 1..matrix.len()).find(|&t| matrix[t].test_bit(col)) {
        Some(t) => {
            matrix.swap(row, t);
            true
        }
        None => false,
    }
}

/// A row below the pivots that still holds anything reads `0 = 1`: the
/// board has no solution.
pub fn has_forbidden_row(matrix: &Matrix, final_row: usize) -> bool {
    matrix[final_row..].iter().any(|&row| row != 0)
}

/// Clears every pivot column from the rows above its pivot, bottom-up.
///
/// Afterwards each pivot row holds its pivot, the free columns it still
/// depends on, and the constant.
pub fn back_substitute(matrix: &mut Matrix, final_row: usize) {
    for i in (0..final_row).rev() {
        let pivot = matrix[i];
        let Some(pivot_col) = pivot.pivot_column() else {
            continue;
        };

        for row in matrix[..i].iter_mut() {
            if row.test_bit(pivot_col) {
                *row ^= pivot;
            }
        }
    }
}
