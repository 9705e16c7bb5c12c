use crate::{matrix::Matrix, BitVector, Row, CELL_COUNT, CONSTANT_COLUMN};

/// Columns left without a pivot after elimination, together with the rows
/// whose value depends on them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FreeVariables {
    /// Free columns. Assignment bit `k` belongs to `indexes[k]`.
    pub indexes: Vec<u8>,
    /// Pivot rows that still reference at least one free column.
    pub affected_rows: Vec<Row>,
}

impl FreeVariables {
    /// Reads the free variables off a back-substituted matrix.
    ///
    /// Pivot rows are walked bottom-up and every column skipped between two
    /// consecutive pivots is free, so `indexes` comes out in descending
    /// order. A matrix without pivots leaves every column free.
    pub fn find(matrix: &Matrix, final_row: usize) -> Self {
        if final_row == 0 {
            return Self {
                indexes: (0..CELL_COUNT).collect(),
                affected_rows: Vec::new(),
            };
        }

        let mut indexes = Vec::with_capacity(CELL_COUNT as usize - final_row);
        // One past the highest column not yet classified.
        let mut boundary = CELL_COUNT;

        for row in matrix[..final_row].iter().rev() {
            let Some(pivot_col) = row.pivot_column() else {
                continue;
            };
            indexes.extend((pivot_col + 1..boundary).rev());
            boundary = pivot_col;
        }
        indexes.extend((0..boundary).rev());

        let affected_rows = matrix[..final_row]
            .iter()
            .copied()
            .filter(|row| row.coefficients().count_ones() > 1)
            .collect();

        Self {
            indexes,
            affected_rows,
        }
    }

    pub fn len(&self) -> usize {
        self.indexes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indexes.is_empty()
    }
}

/// The row `x_index = value`: the variable's own column, plus the constant
/// when the variable is set.
pub fn variable_vector(index: u8, value: bool) -> Row {
    let vector = Row::default().set_bit(index);
    if value {
        vector.set_bit(CONSTANT_COLUMN)
    } else {
        vector
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{gauss, matrix::build};

    #[test]
    fn empty_matrix_frees_every_column() {
        let matrix: Matrix = [0; CELL_COUNT as usize];
        let free = FreeVariables::find(&matrix, 0);

        assert_eq!((0..25).collect::<Vec<u8>>(), free.indexes);
        assert!(free.affected_rows.is_empty());
    }

    #[test]
    fn full_rank_has_no_free_variables() {
        let matrix: Matrix = std::array::from_fn(|i| 1 << i);
        let free = FreeVariables::find(&matrix, CELL_COUNT as usize);

        assert!(free.is_empty());
        assert!(free.affected_rows.is_empty());
    }

    #[test]
    fn ten_free_variables() {
        let mut matrix: Matrix = [0; CELL_COUNT as usize];
        matrix[..15].copy_from_slice(&[
            0b00_0000_0000_0000_1000_0001_0001,
            0b00_0000_0000_0000_0000_0000_0100,
            0b10_0000_0000_0000_0000_0011_1000,
            0b00_0000_0001_0000_0001_0100_0000,
            0b10_0000_0000_0000_0100_1000_0000,
            0b10_0000_0000_0001_0000_0000_0000,
            0b00_0000_0000_0010_0000_0000_0000,
            0b00_0000_0000_0100_0000_0000_0000,
            0b00_0000_1001_1000_0000_0000_0000,
            0b00_0000_0010_0000_0000_0000_0000,
            0b10_0000_0100_0000_0000_0000_0000,
            0b00_0001_0000_0000_0000_0000_0000,
            0b10_0010_0000_0000_0000_0000_0000,
            0b11_0100_0000_0000_0000_0000_0000,
            0b00_1000_0000_0000_0000_0000_0000,
        ]);

        let free = FreeVariables::find(&matrix, 15);

        assert_eq!(vec![24, 19, 16, 11, 10, 9, 8, 5, 4, 1], free.indexes);
        assert_eq!(
            vec![
                0b00_0000_0000_0000_1000_0001_0001,
                0b10_0000_0000_0000_0000_0011_1000,
                0b00_0000_0001_0000_0001_0100_0000,
                0b10_0000_0000_0000_0100_1000_0000,
                0b00_0000_1001_1000_0000_0000_0000,
                0b11_0100_0000_0000_0000_0000_0000,
            ],
            free.affected_rows
        );
    }

    #[test]
    fn columns_below_the_first_pivot_are_free() {
        let mut matrix: Matrix = [0; CELL_COUNT as usize];
        for (i, row) in matrix.iter_mut().enumerate().take(22) {
            *row = 1 << (i + 3);
        }

        let free = FreeVariables::find(&matrix, 22);
        assert_eq!(vec![2, 1, 0], free.indexes);
    }

    #[test]
    fn lights_out_leaves_two_free_presses() {
        let mut matrix = build(65536);
        let final_row = gauss::eliminate(&mut matrix);
        gauss::back_substitute(&mut matrix, final_row);

        let free = FreeVariables::find(&matrix, final_row);

        assert_eq!(vec![24, 23], free.indexes);
        assert_eq!(CELL_COUNT as usize - final_row, free.len());
        assert!(!free.affected_rows.is_empty());
        for row in &free.affected_rows {
            assert!(row.test_bit(24) || row.test_bit(23));
        }
    }

    #[test]
    fn variable_vectors() {
        assert_eq!(0b1000, variable_vector(3, false));
        assert_eq!((1 << 25) | 0b1000, variable_vector(3, true));
    }
}
