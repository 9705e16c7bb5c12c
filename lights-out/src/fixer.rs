use crate::{
    free_variables::{variable_vector, FreeVariables},
    matrix::Matrix,
    Assignment, BitVector,
};

/// Substitutes `assignment` into a back-substituted matrix.
///
/// Each free variable becomes the row `x_index = value`, stored below the
/// pivot rows at `final_row + k`, and is folded into every pivot row that
/// references it. Afterwards every row of the matrix holds exactly one
/// coefficient and its constant is the value of that variable.
pub fn fix(matrix: &mut Matrix, final_row: usize, free: &FreeVariables, assignment: Assignment) {
    for (k, &index) in free.indexes.iter().enumerate() {
        let vector = variable_vector(index, assignment.test_bit(k as u8));

        for row in matrix[..final_row].iter_mut() {
            if row.test_bit(index) {
                *row ^= vector;
            }
        }

        matrix[final_row + k] = vector;
    }
}
