use crate::{
    free_variables::{variable_vector, FreeVariables},
    Assignment, BitVector, CELL_COUNT,
};

/// Picks values for the free variables of a reduced system.
///
/// Bit `k` of the returned assignment is the value of `indexes[k]`.
pub trait Optimizer: Send + Sync {
    fn optimal_assignment(&self, free: &FreeVariables) -> Assignment;
}

/// Leaves every free press off. Always valid, not always minimal.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroValue;

impl Optimizer for ZeroValue {
    fn optimal_assignment(&self, _free: &FreeVariables) -> Assignment {
        0
    }
}

/// Tries every assignment and keeps the one with the fewest presses.
///
/// The search is `O(2^F · A)` for `F` free variables and `A` affected rows.
/// Systems with more than `max_free_variables` free variables fall back to
/// the zero assignment instead.
#[derive(Debug, Clone, Copy)]
pub struct BruteForce {
    max_free_variables: usize,
}

impl BruteForce {
    pub fn new() -> Self {
        Self::with_limit(CELL_COUNT as usize)
    }

    pub fn with_limit(max_free_variables: usize) -> Self {
        Self { max_free_variables }
    }

    pub fn max_free_variables(&self) -> usize {
        self.max_free_variables
    }
}

impl Default for BruteForce {
    fn default() -> Self {
        Self::new()
    }
}

impl Optimizer for BruteForce {
    #[tracing::instrument(level = "trace", skip_all, fields(free = free.len()))]
    fn optimal_assignment(&self, free: &FreeVariables) -> Assignment {
        if free.is_empty() || free.affected_rows.is_empty() {
            return 0;
        }

        if free.len() > self.max_free_variables {
            tracing::warn!(
                free = free.len(),
                limit = self.max_free_variables,
                "too many free variables for an exhaustive search, leaving them unpressed"
            );
            return 0;
        }

        let mut best = 0;
        let mut best_count = press_count(free, best);

        // At most 25 free variables, so the shift cannot overflow.
        let candidates: Assignment = 1 << free.len();
        for candidate in 1..candidates {
            let count = press_count(free, candidate);
            if count < best_count {
                best = candidate;
                best_count = count;
            }
        }

        tracing::trace!(assignment = best, presses = best_count, "optimal assignment");
        best
    }
}

/// Presses that depend on `assignment`: the free presses themselves plus
/// every affected pivot press that ends up set once the assignment is
/// substituted. Pivot rows without free columns add the same amount to
/// every candidate and are left out.
pub fn press_count(free: &FreeVariables, assignment: Assignment) -> u32 {
    let mut rows = free.affected_rows.clone();

    for (k, &index) in free.indexes.iter().enumerate() {
        let vector = variable_vector(index, assignment.test_bit(k as u8));
        for row in rows.iter_mut().filter(|row| row.test_bit(index)) {
            *row ^= vector;
        }
    }

    assignment.count_ones() + rows.iter().filter(|row| row.constant()).count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{gauss, matrix::build, Board, Row};

    use rstest::rstest;

    fn free_variables(indexes: &[u8], affected_rows: &[Row]) -> FreeVariables {
        FreeVariables {
            indexes: indexes.to_vec(),
            affected_rows: affected_rows.to_vec(),
        }
    }

    fn reduced(board: Board) -> FreeVariables {
        let mut matrix = build(board);
        let final_row = gauss::eliminate(&mut matrix);
        gauss::back_substitute(&mut matrix, final_row);
        FreeVariables::find(&matrix, final_row)
    }

    #[test]
    fn zero_value_always_returns_zero() {
        assert_eq!(0, ZeroValue.optimal_assignment(&FreeVariables::default()));
        assert_eq!(0, ZeroValue.optimal_assignment(&reduced(65536)));
    }

    // Free state -> affected state (free + affected = total)
    #[rstest]
    #[case::no_free_variables(&[], &[], 0b0)]
    // 0 -> 0 0 (0 + 0 = 0) *
    // 1 -> 1 1 (1 + 2 = 3)
    #[case::single_expect_0(
        &[15],
        &[0b00_0000_0000_1000_0000_0000_0001, 0b00_0000_0000_1000_0000_0000_0010],
        0b0
    )]
    // 0 -> 1 1 (0 + 2 = 2)
    // 1 -> 0 0 (1 + 0 = 1) *
    #[case::single_expect_1(
        &[9],
        &[0b10_0000_0000_0000_0010_0000_0001, 0b10_0000_0000_0000_0010_0000_0010],
        0b1
    )]
    // 0 0 -> 1 0 (0 + 1 = 1) *
    // 1 0 -> 0 1 (1 + 1 = 2)
    // 0 1 -> 1 1 (0 + 2 = 3)
    // 1 1 -> 0 0 (2 + 0 = 2)
    #[case::two_expect_00(
        &[15, 19],
        &[0b10_0000_0000_1000_0000_0000_0001, 0b00_0000_1000_1000_0000_0000_0010],
        0b0_0
    )]
    // 0 0 -> 1 1 1 1 1 (0 + 5 = 5)
    // 1 0 -> 1 1 0 0 0 (1 + 2 = 3)
    // 0 1 -> 0 0 0 0 0 (1 + 0 = 1) *
    // 1 1 -> 0 0 1 1 1 (2 + 3 = 5)
    #[case::two_expect_01(
        &[19, 15],
        &[
            0b10_0000_0000_1000_0000_0000_0001,
            0b10_0000_0000_1000_0000_0000_0010,
            0b10_0000_1000_1000_0000_0000_0100,
            0b10_0000_1000_1000_0000_0000_1000,
            0b10_0000_1000_1000_0000_0001_0000,
        ],
        0b1_0
    )]
    // 0 0 0 -> 1 1 0 1 1 (0 + 4 = 4)
    // 1 0 0 -> 0 0 0 1 1 (1 + 2 = 3)
    // 0 1 0 -> 0 0 1 0 1 (1 + 2 = 3)
    // 1 1 0 -> 1 1 1 0 1 (2 + 4 = 6)
    // 0 0 1 -> 1 1 0 0 0 (1 + 2 = 3)
    // 1 0 1 -> 0 0 0 0 0 (2 + 0 = 2) *
    // 0 1 1 -> 0 0 1 1 0 (2 + 2 = 4)
    // 1 1 1 -> 1 1 1 1 0 (3 + 4 = 7)
    #[case::three_expect_101(
        &[20, 21, 22],
        &[
            0b10_0011_0000_0000_0000_0000_0001,
            0b10_0011_0000_0000_0000_0000_0010,
            0b00_0010_0000_0000_0000_0000_0100,
            0b10_0110_0000_0000_0000_0000_1000,
            0b10_0100_0000_0000_0000_0001_0000,
        ],
        0b1_0_1
    )]
    #[case::no_affected_rows(&[1, 3, 5, 7, 9, 11], &[], 0b0)]
    fn brute_force(#[case] indexes: &[u8], #[case] affected_rows: &[Row], #[case] expected: Assignment) {
        let free = free_variables(indexes, affected_rows);
        assert_eq!(expected, BruteForce::new().optimal_assignment(&free));
    }

    #[test]
    fn ties_keep_the_smallest_assignment() {
        // Either value of the free variable costs one press.
        let free = free_variables(&[9], &[0b10_0000_0000_0000_0010_0000_0001]);
        assert_eq!(press_count(&free, 0), press_count(&free, 1));
        assert_eq!(0, BruteForce::new().optimal_assignment(&free));
    }

    #[test]
    fn limit_falls_back_to_zero() {
        let free = free_variables(
            &[9],
            &[0b10_0000_0000_0000_0010_0000_0001, 0b10_0000_0000_0000_0010_0000_0010],
        );
        assert_eq!(0, BruteForce::with_limit(0).optimal_assignment(&free));
        assert_eq!(1, BruteForce::with_limit(1).optimal_assignment(&free));
    }

    #[rstest]
    #[case(0)]
    #[case(65536)]
    #[case(1006)]
    #[case(0b00101_00011_10001_01100_10011)]
    fn brute_force_never_loses_to_zero_value(#[case] board: Board) {
        let free = reduced(board);
        let brute = BruteForce::new().optimal_assignment(&free);
        let zero = ZeroValue.optimal_assignment(&free);
        assert!(press_count(&free, brute) <= press_count(&free, zero));
    }
}
