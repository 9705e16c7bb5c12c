use crate::{
    fixer,
    free_variables::FreeVariables,
    gauss,
    matrix::{self, Matrix},
    BitVector, Board, BruteForce, Optimizer, Solution, CELL_COUNT,
};

/// Outcome of solving one board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveResult {
    /// The fewest presses that switch every cell off.
    Solved(Solution),
    /// No combination of presses clears the board.
    Unsolvable,
}

impl SolveResult {
    pub fn is_solvable(&self) -> bool {
        matches!(self, Self::Solved(_))
    }

    pub fn solution(&self) -> Option<Solution> {
        match *self {
            Self::Solved(solution) => Some(solution),
            Self::Unsolvable => None,
        }
    }
}

/// Solves boards by Gaussian elimination over GF(2), resolving free presses
/// with the injected [`Optimizer`].
///
/// Solving keeps no state between calls; one solver can be shared freely
/// across threads.
#[derive(Debug, Clone)]
pub struct BoardSolver<O = BruteForce> {
    optimizer: O,
}

impl BoardSolver {
    /// A solver that always finds the fewest presses.
    pub fn new() -> Self {
        Self::with_optimizer(BruteForce::new())
    }
}

impl Default for BoardSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: Optimizer> BoardSolver<O> {
    pub fn with_optimizer(optimizer: O) -> Self {
        Self { optimizer }
    }

    pub fn optimizer(&self) -> &O {
        &self.optimizer
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn solve(&self, board: Board) -> SolveResult {
        let mut matrix = matrix::build(board);

        let final_row = gauss::eliminate(&mut matrix);
        if gauss::has_forbidden_row(&matrix, final_row) {
            tracing::debug!(final_row, "inconsistent system");
            return SolveResult::Unsolvable;
        }
        gauss::back_substitute(&mut matrix, final_row);

        if final_row < CELL_COUNT as usize {
            let free = FreeVariables::find(&matrix, final_row);
            let assignment = self.optimizer.optimal_assignment(&free);
            tracing::debug!(
                free = ?free.indexes,
                affected = free.affected_rows.len(),
                assignment,
                "fixing free variables"
            );
            fixer::fix(&mut matrix, final_row, &free, assignment);
        }

        SolveResult::Solved(extract_solution(&matrix))
    }
}

/// Reads the presses off a fully reduced matrix: each row sets its pivot
/// variable to its constant.
fn extract_solution(matrix: &Matrix) -> Solution {
    let bits = matrix
        .iter()
        .filter(|row| row.constant())
        .filter_map(|row| row.pivot_column())
        .fold(0, |solution: u32, column| solution.set_bit(column));

    Solution::from_bits(bits)
}
