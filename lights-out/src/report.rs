use itertools::Itertools;
use miette::*;

use crate::{board, BoardSolver, SolveResult};

/// Solves one board identifier per line and reports each result on its own
/// line, either `unsolvable` or the press count followed by the pressed
/// cells.
#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    let solver = BoardSolver::new();

    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let board = board::parse_identifier(line)?;
            let outcome = match solver.solve(board) {
                SolveResult::Unsolvable => String::from("unsolvable"),
                SolveResult::Solved(solution) => format!(
                    "{} presses [{}]",
                    solution.press_count(),
                    solution.presses().join(" ")
                ),
            };
            Ok(format!("{line}: {outcome}"))
        })
        .collect::<Result<Vec<_>>>()
        .map(|lines| lines.join("\n"))
}
