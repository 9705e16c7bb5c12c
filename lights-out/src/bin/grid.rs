use miette::*;

use lights_out::{board, BoardSolver, SolveResult};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let input = include_str!("../../grid.txt");
    let board = board::parse_grid(input)?;

    match BoardSolver::new().solve(board) {
        SolveResult::Solved(solution) => {
            println!("Presses: {}", solution.press_count());
            println!("{}", solution);
        }
        SolveResult::Unsolvable => println!("Board {} has no solution", board::to_identifier(board)),
    }
    Ok(())
}
