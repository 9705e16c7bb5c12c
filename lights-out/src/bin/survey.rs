use miette::*;

use lights_out::{survey, BoardSolver, CELL_COUNT};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let result = survey::survey(&BoardSolver::new(), 0..1 << CELL_COUNT);

    println!("Solvable: {}", result.solvable);
    println!("Unsolvable: {}", result.unsolvable);
    println!("Unsound: {}", result.unsound);
    for (presses, count) in result.histogram.iter().enumerate().filter(|(_, count)| **count > 0) {
        println!("{presses:>2} presses: {count}");
    }
    if let Some(hardest) = result.hardest {
        println!(
            "Hardest: {} ({} presses)",
            lights_out::board::to_identifier(hardest),
            result.max_presses
        );
    }

    if result.unsound > 0 {
        return Err(miette!("{} boards were solved incorrectly", result.unsound));
    }
    Ok(())
}
