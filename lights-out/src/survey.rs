//! Exhaustive sweep over a range of boards.
//!
//! Solving all 2^25 boards takes a while, so the sweep runs on rayon's
//! thread pool and reports through an indicatif progress bar.

use std::ops::Range;

use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use rayon::prelude::*;

use crate::{Board, BoardSolver, Optimizer, SolveResult, CELL_COUNT};

const PROGRESS_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {human_pos}/{human_len} boards ({eta})";

/// Aggregate outcome of solving every board in a range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Survey {
    pub solvable: u64,
    pub unsolvable: u64,
    /// Solved boards whose presses do not reproduce the board.
    pub unsound: u64,
    /// Fewest presses needed by the hardest board.
    pub max_presses: u32,
    /// The smallest board needing `max_presses`.
    pub hardest: Option<Board>,
    /// `histogram[n]` counts the solvable boards needing `n` presses.
    pub histogram: [u64; CELL_COUNT as usize + 1],
}

impl Default for Survey {
    fn default() -> Self {
        Self {
            solvable: 0,
            unsolvable: 0,
            unsound: 0,
            max_presses: 0,
            hardest: None,
            histogram: [0; CELL_COUNT as usize + 1],
        }
    }
}

impl Survey {
    fn record(mut self, board: Board, result: SolveResult) -> Self {
        let Some(solution) = result.solution() else {
            self.unsolvable += 1;
            return self;
        };

        self.solvable += 1;
        if solution.toggled() != board {
            self.unsound += 1;
        }

        let presses = solution.press_count();
        self.histogram[presses as usize] += 1;
        self.track_hardest(presses, board);
        self
    }

    fn track_hardest(&mut self, presses: u32, board: Board) {
        if presses > self.max_presses || self.hardest.is_none() {
            self.max_presses = presses;
            self.hardest = Some(board);
        } else if presses == self.max_presses {
            self.hardest = self.hardest.min(Some(board));
        }
    }

    fn merge(mut self, other: Self) -> Self {
        self.solvable += other.solvable;
        self.unsolvable += other.unsolvable;
        self.unsound += other.unsound;
        for (count, other) in self.histogram.iter_mut().zip(other.histogram) {
            *count += other;
        }
        if let Some(board) = other.hardest {
            self.track_hardest(other.max_presses, board);
        }
        self
    }
}

/// Solves every board in `boards`, drawing a progress bar on stderr.
pub fn survey<O: Optimizer>(solver: &BoardSolver<O>, boards: Range<Board>) -> Survey {
    let progress = ProgressBar::new(boards.len() as u64);
    if let Ok(style) = ProgressStyle::with_template(PROGRESS_TEMPLATE) {
        progress.set_style(style.progress_chars("#>-"));
    }

    let survey = survey_with_progress(solver, boards, progress.clone());
    progress.finish();
    survey
}

#[tracing::instrument(skip(solver, progress))]
pub fn survey_with_progress<O: Optimizer>(
    solver: &BoardSolver<O>,
    boards: Range<Board>,
    progress: ProgressBar,
) -> Survey {
    let survey = boards
        .into_par_iter()
        .progress_with(progress)
        .fold(Survey::default, |survey, board| {
            survey.record(board, solver.solve(board))
        })
        .reduce(Survey::default, Survey::merge);

    tracing::info!(
        solvable = survey.solvable,
        unsolvable = survey.unsolvable,
        unsound = survey.unsound,
        max_presses = survey.max_presses,
        hardest = ?survey.hardest,
        "survey finished"
    );
    survey
}
