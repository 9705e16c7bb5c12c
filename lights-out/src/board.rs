//! Decoding boards from their textual forms.
//!
//! A board identifier is the board value written in base 32 with the digits
//! `0-9a-v`, at most five of them (`c1p` is 12345). Five digits hold exactly
//! 25 bits, so every identifier names a board on the grid. Boards can also
//! be drawn as five lines of `#` (on) and `.` (off).

use std::fmt;

use chumsky::prelude::*;
use miette::*;

use crate::{BitVector, Board, CELL_COUNT, COLUMN_COUNT, ROW_COUNT};

const DIGITS: &[u8; 32] = b"0123456789abcdefghijklmnopqrstuv";
const IDENTIFIER_LEN: usize = (CELL_COUNT as usize).div_ceil(5);

/// A cell of the grid, addressed by row and column from the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: u8,
    pub column: u8,
}

impl Cell {
    pub fn new(row: u8, column: u8) -> Self {
        debug_assert!(row < ROW_COUNT && column < COLUMN_COUNT);
        Self { row, column }
    }

    /// The cell behind bit `index` of a board or solution.
    pub fn from_index(index: usize) -> Self {
        Self {
            row: (index / COLUMN_COUNT as usize) as u8,
            column: (index % COLUMN_COUNT as usize) as u8,
        }
    }

    pub fn index(self) -> u8 {
        self.row * COLUMN_COUNT + self.column
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.column)
    }
}

fn identifier<'a>() -> impl Parser<'a, &'a str, Board, extra::Err<Rich<'a, char>>> {
    let digit = any().try_map(|c: char, span| {
        DIGITS
            .iter()
            .position(|&d| d as char == c)
            .map(|value| value as Board)
            .ok_or_else(|| Rich::custom(span, format!("'{c}' is not a base-32 digit")))
    });

    digit
        .repeated()
        .at_least(1)
        .at_most(IDENTIFIER_LEN)
        .collect::<Vec<Board>>()
        .map(|digits| digits.into_iter().fold(0, |board, digit| board << 5 | digit))
}

fn grid<'a>() -> impl Parser<'a, &'a str, Board, extra::Err<Rich<'a, char>>> {
    let cell = choice((just('#').to(true), just('.').to(false)));

    let row = cell
        .repeated()
        .exactly(COLUMN_COUNT as usize)
        .collect::<Vec<bool>>();

    row.separated_by(text::newline())
        .exactly(ROW_COUNT as usize)
        .allow_trailing()
        .collect::<Vec<_>>()
        .map(|rows| {
            rows.into_iter()
                .flatten()
                .enumerate()
                .filter(|&(_, on)| on)
                .fold(0, |board: Board, (i, _)| board.set_bit(i as u8))
        })
}

/// Parses a base-32 board identifier.
pub fn parse_identifier(input: &str) -> Result<Board> {
    identifier()
        .then_ignore(end())
        .parse(input.trim())
        .into_result()
        .map_err(|e| miette!("Invalid board identifier {:?}: {:?}", input.trim(), e))
}

/// Parses a board drawn as a grid of `#` and `.`.
pub fn parse_grid(input: &str) -> Result<Board> {
    grid()
        .then_ignore(end())
        .parse(input.trim())
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))
}

/// The base-32 identifier of `board`, without leading zeros.
pub fn to_identifier(board: Board) -> String {
    let mut digits = Vec::with_capacity(IDENTIFIER_LEN);
    let mut rest = board;
    loop {
        digits.push(DIGITS[(rest & 0b11111) as usize] as char);
        rest >>= 5;
        if rest == 0 {
            break;
        }
    }
    digits.iter().rev().collect()
}
