//! Tic-tac-toe marks, state, and line detection.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::{Coord, Grid, Side};

/// Board side length.
pub const SIZE: u8 = 3;

/// Number of cells.
pub const CELLS: usize = 9;

/// Cell indices of the eight winning lines.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// A player's mark. X moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Side for Mark {
    fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    fn both() -> [Self; 2] {
        [Mark::X, Mark::O]
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => f.write_str("X"),
            Mark::O => f.write_str("O"),
        }
    }
}

/// Place `mark` in `cell` (0..=8, row-major).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub cell: u8,
    pub mark: Mark,
}

impl Move {
    #[must_use]
    pub const fn new(cell: u8, mark: Mark) -> Self {
        Self { cell, mark }
    }

    /// Board coordinate of the target cell.
    #[must_use]
    pub fn coord(&self) -> Coord {
        Coord::from_index(self.cell as usize, SIZE)
    }
}

/// Board plus turn holder.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicTacToeState {
    pub(crate) board: Grid<Mark>,
    pub(crate) turn: Mark,
}

impl Default for TicTacToeState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeState {
    /// Empty board, X to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Grid::new(SIZE, SIZE),
            turn: Mark::X,
        }
    }

    /// State from nine cells. The turn holder follows from the mark counts.
    #[must_use]
    pub fn from_cells(cells: [Option<Mark>; CELLS]) -> Self {
        let x = cells.iter().filter(|c| **c == Some(Mark::X)).count();
        let o = cells.iter().filter(|c| **c == Some(Mark::O)).count();
        let turn = if x > o { Mark::O } else { Mark::X };

        let mut board = Grid::new(SIZE, SIZE);
        for (i, mark) in cells.into_iter().enumerate() {
            if let Some(mark) = mark {
                board.set(Coord::from_index(i, SIZE), mark);
            }
        }
        Self { board, turn }
    }

    /// Same marks with `turn` to move.
    ///
    /// Lets a position be set up whose turn holder differs from what the
    /// mark counts imply. Such a state fails snapshot validation.
    #[must_use]
    pub fn with_turn(mut self, turn: Mark) -> Self {
        self.turn = turn;
        self
    }

    #[must_use]
    pub fn board(&self) -> &Grid<Mark> {
        &self.board
    }

    #[must_use]
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Mark in a cell, by index.
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<Mark> {
        if index >= CELLS {
            return None;
        }
        self.board.get(Coord::from_index(index, SIZE)).copied()
    }

    /// Indices of empty cells, ascending.
    #[must_use]
    pub fn empty_cells(&self) -> Vec<u8> {
        (0..CELLS as u8)
            .filter(|&i| self.cell(i as usize).is_none())
            .collect()
    }

    /// Base-3 encoding of the board: empty 0, X 1, O 2.
    ///
    /// The turn holder is implied by the marks, so the code identifies the
    /// whole state.
    #[must_use]
    pub fn code(&self) -> u32 {
        (0..CELLS).rev().fold(0, |acc, i| {
            let digit = match self.cell(i) {
                None => 0,
                Some(Mark::X) => 1,
                Some(Mark::O) => 2,
            };
            acc * 3 + digit
        })
    }

    /// Winning mark, if any line is complete.
    #[must_use]
    pub fn winner(&self) -> Option<Mark> {
        self.winning_line().and_then(|[a, _, _]| self.cell(a))
    }

    /// First complete line.
    #[must_use]
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        LINES.iter().copied().find(|&[a, b, c]| {
            let first = self.cell(a);
            first.is_some() && first == self.cell(b) && first == self.cell(c)
        })
    }

    /// Count of each mark.
    #[must_use]
    pub fn counts(&self) -> (usize, usize) {
        let x = self.board.occupied().filter(|(_, m)| **m == Mark::X).count();
        let o = self.board.occupied().filter(|(_, m)| **m == Mark::O).count();
        (x, o)
    }

    /// Put a mark down and pass the turn. No legality checks.
    pub(crate) fn place(&mut self, cell: u8, mark: Mark) {
        self.board.set(Coord::from_index(cell as usize, SIZE), mark);
        self.turn = mark.opponent();
    }
}

impl FromStr for TicTacToeState {
    type Err = String;

    /// Parse nine cells, row-major: `X`, `O`, and `.` or `_` for empty.
    /// Whitespace and `|` are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [None; CELLS];
        let mut n = 0;
        for ch in s.chars().filter(|c| !c.is_whitespace() && *c != '|') {
            if n == CELLS {
                return Err("more than nine cells".to_string());
            }
            cells[n] = match ch.to_ascii_uppercase() {
                'X' => Some(Mark::X),
                'O' => Some(Mark::O),
                '.' | '_' => None,
                other => return Err(format!("unexpected cell {other:?}")),
            };
            n += 1;
        }
        if n != CELLS {
            return Err(format!("expected nine cells, got {n}"));
        }
        Ok(Self::from_cells(cells))
    }
}

impl std::fmt::Display for TicTacToeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..SIZE as usize {
            for col in 0..SIZE as usize {
                match self.cell(row * SIZE as usize + col) {
                    Some(mark) => write!(f, "{mark}")?,
                    None => f.write_str(".")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "{} to move", self.turn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_turn_overrides_inferred_turn() {
        let state: TicTacToeState = "XX. .O. ...".parse().unwrap();
        let state = state.with_turn(Mark::X);

        assert_eq!(state.turn(), Mark::X);
        assert_eq!(state.counts(), (2, 1));
        assert_eq!(state.cell(0), Some(Mark::X));
    }

    #[test]
    fn test_parse_infers_turn() {
        let state: TicTacToeState = "XX. .O. ...".parse().unwrap();

        assert_eq!(state.turn(), Mark::O);
        assert_eq!(state.cell(1), Some(Mark::X));
        assert_eq!(state.cell(4), Some(Mark::O));
        assert_eq!(state.empty_cells(), vec![2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn test_parse_errors() {
        assert!("XX".parse::<TicTacToeState>().is_err());
        assert!("XXOOXXOOXX".parse::<TicTacToeState>().is_err());
        assert!("XX?......".parse::<TicTacToeState>().is_err());
    }

    #[test]
    fn test_winner_on_every_line() {
        for line in LINES {
            let mut cells = [None; CELLS];
            for i in line {
                cells[i] = Some(Mark::O);
            }
            let state = TicTacToeState::from_cells(cells);
            assert_eq!(state.winner(), Some(Mark::O));
            assert_eq!(state.winning_line(), Some(line));
        }
    }

    #[test]
    fn test_no_winner() {
        let state: TicTacToeState = "XOX XOO OXX".parse().unwrap();
        assert_eq!(state.winner(), None);
        assert!(state.board().is_full());
    }

    #[test]
    fn test_code_is_unique_per_board() {
        let a: TicTacToeState = "X........".parse().unwrap();
        let b: TicTacToeState = ".X.......".parse().unwrap();
        let c: TicTacToeState = "O........".parse().unwrap();

        assert_eq!(TicTacToeState::new().code(), 0);
        assert_eq!(a.code(), 1);
        assert_eq!(b.code(), 3);
        assert_eq!(c.code(), 2);
    }

    #[test]
    fn test_display() {
        let state: TicTacToeState = "X.. .O. ...".parse().unwrap();
        assert_eq!(state.to_string(), "X..\n.O.\n...\nX to move");
    }
}
