//! Board configurations.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::piece::{Color, Piece};
use crate::core::{Coord, Grid};

/// Supported board configurations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// 8×8, three rows of pieces per side.
    #[default]
    Standard,
    /// 10 rows × 12 columns, four rows of pieces per side.
    International,
}

impl Layout {
    /// Board height.
    #[must_use]
    pub const fn rows(self) -> u8 {
        match self {
            Layout::Standard => 8,
            Layout::International => 10,
        }
    }

    /// Board width.
    #[must_use]
    pub const fn cols(self) -> u8 {
        match self {
            Layout::Standard => 8,
            Layout::International => 12,
        }
    }

    /// Rows each side fills at game start.
    #[must_use]
    pub const fn piece_rows(self) -> u8 {
        match self {
            Layout::Standard => 3,
            Layout::International => 4,
        }
    }

    /// Pieces each side starts with.
    #[must_use]
    pub const fn pieces_per_side(self) -> usize {
        self.piece_rows() as usize * self.cols() as usize / 2
    }

    /// Starting board: Black on the top rows, Red on the bottom rows, dark squares only.
    #[must_use]
    pub fn initial_board(self) -> Grid<Piece> {
        let mut board = Grid::new(self.rows(), self.cols());
        let red_start = self.rows() - self.piece_rows();

        for at in board.coords().collect::<Vec<_>>() {
            if !is_dark(at) {
                continue;
            }
            if at.row < self.piece_rows() {
                board.set(at, Piece::man(Color::Black));
            } else if at.row >= red_start {
                board.set(at, Piece::man(Color::Red));
            }
        }

        board
    }
}

impl FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Layout::Standard),
            "international" => Ok(Layout::International),
            other => Err(format!("unknown layout {other:?}")),
        }
    }
}

/// Pieces only ever stand on dark squares.
#[must_use]
pub fn is_dark(at: Coord) -> bool {
    (at.row + at.col) % 2 == 1
}
