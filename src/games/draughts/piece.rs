//! Draughts sides and pieces.

use serde::{Deserialize, Serialize};

use crate::core::Side;

/// A draughts side.
///
/// Red starts on the bottom rows and moves toward row 0; Black starts on the
/// top rows and moves toward the last row. Red moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    /// Row delta of a forward step.
    #[must_use]
    pub const fn forward(self) -> i8 {
        match self {
            Color::Red => -1,
            Color::Black => 1,
        }
    }

    /// Row on which this side's pieces are crowned, for a board `rows` tall.
    #[must_use]
    pub const fn promotion_row(self, rows: u8) -> u8 {
        match self {
            Color::Red => 0,
            Color::Black => rows - 1,
        }
    }
}

impl Side for Color {
    fn opponent(self) -> Self {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }

    fn both() -> [Self; 2] {
        [Color::Red, Color::Black]
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Red => f.write_str("Red"),
            Color::Black => f.write_str("Black"),
        }
    }
}

/// A draughts piece. Once crowned, always crowned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub crowned: bool,
}

impl Piece {
    /// An uncrowned piece.
    #[must_use]
    pub const fn man(color: Color) -> Self {
        Self {
            color,
            crowned: false,
        }
    }

    /// A crowned piece.
    #[must_use]
    pub const fn king(color: Color) -> Self {
        Self {
            color,
            crowned: true,
        }
    }

    /// Board glyph: `r`/`b` for men, `R`/`B` for kings.
    #[must_use]
    pub fn glyph(self) -> char {
        match (self.color, self.crowned) {
            (Color::Red, false) => 'r',
            (Color::Red, true) => 'R',
            (Color::Black, false) => 'b',
            (Color::Black, true) => 'B',
        }
    }
}
