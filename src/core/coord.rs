//! Board coordinates.
//!
//! Coordinates are zero-based `(row, col)` pairs with row 0 at the top of the
//! board. A `Coord` on its own carries no bounds; grids decide whether a
//! coordinate lies inside them (see [`Grid::contains`](super::board::Grid::contains)).

use serde::{Deserialize, Serialize};

/// A zero-based board coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

impl Coord {
    /// Create a coordinate.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Coordinate for a row-major cell index on a grid `cols` wide.
    ///
    /// ```
    /// use tabletop::core::Coord;
    ///
    /// assert_eq!(Coord::from_index(5, 3), Coord::new(1, 2));
    /// ```
    #[must_use]
    pub const fn from_index(index: usize, cols: u8) -> Self {
        Self {
            row: (index / cols as usize) as u8,
            col: (index % cols as usize) as u8,
        }
    }

    /// Row-major cell index on a grid `cols` wide.
    #[must_use]
    pub const fn index(self, cols: u8) -> usize {
        self.row as usize * cols as usize + self.col as usize
    }

    /// Shift by a signed row/column delta.
    ///
    /// Returns `None` when the result would be negative or overflow. The upper
    /// bound is the grid's business.
    #[must_use]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = i16::from(self.row) + i16::from(d_row);
        let col = i16::from(self.col) + i16::from(d_col);
        Some(Self {
            row: u8::try_from(row).ok()?,
            col: u8::try_from(col).ok()?,
        })
    }

    /// Signed row and column distance from `self` to `other`.
    #[must_use]
    pub fn delta(self, other: Coord) -> (i16, i16) {
        (
            i16::from(other.row) - i16::from(self.row),
            i16::from(other.col) - i16::from(self.col),
        )
    }

    /// Cell halfway between two coordinates, if it falls on a whole cell.
    #[must_use]
    pub fn midpoint(self, other: Coord) -> Option<Self> {
        let (d_row, d_col) = self.delta(other);
        if d_row % 2 != 0 || d_col % 2 != 0 {
            return None;
        }
        self.offset((d_row / 2) as i8, (d_col / 2) as i8)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
