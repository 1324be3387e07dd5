//! Game-agnostic rectangular board.
//!
//! `Grid<T>` stores one optional occupant per cell in row-major order. Games
//! pick the dimensions and the occupant type (draughts pieces, tic-tac-toe
//! marks); the grid only knows shape and occupancy.

use serde::{Deserialize, Serialize};

use super::coord::Coord;

/// A rectangular grid of optional occupants.
///
/// Cloning copies every cell, so recursive searches can take a grid by value
/// and mutate their own copy freely.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid<T> {
    rows: u8,
    cols: u8,
    cells: Vec<Option<T>>,
}

impl<T> Grid<T> {
    /// Create an empty grid.
    #[must_use]
    pub fn new(rows: u8, cols: u8) -> Self {
        assert!(rows > 0 && cols > 0, "Grid must have at least one cell");

        let cells = std::iter::repeat_with(|| None)
            .take(rows as usize * cols as usize)
            .collect();
        Self { rows, cols, cells }
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Total number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; grids have at least one cell.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether the coordinate lies on this grid.
    #[must_use]
    pub fn contains(&self, at: Coord) -> bool {
        at.row < self.rows && at.col < self.cols
    }

    /// Occupant of a cell; `None` when empty or off the grid.
    #[must_use]
    pub fn get(&self, at: Coord) -> Option<&T> {
        if !self.contains(at) {
            return None;
        }
        self.cells[at.index(self.cols)].as_ref()
    }

    /// Mutable occupant of a cell.
    pub fn get_mut(&mut self, at: Coord) -> Option<&mut T> {
        if !self.contains(at) {
            return None;
        }
        let cols = self.cols;
        self.cells[at.index(cols)].as_mut()
    }

    /// Whether a cell is on the grid and empty.
    #[must_use]
    pub fn is_vacant(&self, at: Coord) -> bool {
        self.contains(at) && self.cells[at.index(self.cols)].is_none()
    }

    /// Place an occupant, returning whatever was there.
    ///
    /// # Panics
    ///
    /// Panics if `at` is off the grid. Callers validate coordinates first.
    pub fn set(&mut self, at: Coord, occupant: T) -> Option<T> {
        assert!(self.contains(at), "{} is outside {}x{}", at, self.rows, self.cols);
        let cols = self.cols;
        self.cells[at.index(cols)].replace(occupant)
    }

    /// Empty a cell, returning its occupant.
    pub fn take(&mut self, at: Coord) -> Option<T> {
        if !self.contains(at) {
            return None;
        }
        let cols = self.cols;
        self.cells[at.index(cols)].take()
    }

    /// Iterate over every coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let cols = self.cols;
        (0..self.cells.len()).map(move |i| Coord::from_index(i, cols))
    }

    /// Iterate over occupied cells.
    pub fn occupied(&self) -> impl Iterator<Item = (Coord, &T)> {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, cell)| cell.as_ref().map(|t| (Coord::from_index(i, cols), t)))
    }

    /// Iterate over empty cells.
    pub fn vacant(&self) -> impl Iterator<Item = Coord> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(move |(i, _)| Coord::from_index(i, cols))
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Whether every cell is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Raw row-major cells.
    #[must_use]
    pub fn cells(&self) -> &[Option<T>] {
        &self.cells
    }

    /// Whether the stored cell vector matches the declared dimensions.
    ///
    /// Always true for grids built locally; deserialized grids may violate it.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.rows > 0 && self.cols > 0 && self.cells.len() == self.rows as usize * self.cols as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_vacant() {
        let grid: Grid<u8> = Grid::new(3, 3);

        assert_eq!(grid.len(), 9);
        assert_eq!(grid.occupied_count(), 0);
        assert!(grid.coords().all(|c| grid.is_vacant(c)));
    }

    #[test]
    fn test_set_take() {
        let mut grid = Grid::new(8, 8);
        let at = Coord::new(4, 3);

        assert_eq!(grid.set(at, 'r'), None);
        assert_eq!(grid.get(at), Some(&'r'));
        assert_eq!(grid.set(at, 'b'), Some('r'));
        assert_eq!(grid.take(at), Some('b'));
        assert!(grid.is_vacant(at));
    }

    #[test]
    fn test_out_of_bounds_reads() {
        let grid: Grid<u8> = Grid::new(10, 12);

        assert!(grid.contains(Coord::new(9, 11)));
        assert!(!grid.contains(Coord::new(10, 0)));
        assert!(!grid.contains(Coord::new(0, 12)));
        assert_eq!(grid.get(Coord::new(10, 0)), None);
        assert!(!grid.is_vacant(Coord::new(10, 0)));
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_set_out_of_bounds_panics() {
        let mut grid = Grid::new(3, 3);
        grid.set(Coord::new(3, 0), 1u8);
    }

    #[test]
    fn test_occupied_and_vacant_iterators() {
        let mut grid = Grid::new(3, 3);
        grid.set(Coord::new(0, 0), 1u8);
        grid.set(Coord::new(2, 1), 2u8);

        let occupied: Vec<_> = grid.occupied().collect();
        assert_eq!(occupied, vec![(Coord::new(0, 0), &1), (Coord::new(2, 1), &2)]);
        assert_eq!(grid.vacant().count(), 7);
        assert!(!grid.is_full());
    }

    #[test]
    fn test_deserialized_grid_shape_check() {
        let json = r#"{"rows":3,"cols":3,"cells":[null,null]}"#;
        let grid: Grid<u8> = serde_json::from_str(json).unwrap();
        assert!(!grid.is_well_formed());

        let grid: Grid<u8> = Grid::new(3, 3);
        let json = serde_json::to_string(&grid).unwrap();
        let back: Grid<u8> = serde_json::from_str(&json).unwrap();
        assert!(back.is_well_formed());
        assert_eq!(grid, back);
    }
}
