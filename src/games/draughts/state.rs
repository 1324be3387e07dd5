//! Draughts game state.

use im::HashMap as ImHashMap;
use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use super::layout::Layout;
use super::piece::{Color, Piece};
use crate::core::{Coord, Grid};

/// Complete draughts state.
///
/// Besides the board and turn holder this tracks the capture chain in progress
/// and the bookkeeping for draw detection. The repetition table is an `im`
/// map so AI lookahead clones stay cheap.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DraughtsState {
    pub(crate) board: Grid<Piece>,
    pub(crate) turn: Color,
    /// Square of the piece that must keep capturing, if a chain is open.
    pub(crate) chain: Option<Coord>,
    /// Plies since the last capture or uncrowned move.
    pub(crate) quiet_plies: u32,
    /// Occurrences of each position since the last irreversible move.
    pub(crate) seen: ImHashMap<u64, u8>,
}

impl DraughtsState {
    /// Starting position for a layout, Red to move.
    #[must_use]
    pub fn new(layout: Layout) -> Self {
        Self::from_board(layout.initial_board(), Color::Red)
    }

    /// State from an arbitrary board, no chain open.
    #[must_use]
    pub fn from_board(board: Grid<Piece>, turn: Color) -> Self {
        let mut state = Self {
            board,
            turn,
            chain: None,
            quiet_plies: 0,
            seen: ImHashMap::new(),
        };
        state.record_position();
        state
    }

    /// State with the given pieces on an otherwise empty board.
    ///
    /// ```
    /// use tabletop::core::Coord;
    /// use tabletop::games::draughts::{Color, DraughtsState, Layout, Piece};
    ///
    /// let state = DraughtsState::from_pieces(
    ///     Layout::Standard,
    ///     &[(Coord::new(4, 3), Piece::man(Color::Red))],
    ///     Color::Red,
    /// );
    /// assert_eq!(state.piece_count(Color::Red), 1);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if a coordinate lies outside the layout's board.
    #[must_use]
    pub fn from_pieces(layout: Layout, pieces: &[(Coord, Piece)], turn: Color) -> Self {
        let mut board = Grid::new(layout.rows(), layout.cols());
        for &(at, piece) in pieces {
            board.set(at, piece);
        }
        Self::from_board(board, turn)
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Grid<Piece> {
        &self.board
    }

    /// Side holding the turn.
    #[must_use]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Square of the piece that must continue capturing.
    #[must_use]
    pub fn chain(&self) -> Option<Coord> {
        self.chain
    }

    /// Plies since the last capture or uncrowned move.
    #[must_use]
    pub fn quiet_plies(&self) -> u32 {
        self.quiet_plies
    }

    /// Number of pieces a side has left.
    #[must_use]
    pub fn piece_count(&self, color: Color) -> usize {
        self.board.occupied().filter(|(_, p)| p.color == color).count()
    }

    /// Piece at a square.
    #[must_use]
    pub fn piece_at(&self, at: Coord) -> Option<Piece> {
        self.board.get(at).copied()
    }

    /// Hash of board and turn holder.
    #[must_use]
    pub fn position_key(&self) -> u64 {
        let mut hasher = FxHasher::default();
        self.board.hash(&mut hasher);
        self.turn.hash(&mut hasher);
        hasher.finish()
    }

    /// How many times the current position has occurred.
    #[must_use]
    pub fn repetitions(&self) -> u8 {
        self.seen.get(&self.position_key()).copied().unwrap_or(0)
    }

    pub(crate) fn record_position(&mut self) {
        let count = self.seen.entry(self.position_key()).or_insert(0);
        *count = count.saturating_add(1);
    }
}

impl std::fmt::Display for DraughtsState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.board.rows() {
            for col in 0..self.board.cols() {
                let glyph = self
                    .board
                    .get(Coord::new(row, col))
                    .map_or('.', |p| p.glyph());
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        write!(f, "{} to move", self.turn)?;
        if let Some(at) = self.chain {
            write!(f, ", chain at {at}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "outside 8x8")]
    fn test_from_pieces_rejects_off_board_square() {
        let _ = DraughtsState::from_pieces(
            Layout::Standard,
            &[(Coord::new(8, 1), Piece::man(Color::Red))],
            Color::Red,
        );
    }

    #[test]
    fn test_new_state() {
        let state = DraughtsState::new(Layout::Standard);

        assert_eq!(state.turn(), Color::Red);
        assert_eq!(state.chain(), None);
        assert_eq!(state.piece_count(Color::Red), 12);
        assert_eq!(state.repetitions(), 1);
    }

    #[test]
    fn test_position_key_depends_on_turn() {
        let red = DraughtsState::new(Layout::Standard);
        let black = DraughtsState::from_board(Layout::Standard.initial_board(), Color::Black);

        assert_ne!(red.position_key(), black.position_key());
    }

    #[test]
    fn test_display() {
        let state = DraughtsState::from_pieces(
            Layout::Standard,
            &[
                (Coord::new(0, 1), Piece::king(Color::Red)),
                (Coord::new(7, 6), Piece::man(Color::Black)),
            ],
            Color::Black,
        );
        let text = state.to_string();

        assert!(text.starts_with(".R......\n"));
        assert!(text.contains("......b.\n"));
        assert!(text.ends_with("Black to move"));
    }

    #[test]
    fn test_serialization() {
        let state = DraughtsState::new(Layout::Standard);
        let json = serde_json::to_string(&state).unwrap();
        let back: DraughtsState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, back);
    }
}
