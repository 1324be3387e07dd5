//! Exhaustive minimax solver.
//!
//! ## Scoring
//!
//! Scores are from the point of view of the side to move. A finished game the
//! side to move has lost scores −10, a draw 0. Each ply back toward the root
//! shrinks a score's magnitude by one, so a root score of `10 - p` means a
//! forced win in `p` plies and faster wins always rank higher.
//!
//! Because scores are node-relative, a position's score does not depend on
//! how deep it sits in the tree and can be cached by board alone.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::board::TicTacToeState;

/// Score magnitude of a finished game.
pub const WIN_SCORE: i32 = 10;

/// Statistics collected during one search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions visited, including cache hits.
    pub nodes: u64,

    /// Positions answered from the transposition cache.
    pub cache_hits: u64,

    /// Distinct positions scored.
    pub cached_positions: usize,

    /// Deepest ply reached below the root.
    pub max_depth: u8,
}

impl SearchStats {
    /// Fraction of visited positions answered from the cache.
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        if self.nodes == 0 {
            0.0
        } else {
            self.cache_hits as f64 / self.nodes as f64
        }
    }
}

/// Result of a search from one position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    /// Best cell for the side to move; `None` if the game is over.
    pub best: Option<u8>,

    /// Score of the position for the side to move.
    pub score: i32,

    pub stats: SearchStats,
}

/// Solve a position.
///
/// Ties go to the lowest cell index.
///
/// ```
/// use tabletop::games::tictactoe::{solver, TicTacToeState};
///
/// let state: TicTacToeState = "XX. OO. ...".parse().unwrap();
/// let solution = solver::solve(&state);
///
/// assert_eq!(solution.best, Some(2));
/// assert_eq!(solution.score, 9);
/// ```
#[must_use]
pub fn solve(state: &TicTacToeState) -> Solution {
    let mut search = Search::default();

    let mut best = None;
    let mut best_score = i32::MIN;
    if is_terminal(state) {
        best_score = search.score(state, 0);
    } else {
        search.stats.nodes += 1;
        for cell in state.empty_cells() {
            let mut child = state.clone();
            child.place(cell, state.turn());
            let score = back_up(search.score(&child, 1));
            if score > best_score {
                best_score = score;
                best = Some(cell);
            }
        }
    }

    search.stats.cached_positions = search.cache.len();
    Solution {
        best,
        score: best_score,
        stats: search.stats,
    }
}

/// Score of a position for the side to move.
#[must_use]
pub fn evaluate(state: &TicTacToeState) -> i32 {
    Search::default().score(state, 0)
}

#[derive(Default)]
struct Search {
    cache: FxHashMap<u32, i32>,
    stats: SearchStats,
}

impl Search {
    fn score(&mut self, state: &TicTacToeState, depth: u8) -> i32 {
        self.stats.nodes += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);

        let key = state.code();
        if let Some(&score) = self.cache.get(&key) {
            self.stats.cache_hits += 1;
            return score;
        }

        let score = if state.winner().is_some() {
            // Only the previous mover can have completed a line.
            -WIN_SCORE
        } else if state.board().is_full() {
            0
        } else {
            let mut best = i32::MIN;
            for cell in state.empty_cells() {
                let mut child = state.clone();
                child.place(cell, state.turn());
                best = best.max(back_up(self.score(&child, depth + 1)));
            }
            best
        };

        self.cache.insert(key, score);
        score
    }
}

fn is_terminal(state: &TicTacToeState) -> bool {
    state.winner().is_some() || state.board().is_full()
}

/// Convert a child's score to the parent's point of view, one ply further out.
fn back_up(child: i32) -> i32 {
    let score = -child;
    score - score.signum()
}
