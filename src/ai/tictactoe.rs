//! Tic-tac-toe opponents.
//!
//! ## Strategies
//!
//! - `Random`: any empty cell
//! - `Positional`: center, then corners, then edges
//! - `Fork`: win, block, fork, block a fork, then center, corner, edge
//! - `Minimax`: exhaustive search; never loses

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::trace;

use super::difficulty::Difficulty;
use super::policy::{pick, MovePolicy, UniformPolicy};
use super::AiOpponent;
use crate::core::{GameRng, Side};
use crate::games::tictactoe::{solver, Mark, Move, TicTacToe, TicTacToeState, LINES};
use crate::rules::RulesEngine;

const CENTER: u8 = 4;
const CORNERS: [u8; 4] = [0, 2, 6, 8];
const EDGES: [u8; 4] = [1, 3, 5, 7];

/// Move selection strategy for a tic-tac-toe opponent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Random,
    Positional,
    Fork,
    Minimax,
}

impl Strategy {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Random => "random",
            Strategy::Positional => "positional",
            Strategy::Fork => "fork",
            Strategy::Minimax => "minimax",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(Strategy::Random),
            "positional" => Ok(Strategy::Positional),
            "fork" => Ok(Strategy::Fork),
            "minimax" => Ok(Strategy::Minimax),
            other => Err(format!("unknown strategy {other:?}")),
        }
    }
}

impl AiOpponent for TicTacToe {
    fn policy(&self, difficulty: Difficulty) -> Box<dyn MovePolicy<Self>> {
        match self.config().strategy(difficulty) {
            Strategy::Random => Box::new(UniformPolicy),
            Strategy::Positional => Box::new(PositionalPolicy),
            Strategy::Fork => Box::new(ForkPolicy),
            Strategy::Minimax => Box::new(MinimaxPolicy),
        }
    }
}

/// First empty cell by fixed priority: center, corners, edges.
#[derive(Clone, Debug, Default)]
pub struct PositionalPolicy;

impl MovePolicy<TicTacToe> for PositionalPolicy {
    fn name(&self) -> &'static str {
        "positional"
    }

    fn select(
        &self,
        engine: &TicTacToe,
        state: &TicTacToeState,
        side: Mark,
        _rng: &mut GameRng,
    ) -> Option<Move> {
        if engine.legal_moves(state, side).is_empty() {
            return None;
        }
        std::iter::once(CENTER)
            .chain(CORNERS)
            .chain(EDGES)
            .find(|&cell| is_empty(state, cell))
            .map(|cell| Move::new(cell, side))
    }
}

/// Rule-based play around forks.
///
/// In order: complete an own line; block the opponent's line; make a fork;
/// block the opponent's fork; take the center; take a random corner; take a
/// random edge.
#[derive(Clone, Debug, Default)]
pub struct ForkPolicy;

impl ForkPolicy {
    fn choose(state: &TicTacToeState, side: Mark, rng: &mut GameRng) -> Option<u8> {
        let opponent = side.opponent();

        if let Some(&cell) = completing_cells(state, side).first() {
            return Some(cell);
        }
        if let Some(&cell) = completing_cells(state, opponent).first() {
            return Some(cell);
        }
        if let Some(&cell) = fork_cells(state, side).first() {
            return Some(cell);
        }
        if let Some(cell) = block_fork(state, side) {
            return Some(cell);
        }
        if is_empty(state, CENTER) {
            return Some(CENTER);
        }

        let corners: Vec<u8> = CORNERS.into_iter().filter(|&c| is_empty(state, c)).collect();
        if let Some(cell) = pick(&corners, rng) {
            return Some(cell);
        }
        let edges: Vec<u8> = EDGES.into_iter().filter(|&c| is_empty(state, c)).collect();
        pick(&edges, rng)
    }
}

impl MovePolicy<TicTacToe> for ForkPolicy {
    fn name(&self) -> &'static str {
        "fork"
    }

    fn select(
        &self,
        engine: &TicTacToe,
        state: &TicTacToeState,
        side: Mark,
        rng: &mut GameRng,
    ) -> Option<Move> {
        if engine.legal_moves(state, side).is_empty() {
            return None;
        }
        Self::choose(state, side, rng).map(|cell| Move::new(cell, side))
    }
}

/// Exhaustive minimax through [`solver::solve`].
#[derive(Clone, Debug, Default)]
pub struct MinimaxPolicy;

impl MovePolicy<TicTacToe> for MinimaxPolicy {
    fn name(&self) -> &'static str {
        "minimax"
    }

    fn select(
        &self,
        engine: &TicTacToe,
        state: &TicTacToeState,
        side: Mark,
        _rng: &mut GameRng,
    ) -> Option<Move> {
        if engine.legal_moves(state, side).is_empty() {
            return None;
        }
        let solution = solver::solve(state);
        trace!(
            score = solution.score,
            nodes = solution.stats.nodes,
            cache_hits = solution.stats.cache_hits,
            hit_rate = solution.stats.hit_rate(),
            "minimax search"
        );
        solution.best.map(|cell| Move::new(cell, side))
    }
}

// =============================================================================
// Line Helpers
// =============================================================================

fn is_empty(state: &TicTacToeState, cell: u8) -> bool {
    state.cell(cell as usize).is_none()
}

/// Lines holding two of `mark` and one empty cell.
fn open_twos(state: &TicTacToeState, mark: Mark) -> impl Iterator<Item = [usize; 3]> + '_ {
    LINES.into_iter().filter(move |line| {
        let own = line.iter().filter(|&&i| state.cell(i) == Some(mark)).count();
        let empty = line.iter().filter(|&&i| state.cell(i).is_none()).count();
        own == 2 && empty == 1
    })
}

/// Empty cells that complete a line for `mark`, ascending.
fn completing_cells(state: &TicTacToeState, mark: Mark) -> Vec<u8> {
    let mut cells: Vec<u8> = open_twos(state, mark)
        .filter_map(|line| line.into_iter().find(|&i| state.cell(i).is_none()))
        .map(|i| i as u8)
        .collect();
    cells.sort_unstable();
    cells.dedup();
    cells
}

/// Empty cells where `mark` would threaten two lines at once, ascending.
fn fork_cells(state: &TicTacToeState, mark: Mark) -> Vec<u8> {
    state
        .empty_cells()
        .into_iter()
        .filter(|&cell| {
            let mut next = state.clone();
            next.place(cell, mark);
            open_twos(&next, mark).count() >= 2
        })
        .collect()
}

/// Cell that stops the opponent from forking.
///
/// With one fork square, take it. With several, make a threat whose forced
/// answer is not itself a fork square; failing that, take the first fork
/// square.
fn block_fork(state: &TicTacToeState, side: Mark) -> Option<u8> {
    let opponent = side.opponent();
    let forks = fork_cells(state, opponent);
    match forks.as_slice() {
        [] => None,
        [only] => Some(*only),
        [first, ..] => {
            let forcing = state.empty_cells().into_iter().find(|&cell| {
                let mut next = state.clone();
                next.place(cell, side);
                let answers = completing_cells(&next, side);
                !answers.is_empty() && answers.iter().all(|a| !forks.contains(a))
            });
            Some(forcing.unwrap_or(*first))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(s: &str) -> TicTacToeState {
        s.parse().unwrap()
    }

    fn fork_move(s: &str) -> u8 {
        let st = state(s);
        let side = st.turn();
        ForkPolicy
            .select(&TicTacToe::default(), &st, side, &mut GameRng::new(1))
            .unwrap()
            .cell
    }

    #[test]
    fn test_fork_completes_own_line() {
        // O to move: can win at 5 or block X at 2.
        assert_eq!(fork_move("XX. OO. X.."), 5);
    }

    #[test]
    fn test_fork_blocks_line() {
        assert_eq!(fork_move("XX. .O. ..."), 2);
    }

    #[test]
    fn test_fork_creates_fork() {
        // Cell 3 threatens both 0-3-6 and 3-4-5.
        assert_eq!(fork_move("XO. .X. ..O"), 3);
    }

    #[test]
    fn test_fork_blocks_opposite_corner_trap() {
        // X holds opposite corners; O must answer on an edge, not a corner.
        let cell = fork_move("X.. .O. ..X");
        assert!(EDGES.contains(&cell), "got {cell}");
    }

    #[test]
    fn test_fork_opens_in_center() {
        assert_eq!(fork_move("... ... ..."), CENTER);
    }

    #[test]
    fn test_positional_order() {
        let game = TicTacToe::default();
        let mut rng = GameRng::new(0);

        let st = state("... ... ...");
        assert_eq!(PositionalPolicy.select(&game, &st, Mark::X, &mut rng), Some(Move::new(4, Mark::X)));

        let st = state("X.. .O. ...");
        assert_eq!(PositionalPolicy.select(&game, &st, Mark::X, &mut rng), Some(Move::new(2, Mark::X)));
    }

    #[test]
    fn test_minimax_blocks() {
        let game = TicTacToe::default();
        let st = state("XX. .O. ...");
        let mv = MinimaxPolicy.select(&game, &st, Mark::O, &mut GameRng::new(0));
        assert_eq!(mv, Some(Move::new(2, Mark::O)));
    }

    #[test]
    fn test_policies_respect_turn() {
        let game = TicTacToe::default();
        let st = state("X.. ... ...");
        let mut rng = GameRng::new(0);

        assert_eq!(ForkPolicy.select(&game, &st, Mark::X, &mut rng), None);
        assert_eq!(MinimaxPolicy.select(&game, &st, Mark::X, &mut rng), None);
        assert_eq!(PositionalPolicy.select(&game, &st, Mark::X, &mut rng), None);
    }

    #[test]
    fn test_strategy_parse() {
        assert_eq!("MiniMax".parse(), Ok(Strategy::Minimax));
        assert!("alphabeta".parse::<Strategy>().is_err());
    }

    #[test]
    fn test_default_strategy_table() {
        let game = TicTacToe::default();
        assert_eq!(game.policy(Difficulty::Easy).name(), "uniform");
        assert_eq!(game.policy(Difficulty::Medium).name(), "fork");
        assert_eq!(game.policy(Difficulty::Hard).name(), "minimax");
        assert_eq!(game.policy(Difficulty::Insane).name(), "minimax");
    }
}
