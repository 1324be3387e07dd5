//! Property tests over random playouts.

use proptest::prelude::*;

use tabletop::ai::{choose_ai_move, Difficulty};
use tabletop::config::DraughtsConfig;
use tabletop::games::draughts::{Color, Draughts, DraughtsState, Layout};
use tabletop::games::tictactoe::{Mark, TicTacToe, TicTacToeState};
use tabletop::{Coord, GameRng, RulesEngine, Side};

fn draughts_game() -> impl Strategy<Value = Draughts> {
    (any::<bool>(), any::<bool>()).prop_map(|(international, forced)| {
        let layout = if international {
            Layout::International
        } else {
            Layout::Standard
        };
        Draughts::new(
            DraughtsConfig::default()
                .with_layout(layout)
                .with_forced_capture(forced),
        )
    })
}

/// Play `choices` as indices into the legal move list.
fn draughts_after(game: &Draughts, choices: &[usize]) -> DraughtsState {
    let mut state = game.initial_state();
    for &choice in choices {
        let side = game.turn(&state);
        let moves = game.legal_moves(&state, side);
        if moves.is_empty() {
            break;
        }
        let mv = moves[choice % moves.len()];
        game.apply_move(&mut state, &mv).unwrap();
    }
    state
}

fn tictactoe_after(game: &TicTacToe, choices: &[usize]) -> TicTacToeState {
    let mut state = game.initial_state();
    for &choice in choices {
        let moves = game.legal_moves(&state, state.turn());
        if moves.is_empty() {
            break;
        }
        game.apply_move(&mut state, &moves[choice % moves.len()]).unwrap();
    }
    state
}

fn every_square(rows: u8, cols: u8) -> impl Iterator<Item = Coord> {
    (0..rows).flat_map(move |r| (0..cols).map(move |c| Coord::new(r, c)))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Enumerated moves always validate, and validation accepts nothing
    /// beyond them.
    #[test]
    fn prop_legal_moves_match_validation(
        game in draughts_game(),
        choices in prop::collection::vec(any::<usize>(), 0..60),
    ) {
        let state = draughts_after(&game, &choices);
        let side = game.turn(&state);
        let legal = game.legal_moves(&state, side);

        for mv in &legal {
            prop_assert!(game.validate(&state, mv).is_ok(), "{mv} enumerated but rejected");
        }

        let rows = state.board().rows();
        let cols = state.board().cols();
        for (from, _) in state.board().occupied().filter(|(_, p)| p.color == side) {
            for to in every_square(rows, cols) {
                let mv = tabletop::games::draughts::Move::new(from, to);
                if game.is_legal(&state, &mv) {
                    prop_assert!(legal.contains(&mv), "{mv} validated but not enumerated");
                }
            }
        }
    }

    #[test]
    fn prop_piece_count_never_increases(
        game in draughts_game(),
        choices in prop::collection::vec(any::<usize>(), 1..80),
    ) {
        let mut state = game.initial_state();
        for choice in choices {
            let side = game.turn(&state);
            let moves = game.legal_moves(&state, side);
            if moves.is_empty() {
                break;
            }
            let mv = moves[choice % moves.len()];
            let before = state.piece_count(Color::Red) + state.piece_count(Color::Black);
            let opponent_before = state.piece_count(side.opponent());

            let t = game.apply_move(&mut state, &mv).unwrap();

            let after = state.piece_count(Color::Red) + state.piece_count(Color::Black);
            if mv.is_capture() {
                prop_assert_eq!(after + 1, before);
                prop_assert_eq!(state.piece_count(side.opponent()) + 1, opponent_before);
                prop_assert_eq!(t.chain_continues, t.turn == side);
            } else {
                prop_assert_eq!(after, before);
                prop_assert!(!t.chain_continues);
            }
        }
    }

    #[test]
    fn prop_ai_moves_are_legal_and_pure(
        game in draughts_game(),
        choices in prop::collection::vec(any::<usize>(), 0..40),
        seed in any::<u64>(),
        tier in 0usize..4,
    ) {
        let state = draughts_after(&game, &choices);
        let before = state.clone();
        let side = game.turn(&state);
        let mut rng = GameRng::new(seed);

        let mv = choose_ai_move(&game, &state, side, Difficulty::ALL[tier], &mut rng);
        prop_assert_eq!(&state, &before);
        match mv {
            Some(mv) => prop_assert!(game.is_legal(&state, &mv)),
            None => prop_assert!(game.legal_moves(&state, side).is_empty()),
        }
    }

    #[test]
    fn prop_tictactoe_ai_moves_are_legal(
        choices in prop::collection::vec(any::<usize>(), 0..8),
        seed in any::<u64>(),
        tier in 0usize..4,
    ) {
        let game = TicTacToe::default();
        let state = tictactoe_after(&game, &choices);
        let side = state.turn();
        let mut rng = GameRng::new(seed);

        match choose_ai_move(&game, &state, side, Difficulty::ALL[tier], &mut rng) {
            Some(mv) => {
                prop_assert!(game.is_legal(&state, &mv));
                prop_assert_eq!(mv.mark, side);
            }
            None => prop_assert!(game.status(&state).is_over()),
        }
    }

    #[test]
    fn prop_snapshots_of_reachable_states_are_sane(
        game in draughts_game(),
        choices in prop::collection::vec(any::<usize>(), 0..60),
        ttt_choices in prop::collection::vec(any::<usize>(), 0..9),
    ) {
        let state = draughts_after(&game, &choices);
        prop_assert!(game.validate_snapshot(&state).is_ok());

        let ttt = TicTacToe::default();
        let ttt_state = tictactoe_after(&ttt, &ttt_choices);
        prop_assert!(ttt.validate_snapshot(&ttt_state).is_ok());
        prop_assert!(ttt_state.turn() == Mark::X || ttt_state.empty_cells().len() % 2 == 0);
    }
}
