use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use tabletop::ai::{choose_ai_move, Difficulty};
use tabletop::games::draughts::{movegen, Draughts, DraughtsState, Layout};
use tabletop::games::tictactoe::{solver, TicTacToeState};
use tabletop::{GameRng, RulesEngine};

fn bench_solver(c: &mut Criterion) {
    let mut group = c.benchmark_group("tictactoe_solver");

    group.bench_function("solve_empty", |b| {
        let state = TicTacToeState::new();
        b.iter(|| solver::solve(&state));
    });

    group.bench_function("solve_midgame", |b| {
        let state: TicTacToeState = "X.. .O. ..X".parse().unwrap();
        b.iter(|| solver::solve(&state));
    });

    group.finish();
}

fn bench_draughts(c: &mut Criterion) {
    let mut group = c.benchmark_group("draughts");

    for layout in [Layout::Standard, Layout::International] {
        let state = DraughtsState::new(layout);
        group.bench_function(format!("moves_for_{layout:?}").to_lowercase(), |b| {
            b.iter(|| movegen::moves_for(state.board(), state.turn(), None, false));
        });
    }

    group.bench_function("ai_turn_hard", |b| {
        let game = Draughts::default();
        let state = game.initial_state();
        b.iter_batched(
            || GameRng::new(7),
            |mut rng| choose_ai_move(&game, &state, state.turn(), Difficulty::Hard, &mut rng),
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_solver, bench_draughts);
criterion_main!(benches);
