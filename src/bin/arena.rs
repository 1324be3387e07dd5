//! Arena - AI vs AI matches
//!
//! Seats a computer opponent on both sides, plays a series of games through
//! a [`GameSession`], and prints the scoreboard. Configuration comes from an
//! optional TOML file with `TABLETOP_*` environment overrides; CLI flags win.

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{info, warn};

use tabletop::ai::{AiOpponent, Difficulty};
use tabletop::config::{EngineConfig, SessionConfig};
use tabletop::games::draughts::{Draughts, Layout};
use tabletop::games::tictactoe::TicTacToe;
use tabletop::session::{GameSession, SessionPhase};
use tabletop::Side;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Game {
    Draughts,
    Tictactoe,
}

#[derive(Debug, Parser)]
#[command(name = "arena", about = "Play AI opponents against each other")]
struct Args {
    /// Game to play
    #[arg(long, value_enum, default_value = "draughts")]
    game: Game,

    /// Difficulty of the side moving first
    #[arg(long, default_value = "hard")]
    first: Difficulty,

    /// Difficulty of the side moving second
    #[arg(long, default_value = "medium")]
    second: Difficulty,

    /// Number of games
    #[arg(long, default_value_t = 10)]
    games: u32,

    /// Session seed; overrides the config file
    #[arg(long)]
    seed: Option<u64>,

    /// Draughts board layout; overrides the config file
    #[arg(long)]
    layout: Option<Layout>,

    /// Abandon a game after this many plies
    #[arg(long, default_value_t = 400)]
    max_plies: usize,

    /// TOML config file
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn init_tracing(level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

fn load_config(args: &Args) -> Result<EngineConfig> {
    let mut config = match &args.config {
        Some(path) => EngineConfig::load_from_path(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => EngineConfig::default().apply_env_overrides(),
    };

    if let Some(seed) = args.seed {
        config.session = config.session.with_seed(seed);
    }
    if let Some(layout) = args.layout {
        config.draughts = config.draughts.with_layout(layout);
    }
    // Nobody is watching; don't pace AI moves.
    config.session = config.session.with_ai_delay_ms(0);
    Ok(config)
}

/// Play `games` games and return the final session.
fn play<E: AiOpponent>(
    engine: E,
    session_config: &SessionConfig,
    args: &Args,
) -> Result<GameSession<E>> {
    let [first, second] = E::Side::both();
    let mut session = GameSession::new(engine, session_config)
        .with_ai(first, args.first)
        .with_ai(second, args.second);

    for game in 1..=args.games {
        if game > 1 {
            session.restart();
        }
        session.start();

        while session.phase() == SessionPhase::InProgress {
            if session.history().len() >= args.max_plies {
                warn!(game, plies = session.history().len(), "game abandoned");
                break;
            }
            session
                .run_ai_turn()
                .with_context(|| format!("game {game}, ply {}", session.history().len()))?;
        }

        info!(
            game,
            status = ?session.status(),
            plies = session.history().len(),
            "finished"
        );
    }

    Ok(session)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    if args.games == 0 {
        bail!("--games must be at least 1");
    }

    let config = load_config(&args)?;
    info!(
        game = ?args.game,
        first = %args.first,
        second = %args.second,
        games = args.games,
        seed = config.session.seed,
        "arena starting"
    );

    let score = match args.game {
        Game::Draughts => {
            let session = play(Draughts::new(config.draughts.clone()), &config.session, &args)?;
            session.scoreboard().to_string()
        }
        Game::Tictactoe => {
            let session = play(TicTacToe::new(config.tictactoe), &config.session, &args)?;
            session.scoreboard().to_string()
        }
    };

    println!("{score}");
    Ok(())
}
