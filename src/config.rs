//! Engine configuration.
//!
//! ## Sources
//!
//! 1. Built-in defaults (`EngineConfig::default()`)
//! 2. A TOML file with optional `[draughts]`, `[tictactoe]`, and `[session]`
//!    tables; missing keys keep their defaults
//! 3. Environment overrides named `TABLETOP_<SECTION>_<KEY>`
//!
//! ```
//! use tabletop::config::EngineConfig;
//! use tabletop::games::draughts::Layout;
//!
//! let config = EngineConfig::from_toml_str(
//!     r#"
//!     [draughts]
//!     layout = "international"
//!     forced_capture = true
//!
//!     [session]
//!     ai_delay_ms = 250
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.draughts.layout, Layout::International);
//! assert_eq!(config.draughts.quiet_move_limit, 80);
//! assert_eq!(config.session.ai_delay_ms, 250);
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, warn};

use crate::ai::{Difficulty, Strategy};
use crate::core::ConfigError;
use crate::games::draughts::Layout;

/// Complete engine configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub draughts: DraughtsConfig,
    pub tictactoe: TicTacToeConfig,
    pub session: SessionConfig,
}

/// Draughts rules and AI weights.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DraughtsConfig {
    /// Board layout.
    pub layout: Layout,

    /// A side with a capture available must capture.
    pub forced_capture: bool,

    /// Plies without a capture or uncrowned move before a draw (0 = never).
    pub quiet_move_limit: u32,

    /// Occurrences of one position before a draw (below 2 = never).
    pub repetition_limit: u8,

    /// Non-capturing move weight per difficulty.
    pub weights: DifficultyWeights,
}

impl Default for DraughtsConfig {
    fn default() -> Self {
        Self {
            layout: Layout::Standard,
            forced_capture: false,
            quiet_move_limit: 80,
            repetition_limit: 3,
            weights: DifficultyWeights::default(),
        }
    }
}

impl DraughtsConfig {
    #[must_use]
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn with_forced_capture(mut self, forced: bool) -> Self {
        self.forced_capture = forced;
        self
    }

    #[must_use]
    pub fn with_quiet_move_limit(mut self, plies: u32) -> Self {
        self.quiet_move_limit = plies;
        self
    }

    #[must_use]
    pub fn with_repetition_limit(mut self, count: u8) -> Self {
        self.repetition_limit = count;
        self
    }

    #[must_use]
    pub fn with_weights(mut self, weights: DifficultyWeights) -> Self {
        self.weights = weights;
        self
    }
}

/// Weight of a non-capturing move, per difficulty. Captures always weigh 1.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyWeights {
    pub easy: f64,
    pub medium: f64,
    pub hard: f64,
    pub insane: f64,
}

impl Default for DifficultyWeights {
    fn default() -> Self {
        Self {
            easy: 0.0,
            medium: 0.3,
            hard: 0.6,
            insane: 0.9,
        }
    }
}

impl DifficultyWeights {
    /// Weight for a tier, clamped to `[0, 1]`.
    #[must_use]
    pub fn weight(&self, difficulty: Difficulty) -> f64 {
        let raw = match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
            Difficulty::Insane => self.insane,
        };
        if raw.is_nan() {
            0.0
        } else {
            raw.clamp(0.0, 1.0)
        }
    }
}

/// Tic-tac-toe strategy per difficulty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TicTacToeConfig {
    pub easy: Strategy,
    pub medium: Strategy,
    pub hard: Strategy,
    pub insane: Strategy,
}

impl Default for TicTacToeConfig {
    fn default() -> Self {
        Self {
            easy: Strategy::Random,
            medium: Strategy::Fork,
            hard: Strategy::Minimax,
            insane: Strategy::Minimax,
        }
    }
}

impl TicTacToeConfig {
    #[must_use]
    pub fn strategy(&self, difficulty: Difficulty) -> Strategy {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
            Difficulty::Insane => self.insane,
        }
    }

    #[must_use]
    pub fn with_strategy(mut self, difficulty: Difficulty, strategy: Strategy) -> Self {
        let slot = match difficulty {
            Difficulty::Easy => &mut self.easy,
            Difficulty::Medium => &mut self.medium,
            Difficulty::Hard => &mut self.hard,
            Difficulty::Insane => &mut self.insane,
        };
        *slot = strategy;
        self
    }
}

/// Session pacing and randomness.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Pause before an AI move is played, in milliseconds.
    pub ai_delay_ms: u64,

    /// Seed for AI randomness. Same seed, same games.
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ai_delay_ms: 500,
            seed: 42,
        }
    }
}

impl SessionConfig {
    #[must_use]
    pub fn ai_delay(&self) -> Duration {
        Duration::from_millis(self.ai_delay_ms)
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_ai_delay_ms(mut self, ms: u64) -> Self {
        self.ai_delay_ms = ms;
        self
    }
}

// =============================================================================
// Loading
// =============================================================================

impl EngineConfig {
    /// Parse a TOML document. Environment overrides are not applied.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Read a TOML file and apply environment overrides.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), "loaded config");
        Ok(config.apply_env_overrides())
    }

    /// Apply `TABLETOP_<SECTION>_<KEY>` overrides from the process environment.
    #[must_use]
    pub fn apply_env_overrides(self) -> Self {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup.
    ///
    /// Values that fail to parse are logged and skipped.
    #[must_use]
    pub fn apply_overrides(self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = self;

        macro_rules! env_override {
            ($($field:ident).+, $key:expr) => {
                if let Some(raw) = lookup($key) {
                    match raw.trim().parse() {
                        Ok(value) => config.$($field).+ = value,
                        Err(_) => warn!(key = $key, value = %raw, "ignoring unparseable override"),
                    }
                }
            };
        }

        // Draughts
        env_override!(draughts.layout, "TABLETOP_DRAUGHTS_LAYOUT");
        env_override!(draughts.forced_capture, "TABLETOP_DRAUGHTS_FORCED_CAPTURE");
        env_override!(draughts.quiet_move_limit, "TABLETOP_DRAUGHTS_QUIET_MOVE_LIMIT");
        env_override!(draughts.repetition_limit, "TABLETOP_DRAUGHTS_REPETITION_LIMIT");
        env_override!(draughts.weights.easy, "TABLETOP_DRAUGHTS_WEIGHT_EASY");
        env_override!(draughts.weights.medium, "TABLETOP_DRAUGHTS_WEIGHT_MEDIUM");
        env_override!(draughts.weights.hard, "TABLETOP_DRAUGHTS_WEIGHT_HARD");
        env_override!(draughts.weights.insane, "TABLETOP_DRAUGHTS_WEIGHT_INSANE");

        // Tic-tac-toe
        env_override!(tictactoe.easy, "TABLETOP_TICTACTOE_EASY");
        env_override!(tictactoe.medium, "TABLETOP_TICTACTOE_MEDIUM");
        env_override!(tictactoe.hard, "TABLETOP_TICTACTOE_HARD");
        env_override!(tictactoe.insane, "TABLETOP_TICTACTOE_INSANE");

        // Session
        env_override!(session.ai_delay_ms, "TABLETOP_SESSION_AI_DELAY_MS");
        env_override!(session.seed, "TABLETOP_SESSION_SEED");

        config
    }
}
