//! The game session state machine.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::history::{self, History, MoveRecord};
use super::pacing::AiTicket;
use super::remote::{RemoteEvent, SessionRole, Snapshot};
use super::score::Scoreboard;
use crate::ai::{choose_ai_move, AiOpponent, Difficulty};
use crate::config::SessionConfig;
use crate::core::{EngineError, GameRng, Rejection};
use crate::rules::{GameStatus, Transition};

/// Where a session is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Fresh state, not yet started.
    Setup,
    /// Moves are being accepted.
    InProgress,
    /// Finished; only a restart leaves this phase.
    GameOver,
}

/// One game at a time of a two-sided game, with optional AI seats.
///
/// Human moves, AI moves, and remote updates all go through the same
/// validate-resolve-evaluate path of the underlying engine.
///
/// ```
/// use tabletop::ai::Difficulty;
/// use tabletop::config::SessionConfig;
/// use tabletop::games::tictactoe::{Mark, Move, TicTacToe};
/// use tabletop::session::{GameSession, SessionPhase};
///
/// let mut session = GameSession::new(TicTacToe::default(), &SessionConfig::default())
///     .with_ai(Mark::O, Difficulty::Hard);
/// session.start();
///
/// session.submit_move(Move::new(4, Mark::X)).unwrap();
/// assert!(session.is_ai_turn());
///
/// let ticket = session.schedule_ai_move().unwrap();
/// session.resolve_ai_move(ticket).unwrap();
/// assert_eq!(session.phase(), SessionPhase::InProgress);
/// assert_eq!(session.history().len(), 2);
/// ```
pub struct GameSession<E: AiOpponent> {
    engine: E,
    state: E::State,
    phase: SessionPhase,
    status: GameStatus<E::Side>,

    ai_seats: SmallVec<[(E::Side, Difficulty); 2]>,
    ai_delay: Duration,

    history: History<E::Side, E::Move>,
    scoreboard: Scoreboard<E::Side>,

    /// Bumped on restart, exit, and remote resync; invalidates outstanding
    /// AI tickets.
    generation: u64,
    session_rng: GameRng,
    rng: GameRng,

    role: SessionRole,
    local_side: Option<E::Side>,
    rematch_requests: SmallVec<[E::Side; 2]>,
}

impl<E: AiOpponent> GameSession<E> {
    /// New session in SETUP with no AI seats.
    #[must_use]
    pub fn new(engine: E, config: &SessionConfig) -> Self {
        let mut session_rng = GameRng::new(config.seed);
        let rng = session_rng.fork();
        let state = engine.initial_state();

        Self {
            engine,
            state,
            phase: SessionPhase::Setup,
            status: GameStatus::InProgress,
            ai_seats: SmallVec::new(),
            ai_delay: config.ai_delay(),
            history: History::new(),
            scoreboard: Scoreboard::default(),
            generation: 0,
            session_rng,
            rng,
            role: SessionRole::Local,
            local_side: None,
            rematch_requests: SmallVec::new(),
        }
    }

    /// Seat an AI for `side`.
    #[must_use]
    pub fn with_ai(mut self, side: E::Side, difficulty: Difficulty) -> Self {
        self.set_ai(side, Some(difficulty));
        self
    }

    #[must_use]
    pub fn with_role(mut self, role: SessionRole) -> Self {
        self.role = role;
        self
    }

    /// Seat or unseat an AI for `side`.
    pub fn set_ai(&mut self, side: E::Side, difficulty: Option<Difficulty>) {
        self.ai_seats.retain(|(s, _)| *s != side);
        if let Some(difficulty) = difficulty {
            self.ai_seats.push((side, difficulty));
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    #[must_use]
    pub fn state(&self) -> &E::State {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn status(&self) -> GameStatus<E::Side> {
        self.status
    }

    #[must_use]
    pub fn turn(&self) -> E::Side {
        self.engine.turn(&self.state)
    }

    #[must_use]
    pub fn history(&self) -> &History<E::Side, E::Move> {
        &self.history
    }

    #[must_use]
    pub fn scoreboard(&self) -> &Scoreboard<E::Side> {
        &self.scoreboard
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn role(&self) -> SessionRole {
        self.role
    }

    /// Side assigned to this participant in a multiplayer session.
    #[must_use]
    pub fn local_side(&self) -> Option<E::Side> {
        self.local_side
    }

    /// Difficulty of the AI seated for `side`, if any.
    #[must_use]
    pub fn ai_difficulty(&self, side: E::Side) -> Option<Difficulty> {
        self.ai_seats
            .iter()
            .find(|(s, _)| *s == side)
            .map(|&(_, d)| d)
    }

    /// Whether an AI holds the turn in a running game.
    #[must_use]
    pub fn is_ai_turn(&self) -> bool {
        self.phase == SessionPhase::InProgress && self.ai_difficulty(self.turn()).is_some()
    }

    // === Lifecycle ===

    /// Leave SETUP. Does nothing in any other phase.
    pub fn start(&mut self) {
        if self.phase != SessionPhase::Setup {
            debug!(phase = ?self.phase, "start ignored");
            return;
        }
        self.phase = SessionPhase::InProgress;
        info!(game = self.engine.name(), generation = self.generation, "game started");

        let status = self.engine.status(&self.state);
        if status.is_over() {
            self.finish(status);
        }
    }

    /// Fresh state in SETUP; outstanding AI tickets go stale.
    pub fn restart(&mut self) {
        self.generation += 1;
        self.state = self.engine.initial_state();
        self.phase = SessionPhase::Setup;
        self.status = GameStatus::InProgress;
        self.history = History::new();
        self.rng = self.session_rng.fork();
        self.rematch_requests.clear();
        info!(game = self.engine.name(), generation = self.generation, "session restarted");
    }

    fn finish(&mut self, status: GameStatus<E::Side>) {
        self.status = status;
        self.phase = SessionPhase::GameOver;
        self.scoreboard.record(&status);
        info!(
            game = self.engine.name(),
            ?status,
            plies = self.history.len(),
            score = %self.scoreboard,
            "game over"
        );
    }

    // === Moves ===

    /// Validate, apply, and evaluate a move for the side to move.
    ///
    /// A rejected move leaves the session untouched.
    pub fn submit_move(&mut self, mv: E::Move) -> Result<Transition<E::Side>, EngineError> {
        if self.phase != SessionPhase::InProgress {
            return Err(EngineError::NotInProgress);
        }
        let side = self.turn();
        if self.role != SessionRole::Local
            && self.local_side.is_some_and(|local| local != side)
            && self.ai_difficulty(side).is_none()
        {
            return Err(EngineError::IllegalMove(Rejection::WrongSide));
        }

        let transition = match self.engine.apply_move(&mut self.state, &mv) {
            Ok(t) => t,
            Err(err) => {
                debug!(game = self.engine.name(), ?mv, %err, "move rejected");
                return Err(err);
            }
        };

        let record: MoveRecord<_, _> = history::push(&mut self.history, side, mv);
        debug!(ply = record.ply, %side, chain = transition.chain_continues, "move recorded");

        self.status = transition.status;
        if transition.status.is_over() {
            self.finish(transition.status);
        }
        Ok(transition)
    }

    /// Issue a ticket for the AI holding the turn.
    pub fn schedule_ai_move(&self) -> Result<AiTicket, EngineError> {
        if self.phase != SessionPhase::InProgress {
            return Err(EngineError::NotInProgress);
        }
        if !self.is_ai_turn() {
            return Err(EngineError::NotAiTurn);
        }
        Ok(AiTicket {
            generation: self.generation,
            ply: self.history.len() as u32,
            delay: self.ai_delay,
        })
    }

    /// Play the AI move a ticket was issued for.
    ///
    /// Returns `Ok(None)` and does nothing if the ticket is stale or the
    /// side to move no longer has an AI seat.
    pub fn resolve_ai_move(
        &mut self,
        ticket: AiTicket,
    ) -> Result<Option<Transition<E::Side>>, EngineError> {
        if self.phase != SessionPhase::InProgress
            || !ticket.is_current(self.generation, self.history.len() as u32)
        {
            debug!(
                ticket_generation = ticket.generation,
                generation = self.generation,
                "stale AI ticket discarded"
            );
            return Ok(None);
        }
        if !self.is_ai_turn() {
            debug!(side = %self.turn(), "AI ticket discarded, side to move is not seated");
            return Ok(None);
        }
        self.play_ai_move().map(Some)
    }

    /// Play the AI's whole turn, chain continuations included.
    pub fn run_ai_turn(&mut self) -> Result<Vec<Transition<E::Side>>, EngineError> {
        if self.phase != SessionPhase::InProgress {
            return Err(EngineError::NotInProgress);
        }
        if !self.is_ai_turn() {
            return Err(EngineError::NotAiTurn);
        }

        let side = self.turn();
        let mut transitions = Vec::new();
        loop {
            let transition = self.play_ai_move()?;
            transitions.push(transition);
            if !transition.chain_continues
                || self.phase != SessionPhase::InProgress
                || self.turn() != side
            {
                break;
            }
        }
        Ok(transitions)
    }

    fn play_ai_move(&mut self) -> Result<Transition<E::Side>, EngineError> {
        let side = self.turn();
        let difficulty = self.ai_difficulty(side).ok_or(EngineError::NotAiTurn)?;

        match choose_ai_move(&self.engine, &self.state, side, difficulty, &mut self.rng) {
            Some(mv) => self.submit_move(mv),
            None => {
                let status = GameStatus::NoLegalMoves(side);
                self.finish(status);
                Ok(Transition {
                    status,
                    turn: side,
                    chain_continues: false,
                })
            }
        }
    }

    // === Multiplayer ===

    /// Current state as a snapshot for the other participant.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<E::State> {
        Snapshot {
            ply: self.history.len() as u32,
            state: self.state.clone(),
        }
    }

    /// Replace the state with one received from the other participant.
    ///
    /// The snapshot is checked for structural sanity only. On failure the
    /// last-known-good state is kept. A finished session refuses snapshots
    /// until it is restarted. Outstanding AI tickets go stale.
    pub fn apply_snapshot(&mut self, snapshot: Snapshot<E::State>) -> Result<(), EngineError> {
        if self.phase == SessionPhase::GameOver {
            debug!(ply = snapshot.ply, "snapshot ignored after game over");
            return Err(EngineError::NotInProgress);
        }
        if let Err(reason) = self.engine.validate_snapshot(&snapshot.state) {
            warn!(game = self.engine.name(), %reason, "remote snapshot rejected");
            return Err(EngineError::MalformedExternalUpdate(reason));
        }

        self.state = snapshot.state;
        self.generation += 1;
        debug!(game = self.engine.name(), ply = snapshot.ply, "remote snapshot applied");

        if self.phase == SessionPhase::Setup {
            self.phase = SessionPhase::InProgress;
        }
        let status = self.engine.status(&self.state);
        self.status = status;
        if status.is_over() && self.phase == SessionPhase::InProgress {
            self.finish(status);
        }
        Ok(())
    }

    /// Handle a lifecycle event from the other participant.
    pub fn handle_remote_event(&mut self, event: RemoteEvent<E::Side>) {
        match event {
            RemoteEvent::AssignSide(side) => {
                info!(%side, "side assigned");
                self.local_side = Some(side);
            }
            RemoteEvent::RematchRequested(side) => self.request_rematch(side),
            RemoteEvent::OpponentExited => {
                self.generation += 1;
                self.phase = SessionPhase::GameOver;
                self.status = self.engine.status(&self.state);
                info!(game = self.engine.name(), "opponent left");
            }
        }
    }

    /// Ask for a rematch on behalf of `side`.
    ///
    /// Once both sides have asked, the session restarts and starts at once.
    pub fn request_rematch(&mut self, side: E::Side) {
        if !self.rematch_requests.contains(&side) {
            self.rematch_requests.push(side);
        }
        debug!(%side, requests = self.rematch_requests.len(), "rematch requested");

        if self.rematch_requests.len() == 2 {
            self.restart();
            self.start();
        }
    }
}

impl<E: AiOpponent> GameSession<E>
where
    E::State: serde::Serialize + serde::de::DeserializeOwned,
{
    /// Decode and apply a snapshot received as bytes.
    pub fn apply_snapshot_bytes(&mut self, bytes: &[u8]) -> Result<(), EngineError> {
        match Snapshot::from_bytes(bytes) {
            Ok(snapshot) => self.apply_snapshot(snapshot),
            Err(err) => {
                warn!(game = self.engine.name(), %err, "undecodable remote snapshot");
                Err(err)
            }
        }
    }
}
