//! Game session - the Init/Playing/Win/Die state machine
//!
//! This module ties together the track, the jump motion and the deferred input guard.
//! The host feeds it discrete actions and fixed ticks; landings are evaluated only
//! after the motion reports that a jump has finished.

use crate::config::SessionConfig;
use crate::motion::JumpMotion;
use crate::observer::{NullObserver, SessionObserver};
use crate::rng::{SimpleRng, TrackRng};
use crate::snapshot::SessionSnapshot;
use crate::timer::{DeferredQueue, DeferredTask};
use crate::track::Track;
use crate::types::*;

/// What a finished jump resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpOutcome {
    /// Landed on solid ground; still playing
    Landed { index: u32 },
    /// Landed on a gap
    Fell { index: u32 },
    /// Jumped past the last cell
    Finished { score: u32 },
}

/// One playthrough from `Init` to `Win`/`Die`, replayable.
#[derive(Debug, Clone)]
pub struct GameSession<R = SimpleRng, O = NullObserver> {
    config: SessionConfig,
    rng: R,
    observer: O,
    state: GameState,
    track: Track,
    motion: JumpMotion,
    /// Authoritative cell index of the player.
    logical_index: u32,
    /// Target of the jump in flight, committed when the motion completes.
    candidate_index: Option<u32>,
    /// Displayed step counter; equals `logical_index` whenever a jump is not in flight.
    steps: u32,
    input_enabled: bool,
    deferred: DeferredQueue,
    /// Monotonic session id (increments on replay).
    session_id: u32,
    result: Option<GameResult>,
}

impl GameSession {
    /// Create a session with default settings and a seeded RNG
    pub fn new(seed: u32) -> Self {
        Self::with_config(SessionConfig::default(), seed)
    }

    pub fn with_config(config: SessionConfig, seed: u32) -> Self {
        Self::with_rng(config, SimpleRng::new(seed))
    }
}

impl<R: TrackRng> GameSession<R, NullObserver> {
    pub fn with_rng(config: SessionConfig, rng: R) -> Self {
        Self::with_observer(config, rng, NullObserver)
    }
}

impl<R: TrackRng, O: SessionObserver> GameSession<R, O> {
    /// Create a session that reports to `observer`. The session starts in `Init`.
    pub fn with_observer(config: SessionConfig, rng: R, observer: O) -> Self {
        let mut session = Self {
            config,
            rng,
            observer,
            state: GameState::Init,
            track: Track::solid(1),
            motion: JumpMotion::with_jump_time(config.jump_time_ms),
            logical_index: 0,
            candidate_index: None,
            steps: 0,
            input_enabled: false,
            deferred: DeferredQueue::new(),
            session_id: 0,
            result: None,
        };
        session.enter_init();
        session
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn track(&self) -> &Track {
        &self.track
    }

    pub fn logical_index(&self) -> u32 {
        self.logical_index
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn position(&self) -> Vec3 {
        self.motion.position()
    }

    pub fn is_jumping(&self) -> bool {
        self.motion.is_in_flight()
    }

    pub fn input_enabled(&self) -> bool {
        self.input_enabled
    }

    pub fn session_id(&self) -> u32 {
        self.session_id
    }

    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Animation signal for the current frame
    pub fn motion_kind(&self) -> MotionKind {
        if self.state == GameState::Die {
            MotionKind::Dying
        } else if self.motion.is_in_flight() {
            MotionKind::for_step(self.motion.step())
        } else {
            MotionKind::Idle
        }
    }

    #[cfg(test)]
    pub(crate) fn set_track(&mut self, track: Track) {
        self.track = track;
    }

    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        out.state = self.state;
        out.track.clear();
        out.track.extend_from_slice(self.track.cells());
        out.logical_index = self.logical_index;
        out.steps = self.steps;
        out.position = self.motion.position();
        out.motion = self.motion_kind();
        out.in_flight = self.motion.is_in_flight();
        out.input_enabled = self.input_enabled;
        out.session_id = self.session_id;
        out.result = self.result;
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut s = SessionSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Replace the configuration. Only allowed in `Init`; the track is regenerated.
    pub fn configure(&mut self, config: SessionConfig) -> bool {
        if self.state != GameState::Init {
            tracing::debug!(state = self.state.as_str(), "configure rejected mid-session");
            return false;
        }
        self.config = config;
        self.enter_init();
        true
    }

    /// Apply a host action
    pub fn handle_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Jump(step) => self.handle_jump(step),
            GameAction::Start => self.handle_start(),
            GameAction::Replay => self.handle_replay(),
        }
    }

    /// Leave the menu. Only valid in `Init`.
    pub fn handle_start(&mut self) -> bool {
        if self.state != GameState::Init {
            tracing::trace!(state = self.state.as_str(), "start ignored");
            return false;
        }
        self.transition(GameState::Playing);
        true
    }

    /// Return to the menu with a new track. Only valid in `Win`/`Die`.
    pub fn handle_replay(&mut self) -> bool {
        if !self.state.is_terminal() {
            tracing::trace!(state = self.state.as_str(), "replay ignored");
            return false;
        }
        self.session_id = self.session_id.wrapping_add(1);
        self.transition(GameState::Init);
        true
    }

    /// Request a jump. Dropped unless playing, input is enabled and no jump is in flight.
    pub fn handle_jump(&mut self, step: JumpStep) -> bool {
        if !self.state.accepts_jumps() || !self.input_enabled {
            tracing::trace!(
                state = self.state.as_str(),
                input_enabled = self.input_enabled,
                "jump ignored"
            );
            return false;
        }

        if !self.motion.begin(self.motion.position(), step) {
            tracing::trace!("jump dropped: already in flight");
            return false;
        }

        let candidate = self.logical_index + step.cells();
        self.candidate_index = Some(candidate);
        tracing::debug!(from = self.logical_index, to = candidate, "jump started");
        true
    }

    /// Request a jump from a raw step count; anything but 1 or 2 is ignored.
    pub fn handle_jump_cells(&mut self, cells: u32) -> bool {
        match JumpStep::from_cells(cells) {
            Some(step) => self.handle_jump(step),
            None => {
                tracing::trace!(cells, "jump ignored: unsupported step");
                false
            }
        }
    }

    /// Advance the session by one fixed tick.
    ///
    /// Deferred tasks run first, then the jump motion. Returns the outcome of a jump
    /// that finished during this tick.
    pub fn tick(&mut self, elapsed_ms: u32) -> Option<JumpOutcome> {
        for task in self.deferred.advance(elapsed_ms) {
            self.run_deferred(task);
        }

        let motion = self.motion.tick(elapsed_ms);
        let outcome = if motion.just_completed {
            self.candidate_index
                .take()
                .map(|index| self.on_jump_complete(index))
        } else {
            None
        };

        self.observer.motion(motion.position, self.motion_kind());
        outcome
    }

    fn run_deferred(&mut self, task: DeferredTask) {
        match task {
            DeferredTask::EnableInput => {
                if self.state == GameState::Playing {
                    self.input_enabled = true;
                    tracing::debug!("input enabled");
                }
            }
        }
    }

    /// Resolve a finished jump against the track.
    fn on_jump_complete(&mut self, move_index: u32) -> JumpOutcome {
        let length = self.track.len() as u32;

        if move_index >= length {
            // An oversized final step must not inflate the score.
            self.logical_index = length;
            self.set_steps(length);
            self.transition(GameState::Win);
            return JumpOutcome::Finished { score: length };
        }

        self.logical_index = move_index;
        self.set_steps(move_index);

        if self.track.get(move_index as usize) == Some(CellType::Gap) {
            self.transition(GameState::Die);
            JumpOutcome::Fell { index: move_index }
        } else {
            tracing::debug!(index = move_index, "landed");
            JumpOutcome::Landed { index: move_index }
        }
    }

    fn transition(&mut self, to: GameState) {
        let from = self.state;
        self.state = to;
        tracing::debug!(from = from.as_str(), to = to.as_str(), "state transition");
        self.observer.state_changed(from, to);

        match to {
            GameState::Init => self.enter_init(),
            GameState::Playing => self.enter_playing(),
            GameState::Win => self.end(true),
            GameState::Die => self.end(false),
        }
    }

    fn enter_init(&mut self) {
        self.deferred.clear();
        self.input_enabled = false;
        self.track = Track::generate(self.config.track_length, &mut self.rng);
        self.motion = JumpMotion::with_jump_time(self.config.jump_time_ms);
        self.logical_index = 0;
        self.candidate_index = None;
        self.steps = 0;
        self.result = None;
        tracing::debug!(
            session_id = self.session_id,
            length = self.track.len(),
            gaps = self.track.gap_count(),
            "track generated"
        );
        self.observer.track_generated(&self.track);
    }

    fn enter_playing(&mut self) {
        self.set_steps(0);
        self.input_enabled = false;
        // Input opens on a later tick so a release event queued with `Start` is not
        // taken as the first jump.
        if !self
            .deferred
            .schedule(DeferredTask::EnableInput, self.config.input_guard_ms)
        {
            tracing::warn!("deferred queue full, input stays disabled");
        }
    }

    fn end(&mut self, won: bool) {
        self.input_enabled = false;
        let result = GameResult {
            final_score: self.steps,
            won,
        };
        self.result = Some(result);
        tracing::debug!(score = result.final_score, won, "session ended");
        self.observer.session_ended(result);
    }

    fn set_steps(&mut self, steps: u32) {
        self.steps = steps;
        self.observer.steps_changed(steps);
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(1)
    }
}
