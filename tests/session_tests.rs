//! Session state machine tests driven through the public API

use lane_runner::core::{
    GameSession, JumpOutcome, SessionConfig, SessionObserver, SimpleRng, Track, TrackRng,
};
use lane_runner::types::{
    CellType, GameAction, GameResult, GameState, JumpStep, MotionKind, Vec3, INPUT_GUARD_MS,
    TICK_MS,
};

/// Scripted coin flips (`true` = solid); all solid once the script runs out.
struct ScriptRng {
    flips: Vec<bool>,
    next: usize,
}

impl ScriptRng {
    fn new(flips: &[bool]) -> Self {
        Self {
            flips: flips.to_vec(),
            next: 0,
        }
    }

    fn all_solid() -> Self {
        Self::new(&[])
    }
}

impl TrackRng for ScriptRng {
    fn next_u32(&mut self) -> u32 {
        let solid = self.flips.get(self.next).copied().unwrap_or(true);
        self.next += 1;
        if solid {
            u32::MAX
        } else {
            0
        }
    }
}

fn config(track_length: usize) -> SessionConfig {
    SessionConfig::default().with_track_length(track_length)
}

fn start<R: TrackRng, O: SessionObserver>(session: &mut GameSession<R, O>) {
    assert!(session.handle_action(GameAction::Start));
    session.tick(INPUT_GUARD_MS);
    assert!(session.input_enabled());
}

fn jump<R: TrackRng, O: SessionObserver>(
    session: &mut GameSession<R, O>,
    step: JumpStep,
) -> Option<JumpOutcome> {
    assert!(session.handle_action(GameAction::Jump(step)), "jump rejected");
    let mut outcome = None;
    while outcome.is_none() {
        outcome = session.tick(TICK_MS);
    }
    outcome
}

#[test]
fn test_scenario_all_solid_step_two_wins() {
    let mut session = GameSession::with_rng(config(10), ScriptRng::all_solid());
    assert_eq!(session.track().gap_count(), 0);
    start(&mut session);

    for expected in [2, 4, 6, 8] {
        assert_eq!(
            jump(&mut session, JumpStep::Two),
            Some(JumpOutcome::Landed { index: expected })
        );
        assert_eq!(session.steps(), expected);
    }
    assert_eq!(
        jump(&mut session, JumpStep::Two),
        Some(JumpOutcome::Finished { score: 10 })
    );
    assert_eq!(session.state(), GameState::Win);
    assert_eq!(
        session.result(),
        Some(GameResult {
            final_score: 10,
            won: true
        })
    );
}

#[test]
fn test_scenario_gap_at_one_dies() {
    let mut session = GameSession::with_rng(config(10), ScriptRng::new(&[false]));
    assert_eq!(session.track().get(1), Some(CellType::Gap));
    assert_eq!(session.track().get(2), Some(CellType::Solid));
    start(&mut session);

    assert_eq!(
        jump(&mut session, JumpStep::One),
        Some(JumpOutcome::Fell { index: 1 })
    );
    assert_eq!(session.state(), GameState::Die);
    assert_eq!(session.steps(), 1);
    assert_eq!(session.result().map(|r| r.final_score), Some(1));
    assert_eq!(session.motion_kind(), MotionKind::Dying);

    // A second jump never happens.
    assert!(!session.handle_action(GameAction::Jump(JumpStep::One)));
}

#[test]
fn test_scenario_gap_jumped_over() {
    let mut session = GameSession::with_rng(config(10), ScriptRng::new(&[false]));
    start(&mut session);
    assert_eq!(
        jump(&mut session, JumpStep::Two),
        Some(JumpOutcome::Landed { index: 2 })
    );
    assert_eq!(session.state(), GameState::Playing);
}

#[test]
fn test_scenario_oversized_final_step_clamps_score() {
    let mut session = GameSession::with_rng(config(5), ScriptRng::all_solid());
    start(&mut session);

    jump(&mut session, JumpStep::Two);
    jump(&mut session, JumpStep::Two);
    assert_eq!(session.logical_index(), 4);

    assert_eq!(
        jump(&mut session, JumpStep::Two),
        Some(JumpOutcome::Finished { score: 5 })
    );
    assert_eq!(session.state(), GameState::Win);
    assert_eq!(session.steps(), 5);
    assert_eq!(session.logical_index(), 5);
}

#[test]
fn test_exact_landing_on_last_cell_keeps_playing() {
    let mut session = GameSession::with_rng(config(3), ScriptRng::all_solid());
    start(&mut session);
    assert_eq!(
        jump(&mut session, JumpStep::Two),
        Some(JumpOutcome::Landed { index: 2 })
    );
    assert_eq!(session.state(), GameState::Playing);
    assert_eq!(
        jump(&mut session, JumpStep::One),
        Some(JumpOutcome::Finished { score: 3 })
    );
}

#[test]
fn test_single_cell_track_wins_on_first_jump() {
    let mut session = GameSession::with_rng(config(0), ScriptRng::all_solid());
    assert_eq!(session.track().len(), 1);
    start(&mut session);
    assert_eq!(
        jump(&mut session, JumpStep::One),
        Some(JumpOutcome::Finished { score: 1 })
    );
}

#[test]
fn test_terminal_states_ignore_input() {
    let mut session = GameSession::with_rng(config(10), ScriptRng::new(&[false]));
    start(&mut session);
    jump(&mut session, JumpStep::One);
    assert_eq!(session.state(), GameState::Die);

    let before = session.snapshot();
    assert!(!session.handle_action(GameAction::Jump(JumpStep::Two)));
    assert!(!session.handle_action(GameAction::Start));
    for _ in 0..30 {
        assert_eq!(session.tick(TICK_MS), None);
    }
    assert_eq!(session.snapshot(), before);
}

#[test]
fn test_jump_before_guard_is_ignored() {
    let mut session = GameSession::new(5);
    assert!(!session.handle_action(GameAction::Jump(JumpStep::One)));

    session.handle_action(GameAction::Start);
    assert!(!session.input_enabled());
    assert!(!session.handle_action(GameAction::Jump(JumpStep::One)));

    session.tick(INPUT_GUARD_MS - 1);
    assert!(!session.handle_action(GameAction::Jump(JumpStep::One)));
    assert!(!session.is_jumping());

    session.tick(1);
    assert!(session.handle_action(GameAction::Jump(JumpStep::One)));
}

#[test]
fn test_zero_guard_still_waits_for_a_tick() {
    let mut session = GameSession::with_config(
        SessionConfig::default().with_input_guard_ms(0),
        5,
    );
    session.handle_action(GameAction::Start);
    assert!(!session.handle_action(GameAction::Jump(JumpStep::One)));
    session.tick(0);
    assert!(session.handle_action(GameAction::Jump(JumpStep::One)));
}

#[test]
fn test_jump_in_flight_is_dropped_not_queued() {
    let mut session = GameSession::with_rng(config(10), ScriptRng::all_solid());
    start(&mut session);

    assert!(session.handle_action(GameAction::Jump(JumpStep::One)));
    session.tick(TICK_MS);
    assert!(!session.handle_action(GameAction::Jump(JumpStep::Two)));

    let mut outcome = None;
    while outcome.is_none() {
        outcome = session.tick(TICK_MS);
    }
    assert_eq!(outcome, Some(JumpOutcome::Landed { index: 1 }));
    // Nothing was queued behind it.
    for _ in 0..30 {
        session.tick(TICK_MS);
    }
    assert_eq!(session.logical_index(), 1);
    assert!(!session.is_jumping());
}

#[test]
fn test_steps_match_index_between_jumps() {
    let mut session = GameSession::new(2024);
    start(&mut session);
    let mut step = JumpStep::Two;
    while session.state() == GameState::Playing {
        assert_eq!(session.steps(), session.logical_index());
        assert_eq!(session.position().x, session.logical_index() as f32);
        jump(&mut session, step);
        step = if step == JumpStep::Two {
            JumpStep::One
        } else {
            JumpStep::Two
        };
    }
    assert!(session.state().is_terminal());
}

#[test]
fn test_unsupported_step_counts_are_ignored() {
    let mut session = GameSession::with_rng(config(10), ScriptRng::all_solid());
    start(&mut session);
    assert!(!session.handle_jump_cells(0));
    assert!(!session.handle_jump_cells(3));
    assert!(!session.is_jumping());
    assert!(session.handle_jump_cells(2));
}

#[test]
fn test_replay_generates_fresh_track() {
    let seed = 99;
    let mut reference = SimpleRng::new(seed);
    let first = Track::generate(20, &mut reference);
    let second = Track::generate(20, &mut reference);

    let mut session = GameSession::with_config(config(20), seed);
    assert_eq!(session.track(), &first);

    // Win or lose, then replay.
    start(&mut session);
    while session.state() == GameState::Playing {
        jump(&mut session, JumpStep::One);
    }
    let id = session.session_id();
    assert!(session.handle_action(GameAction::Replay));

    assert_eq!(session.state(), GameState::Init);
    assert_eq!(session.session_id(), id + 1);
    assert_eq!(session.track(), &second);
    assert_eq!(session.logical_index(), 0);
    assert_eq!(session.steps(), 0);
    assert_eq!(session.position(), Vec3::ZERO);
    assert_eq!(session.result(), None);
    assert!(!session.input_enabled());
}

#[test]
fn test_replay_only_from_terminal_states() {
    let mut session = GameSession::new(1);
    assert!(!session.handle_action(GameAction::Replay));
    session.handle_action(GameAction::Start);
    assert!(!session.handle_action(GameAction::Replay));
    assert_eq!(session.state(), GameState::Playing);
}

#[test]
fn test_configure_only_in_init() {
    let mut session = GameSession::new(1);
    assert!(session.configure(config(8)));
    assert_eq!(session.track().len(), 8);

    session.handle_action(GameAction::Start);
    assert!(!session.configure(config(30)));
    assert_eq!(session.track().len(), 8);
}

#[derive(Debug, Clone, PartialEq)]
enum Event {
    Track(usize),
    State(GameState, GameState),
    Steps(u32),
    Ended(GameResult),
}

#[derive(Default)]
struct Recorder {
    events: Vec<Event>,
    motions: usize,
    last_kind: Option<MotionKind>,
}

impl SessionObserver for Recorder {
    fn track_generated(&mut self, track: &Track) {
        self.events.push(Event::Track(track.len()));
    }

    fn state_changed(&mut self, from: GameState, to: GameState) {
        self.events.push(Event::State(from, to));
    }

    fn steps_changed(&mut self, steps: u32) {
        self.events.push(Event::Steps(steps));
    }

    fn motion(&mut self, _position: Vec3, kind: MotionKind) {
        self.motions += 1;
        self.last_kind = Some(kind);
    }

    fn session_ended(&mut self, result: GameResult) {
        self.events.push(Event::Ended(result));
    }
}

#[test]
fn test_observer_sees_lifecycle_in_order() {
    let mut session =
        GameSession::with_observer(config(10), ScriptRng::new(&[false]), Recorder::default());
    start(&mut session);
    jump(&mut session, JumpStep::One);
    session.handle_action(GameAction::Replay);

    let result = GameResult {
        final_score: 1,
        won: false,
    };
    assert_eq!(
        session.observer().events,
        vec![
            Event::Track(10),
            Event::State(GameState::Init, GameState::Playing),
            Event::Steps(0),
            Event::Steps(1),
            Event::State(GameState::Playing, GameState::Die),
            Event::Ended(result),
            Event::State(GameState::Die, GameState::Init),
            Event::Track(10),
        ]
    );
    assert!(session.observer().motions > 0);
}

#[test]
fn test_observer_motion_kind_per_tick() {
    let mut session =
        GameSession::with_observer(config(10), ScriptRng::all_solid(), Recorder::default());
    start(&mut session);
    assert_eq!(session.observer().last_kind, Some(MotionKind::Idle));

    session.handle_action(GameAction::Jump(JumpStep::Two));
    session.tick(TICK_MS);
    assert_eq!(session.observer().last_kind, Some(MotionKind::StepTwo));

    while session.is_jumping() {
        session.tick(TICK_MS);
    }
    assert_eq!(session.observer().last_kind, Some(MotionKind::Idle));
}

#[test]
fn test_snapshot_into_reuses_buffer() {
    let mut session = GameSession::new(3);
    let mut snap = session.snapshot();
    let cap = snap.track.capacity();

    start(&mut session);
    session.handle_action(GameAction::Jump(JumpStep::One));
    session.tick(TICK_MS);
    session.snapshot_into(&mut snap);

    assert_eq!(snap.state, GameState::Playing);
    assert!(snap.in_flight);
    assert_eq!(snap.motion, MotionKind::StepOne);
    assert!(snap.position.x > 0.0 && snap.position.x < 1.0);
    assert_eq!(snap.track.capacity(), cap);
    assert_eq!(snap.track.as_slice(), session.track().cells());
}
