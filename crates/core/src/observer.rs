//! Presentation sinks for a session.
//!
//! A host passes one observer in when it builds a [`crate::GameSession`]; the session
//! calls it synchronously as things happen. Every method defaults to a no-op.

use crate::track::Track;
use crate::types::{GameResult, GameState, MotionKind, Vec3};

pub trait SessionObserver {
    /// A fresh track was generated (session entered `Init`).
    fn track_generated(&mut self, _track: &Track) {}

    fn state_changed(&mut self, _from: GameState, _to: GameState) {}

    /// The step counter changed (reset on start, updated on every landing).
    fn steps_changed(&mut self, _steps: u32) {}

    /// Called once per tick with the body's position and animation signal.
    fn motion(&mut self, _position: Vec3, _kind: MotionKind) {}

    /// The session reached `Win` or `Die`.
    fn session_ended(&mut self, _result: GameResult) {}
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl SessionObserver for NullObserver {}

impl<O: SessionObserver + ?Sized> SessionObserver for Box<O> {
    fn track_generated(&mut self, track: &Track) {
        (**self).track_generated(track)
    }

    fn state_changed(&mut self, from: GameState, to: GameState) {
        (**self).state_changed(from, to)
    }

    fn steps_changed(&mut self, steps: u32) {
        (**self).steps_changed(steps)
    }

    fn motion(&mut self, position: Vec3, kind: MotionKind) {
        (**self).motion(position, kind)
    }

    fn session_ended(&mut self, result: GameResult) {
        (**self).session_ended(result)
    }
}
