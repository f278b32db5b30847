use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::types::{CellType, GameResult, GameState, MotionKind, Vec3};

/// Everything a presentation layer needs to draw one frame.
///
/// Reuse one snapshot across frames with `GameSession::snapshot_into`; the track
/// buffer keeps its allocation.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub state: GameState,
    pub track: Vec<CellType>,
    pub logical_index: u32,
    pub steps: u32,
    pub position: Vec3,
    pub motion: MotionKind,
    pub in_flight: bool,
    pub input_enabled: bool,
    pub session_id: u32,
    pub result: Option<GameResult>,
}

impl SessionSnapshot {
    pub fn clear(&mut self) {
        self.state = GameState::Init;
        self.track.clear();
        self.logical_index = 0;
        self.steps = 0;
        self.position = Vec3::ZERO;
        self.motion = MotionKind::Idle;
        self.in_flight = false;
        self.input_enabled = false;
        self.session_id = 0;
        self.result = None;
    }

    pub fn track_length(&self) -> usize {
        self.track.len()
    }

    /// Nothing on screen moves on its own: no jump is in flight.
    pub fn is_static(&self) -> bool {
        !self.in_flight
    }

    /// Cheap change detector for render throttling.
    pub fn fingerprint(&self) -> u64 {
        let mut h = DefaultHasher::new();
        self.state.hash(&mut h);
        self.track.hash(&mut h);
        self.logical_index.hash(&mut h);
        self.steps.hash(&mut h);
        self.position.x.to_bits().hash(&mut h);
        self.position.y.to_bits().hash(&mut h);
        self.motion.hash(&mut h);
        self.input_enabled.hash(&mut h);
        self.session_id.hash(&mut h);
        self.result.hash(&mut h);
        h.finish()
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            state: GameState::Init,
            track: Vec::new(),
            logical_index: 0,
            steps: 0,
            position: Vec3::ZERO,
            motion: MotionKind::Idle,
            in_flight: false,
            input_enabled: false,
            session_id: 0,
            result: None,
        }
    }
}
