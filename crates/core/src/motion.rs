//! Jump motion - fixed-duration linear movement between cells
//!
//! Every jump lasts `jump_time_ms` regardless of its step, so speed scales with the
//! step: `speed = step / jump_time`. Position is integrated per tick (Euler), and the
//! tick that reaches the duration snaps exactly onto the target so integer cell math
//! and the continuous position never disagree.

use crate::types::{JumpStep, Vec3, JUMP_TIME_MS};

/// Result of advancing a jump by one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionTick {
    pub position: Vec3,
    /// True only on the tick that finished the jump
    pub just_completed: bool,
}

/// A single in-flight jump (or none).
#[derive(Debug, Clone)]
pub struct JumpMotion {
    jump_time_ms: u32,
    in_flight: bool,
    elapsed_ms: u32,
    step: JumpStep,
    /// Cells per millisecond for the current jump
    speed: f32,
    start_pos: Vec3,
    target_pos: Vec3,
    position: Vec3,
}

impl JumpMotion {
    pub fn new() -> Self {
        Self::with_jump_time(JUMP_TIME_MS)
    }

    /// Motion with a custom jump duration. Zero is clamped to 1ms.
    pub fn with_jump_time(jump_time_ms: u32) -> Self {
        Self {
            jump_time_ms: jump_time_ms.max(1),
            in_flight: false,
            elapsed_ms: 0,
            step: JumpStep::One,
            speed: 0.0,
            start_pos: Vec3::ZERO,
            target_pos: Vec3::ZERO,
            position: Vec3::ZERO,
        }
    }

    /// Stop any jump and place the body at `origin`.
    pub fn reset(&mut self, origin: Vec3) {
        self.in_flight = false;
        self.elapsed_ms = 0;
        self.step = JumpStep::One;
        self.speed = 0.0;
        self.start_pos = origin;
        self.target_pos = origin;
        self.position = origin;
    }

    /// Start a jump from `current_pos`.
    ///
    /// Returns false (and changes nothing) while another jump is in flight.
    pub fn begin(&mut self, current_pos: Vec3, step: JumpStep) -> bool {
        if self.in_flight {
            return false;
        }

        self.in_flight = true;
        self.step = step;
        self.elapsed_ms = 0;
        self.speed = step.cells() as f32 / self.jump_time_ms as f32;
        self.start_pos = current_pos;
        self.target_pos = current_pos + Vec3::along_track(step.cells() as f32);
        self.position = current_pos;
        true
    }

    /// Advance the jump by `elapsed_ms`.
    ///
    /// The jump completes on the tick where the accumulated time reaches the
    /// duration (`elapsed >= jump_time`), so deltas that sum to exactly
    /// `jump_time` land on the target on their last tick.
    pub fn tick(&mut self, elapsed_ms: u32) -> MotionTick {
        if !self.in_flight {
            return MotionTick {
                position: self.position,
                just_completed: false,
            };
        }

        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);

        if self.elapsed_ms >= self.jump_time_ms {
            self.position = self.target_pos;
            self.in_flight = false;
            return MotionTick {
                position: self.position,
                just_completed: true,
            };
        }

        self.position += Vec3::along_track(self.speed * elapsed_ms as f32);
        MotionTick {
            position: self.position,
            just_completed: false,
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn start(&self) -> Vec3 {
        self.start_pos
    }

    pub fn target(&self) -> Vec3 {
        self.target_pos
    }

    pub fn step(&self) -> JumpStep {
        self.step
    }

    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }

    pub fn jump_time_ms(&self) -> u32 {
        self.jump_time_ms
    }
}

impl Default for JumpMotion {
    fn default() -> Self {
        Self::new()
    }
}
