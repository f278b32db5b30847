//! Session configuration.

use thiserror::Error;

use crate::types::{DEFAULT_TRACK_LENGTH, INPUT_GUARD_MS, JUMP_TIME_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("track length must be at least 1 cell")]
    ZeroTrackLength,
    #[error("jump duration must be at least 1ms")]
    ZeroJumpTime,
}

/// Settings fixed for the lifetime of one session.
///
/// Hosts may only swap these while the session sits in `Init`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionConfig {
    /// Number of cells in the track
    pub track_length: usize,
    /// Duration of every jump
    pub jump_time_ms: u32,
    /// Delay between `Start` and the first accepted jump
    pub input_guard_ms: u32,
}

impl SessionConfig {
    pub fn with_track_length(mut self, track_length: usize) -> Self {
        self.track_length = track_length;
        self
    }

    pub fn with_jump_time_ms(mut self, jump_time_ms: u32) -> Self {
        self.jump_time_ms = jump_time_ms;
        self
    }

    pub fn with_input_guard_ms(mut self, input_guard_ms: u32) -> Self {
        self.input_guard_ms = input_guard_ms;
        self
    }

    /// Reject values the session would otherwise have to clamp.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.track_length == 0 {
            return Err(ConfigError::ZeroTrackLength);
        }
        if self.jump_time_ms == 0 {
            return Err(ConfigError::ZeroJumpTime);
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            track_length: DEFAULT_TRACK_LENGTH,
            jump_time_ms: JUMP_TIME_MS,
            input_guard_ms: INPUT_GUARD_MS,
        }
    }
}
