//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input decoding).
//!
//! # Track Layout
//!
//! The track is a single lane of discrete cells along the X axis:
//!
//! - **Length**: 50 cells by default (indexed 0-49)
//! - **Cell 0**: always solid, the player starts there
//! - **Blocks**: one visual block per solid cell at `x = index`, `y = -1.5`
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `JUMP_TIME_MS` | 300 | Duration of every jump, regardless of step |
//! | `INPUT_GUARD_MS` | 100 | Delay before input is accepted after start |
//!
//! # Examples
//!
//! ```
//! use lane_runner_types::{CellType, GameAction, JumpStep, DEFAULT_TRACK_LENGTH};
//!
//! let step = JumpStep::from_cells(2).unwrap();
//! assert_eq!(step.cells(), 2);
//!
//! let action = GameAction::from_str("jump1").unwrap();
//! assert_eq!(action, GameAction::Jump(JumpStep::One));
//!
//! assert!(CellType::Gap.is_gap());
//! assert_eq!(DEFAULT_TRACK_LENGTH, 50);
//! ```

use std::ops::{Add, AddAssign};

/// Default track length in cells
pub const DEFAULT_TRACK_LENGTH: usize = 50;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Duration of a single jump in milliseconds.
///
/// Step size only changes the covered distance, never the duration.
pub const JUMP_TIME_MS: u32 = 300;

/// Delay between entering play and accepting jump input (100ms)
pub const INPUT_GUARD_MS: u32 = 100;

/// Largest step a single jump may cover
pub const MAX_JUMP_STEP: u32 = 2;

/// Perpendicular offset of track blocks below the player's feet
pub const BLOCK_OFFSET_Y: f32 = -1.5;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults() {
        assert_eq!(TICK_MS, 16);
        assert_eq!(JUMP_TIME_MS, 300);
        assert_eq!(INPUT_GUARD_MS, 100);
        assert_eq!(DEFAULT_TRACK_LENGTH, 50);
    }

    #[test]
    fn jump_step_rejects_out_of_range() {
        assert_eq!(JumpStep::from_cells(0), None);
        assert_eq!(JumpStep::from_cells(1), Some(JumpStep::One));
        assert_eq!(JumpStep::from_cells(2), Some(JumpStep::Two));
        assert_eq!(JumpStep::from_cells(3), None);
        assert_eq!(JumpStep::from_cells(MAX_JUMP_STEP + 1), None);
        assert_eq!(JumpStep::from_cells(0), None);
        assert_eq!(JumpStep::Two.cells(), MAX_JUMP_STEP);
    }

    #[test]
    fn game_action_round_trips_through_str() {
        for action in [
            GameAction::Jump(JumpStep::One),
            GameAction::Jump(JumpStep::Two),
            GameAction::Start,
            GameAction::Replay,
        ] {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
        assert_eq!(GameAction::from_str("JUMP2"), Some(GameAction::Jump(JumpStep::Two)));
        assert_eq!(GameAction::from_str("jump3"), None);
    }

    #[test]
    fn game_state_accepts_jumps_only_while_playing() {
        assert!(GameState::Playing.accepts_jumps());
        assert!(!GameState::Init.accepts_jumps());
        assert!(!GameState::Win.accepts_jumps());
        assert!(!GameState::Die.accepts_jumps());
        assert!(GameState::Win.is_terminal());
        assert!(GameState::Die.is_terminal());
    }

    #[test]
    fn vec3_addition() {
        let a = Vec3::new(1.0, -1.5, 0.0);
        let mut b = a + Vec3::along_track(2.0);
        assert_eq!(b, Vec3::new(3.0, -1.5, 0.0));
        b += Vec3::along_track(0.5);
        assert_eq!(b.x, 3.5);
    }
}

/// Type of a single track cell
///
/// - **Solid**: safe ground, the player may land here
/// - **Gap**: a hole, landing here ends the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellType {
    Gap,
    Solid,
}

impl CellType {
    pub fn is_gap(&self) -> bool {
        matches!(self, CellType::Gap)
    }

    pub fn is_solid(&self) -> bool {
        matches!(self, CellType::Solid)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CellType::Gap => "gap",
            CellType::Solid => "solid",
        }
    }
}

/// Size of a jump in cells.
///
/// Only 1- and 2-cell jumps exist; the no-adjacent-gaps track invariant relies on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JumpStep {
    One,
    Two,
}

impl JumpStep {
    /// Convert a raw step count into a jump step.
    ///
    /// Returns `None` for anything outside `{1, 2}`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lane_runner_types::JumpStep;
    ///
    /// assert_eq!(JumpStep::from_cells(1), Some(JumpStep::One));
    /// assert_eq!(JumpStep::from_cells(5), None);
    /// ```
    pub fn from_cells(cells: u32) -> Option<Self> {
        match cells {
            1 => Some(JumpStep::One),
            MAX_JUMP_STEP => Some(JumpStep::Two),
            _ => None,
        }
    }

    /// Number of cells covered by this jump
    pub fn cells(&self) -> u32 {
        match self {
            JumpStep::One => 1,
            JumpStep::Two => 2,
        }
    }
}

/// Game state machine states
///
/// The cycle goes: Init → Playing → (Win | Die) → Init
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Menu shown, track freshly generated, input disabled
    Init,
    /// Player is on the track and may jump
    Playing,
    /// Player jumped past the last cell
    Win,
    /// Player landed on a gap
    Die,
}

impl GameState {
    pub fn accepts_jumps(&self) -> bool {
        matches!(self, GameState::Playing)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, GameState::Win | GameState::Die)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameState::Init => "init",
            GameState::Playing => "playing",
            GameState::Win => "win",
            GameState::Die => "die",
        }
    }
}

/// Discrete motion signal for the presentation layer.
///
/// Hosts use it to pick (and speed-scale) an animation clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MotionKind {
    Idle,
    StepOne,
    StepTwo,
    Dying,
}

impl MotionKind {
    pub fn for_step(step: JumpStep) -> Self {
        match step {
            JumpStep::One => MotionKind::StepOne,
            JumpStep::Two => MotionKind::StepTwo,
        }
    }
}

/// Actions the host delivers to a session
///
/// Input devices are decoded by the host; the core only sees these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Jump forward by the given step
    Jump(JumpStep),
    /// Leave the menu and start playing
    Start,
    /// Return to the menu after a win or a loss
    Replay,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use lane_runner_types::{GameAction, JumpStep};
    ///
    /// assert_eq!(GameAction::from_str("start"), Some(GameAction::Start));
    /// assert_eq!(GameAction::from_str("Jump2"), Some(GameAction::Jump(JumpStep::Two)));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "jump1" => Some(GameAction::Jump(JumpStep::One)),
            "jump2" => Some(GameAction::Jump(JumpStep::Two)),
            "start" => Some(GameAction::Start),
            "replay" => Some(GameAction::Replay),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Jump(JumpStep::One) => "jump1",
            GameAction::Jump(JumpStep::Two) => "jump2",
            GameAction::Start => "start",
            GameAction::Replay => "replay",
        }
    }
}

/// Final outcome of a session, surfaced on Win/Die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameResult {
    /// Logical index at the moment the session ended
    pub final_score: u32,
    pub won: bool,
}

impl GameResult {
    pub fn headline(&self) -> &'static str {
        if self.won {
            "You Win!"
        } else {
            "You Died!"
        }
    }
}

/// Continuous 3D position. X runs along the track.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Offset of `distance` along the track axis
    pub const fn along_track(distance: f32) -> Self {
        Self::new(distance, 0.0, 0.0)
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Vec3) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}
