//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules, state management, and simulation logic.
//! It has **no dependencies** on rendering, terminals, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical tracks
//! - **Testable**: Every rule is reachable through plain method calls
//! - **Portable**: Any host with a frame loop can drive it
//!
//! # Module Structure
//!
//! - [`track`]: Track generation with the no-adjacent-gaps invariant
//! - [`motion`]: Fixed-duration jump interpolation with a terminal snap
//! - [`session`]: Init/Playing/Win/Die state machine
//! - [`timer`]: One-shot deferred tasks run from the tick loop
//! - [`rng`]: Injectable random source
//! - [`observer`]: Presentation sinks a host can plug in
//! - [`snapshot`]: Per-frame copy of session state for renderers
//!
//! # Game Rules
//!
//! - The player starts on cell 0 and jumps forward 1 or 2 cells
//! - Every jump takes the same time; a 2-cell jump moves twice as fast
//! - Only one jump may be in flight; extra requests are dropped
//! - Landing on a gap ends the session (`Die`); jumping past the end wins (`Win`)
//! - The score is the logical cell index at the end, clamped to the track length
//!
//! # Example
//!
//! ```
//! use lane_runner_core::{GameSession, JumpOutcome};
//! use lane_runner_types::{GameAction, GameState, JumpStep, TICK_MS};
//!
//! let mut session = GameSession::new(12345);
//! session.handle_action(GameAction::Start);
//!
//! // Input opens after the guard delay.
//! for _ in 0..7 {
//!     session.tick(TICK_MS);
//! }
//! assert!(session.handle_action(GameAction::Jump(JumpStep::One)));
//!
//! let mut outcome = None;
//! while outcome.is_none() {
//!     outcome = session.tick(TICK_MS);
//! }
//! assert!(matches!(
//!     outcome,
//!     Some(JumpOutcome::Landed { index: 1 }) | Some(JumpOutcome::Fell { index: 1 })
//! ));
//! assert_ne!(session.state(), GameState::Init);
//! ```
//!
//! # Timing
//!
//! Call [`GameSession::tick`](session::GameSession::tick) every frame with the elapsed
//! milliseconds (16ms at ~60 FPS). Jumps last 300ms; input opens 100ms after start.

pub mod config;
pub mod motion;
pub mod observer;
pub mod rng;
pub mod session;
pub mod snapshot;
pub mod timer;
pub mod track;

pub use lane_runner_types as types;

// Re-export commonly used types for convenience
pub use config::{ConfigError, SessionConfig};
pub use motion::{JumpMotion, MotionTick};
pub use observer::{NullObserver, SessionObserver};
pub use rng::{SimpleRng, TrackRng};
pub use session::{GameSession, JumpOutcome};
pub use snapshot::SessionSnapshot;
pub use timer::{DeferredQueue, DeferredTask};
pub use track::{Track, TrackError};
