//! Terminal input module (engine-facing).
//!
//! This module is independent of any rendering code. It maps `crossterm` key and
//! mouse events into [`crate::types::GameAction`] and buffers them between ticks so
//! the host can hand them to the session in arrival order.

pub mod handler;
pub mod map;

pub use lane_runner_types as types;

pub use handler::{InputQueue, INPUT_QUEUE_CAPACITY};
pub use map::{handle_event, handle_key_event, handle_mouse_event, should_quit};
