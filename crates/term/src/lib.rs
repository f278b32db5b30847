//! Terminal presentation for the lane runner.
//!
//! A small, game-oriented rendering layer: the view draws a `SessionSnapshot`
//! into a framebuffer, and the renderer flushes framebuffer diffs to the
//! terminal. No widget toolkit is involved.
//!
//! Goals:
//! - Keep `core` deterministic and free of I/O
//! - Make every drawn frame testable without a terminal
//! - Keep the per-frame path allocation-free

pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use lane_runner_core as core;
pub use lane_runner_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use render_throttle::{RenderThrottle, DEFAULT_STATIC_INTERVAL_MS};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
