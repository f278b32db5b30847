//! Lane runner (workspace facade crate).
//!
//! Re-exports the workspace crates under `lane_runner::{core,input,term,types}` and
//! adds the host-side pieces shared by the binary and the integration tests.

pub use lane_runner_core as core;
pub use lane_runner_input as input;
pub use lane_runner_term as term;
pub use lane_runner_types as types;

pub mod config;
pub mod logging;
