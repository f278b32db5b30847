//! File logging for the terminal host.
//!
//! The game owns the terminal in raw mode, so log output goes to a file only.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::LOG_FILE_NAME;
use crate::core::{SessionObserver, Track};
use crate::types::{GameResult, GameState};

/// Filter used when `RUST_LOG` is unset, blank or unparsable.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Build the log filter from a `RUST_LOG` value.
pub fn env_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|v| !v.trim().is_empty())
        .and_then(|v| EnvFilter::try_new(v).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install a global subscriber writing to `<log_dir>/lane-runner.log`.
///
/// `RUST_LOG` overrides the default `info` filter. Keep the returned guard
/// alive for the whole run; dropping it flushes and stops the writer.
pub fn init_logging(log_dir: &Path) -> Result<WorkerGuard> {
    fs::create_dir_all(log_dir)
        .with_context(|| format!("create log directory {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let env_filter = env_filter(rust_log.as_deref());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("install tracing subscriber")?;

    Ok(guard)
}

/// Observer that reports session milestones through `tracing` and keeps a
/// running tally across replays.
#[derive(Debug, Clone, Default)]
pub struct LogObserver {
    games: u32,
    wins: u32,
    best_score: u32,
}

impl LogObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn games(&self) -> u32 {
        self.games
    }

    pub fn wins(&self) -> u32 {
        self.wins
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }
}

impl SessionObserver for LogObserver {
    fn track_generated(&mut self, track: &Track) {
        tracing::info!(length = track.len(), gaps = track.gap_count(), "track generated");
    }

    fn state_changed(&mut self, from: GameState, to: GameState) {
        tracing::info!(from = from.as_str(), to = to.as_str(), "state changed");
    }

    fn steps_changed(&mut self, steps: u32) {
        tracing::trace!(steps, "steps");
    }

    fn session_ended(&mut self, result: GameResult) {
        self.games += 1;
        if result.won {
            self.wins += 1;
        }
        self.best_score = self.best_score.max(result.final_score);
        tracing::info!(
            score = result.final_score,
            won = result.won,
            games = self.games,
            wins = self.wins,
            best = self.best_score,
            "{}",
            result.headline()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_filter_keeps_rust_log_level() {
        assert_eq!(env_filter(Some("debug")).to_string(), "debug");
        assert_eq!(env_filter(Some("warn")).to_string(), "warn");
        let scoped = env_filter(Some("lane_runner_core=trace")).to_string();
        assert!(scoped.contains("lane_runner_core=trace"));
        assert!(!scoped.contains("info"));
    }

    #[test]
    fn test_env_filter_defaults_to_info() {
        assert_eq!(env_filter(None).to_string(), "info");
        assert_eq!(env_filter(Some("  ")).to_string(), "info");
        assert_eq!(env_filter(Some("lane_runner=bogus")).to_string(), "info");
    }

    #[test]
    fn test_tally_across_sessions() {
        let mut obs = LogObserver::new();
        obs.session_ended(GameResult {
            final_score: 7,
            won: false,
        });
        obs.session_ended(GameResult {
            final_score: 50,
            won: true,
        });
        obs.session_ended(GameResult {
            final_score: 3,
            won: false,
        });
        assert_eq!(obs.games(), 3);
        assert_eq!(obs.wins(), 1);
        assert_eq!(obs.best_score(), 50);
    }
}
