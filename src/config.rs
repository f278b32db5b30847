//! Host configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use lane_runner_core::{ConfigError, SessionConfig};

pub const ENV_TRACK_LENGTH: &str = "LANE_RUNNER_TRACK_LENGTH";
pub const ENV_JUMP_MS: &str = "LANE_RUNNER_JUMP_MS";
pub const ENV_GUARD_MS: &str = "LANE_RUNNER_GUARD_MS";
pub const ENV_SEED: &str = "LANE_RUNNER_SEED";
pub const ENV_LOG_DIR: &str = "LANE_RUNNER_LOG_DIR";

/// Name of the log file written inside the log directory.
pub const LOG_FILE_NAME: &str = "lane-runner.log";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum HostConfigError {
    #[error("{key}={value:?} is not a valid {expected}")]
    Invalid {
        key: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error(transparent)]
    Session(#[from] ConfigError),
}

/// Everything the terminal host needs before it opens the terminal.
#[derive(Debug, Clone, PartialEq)]
pub struct HostConfig {
    pub session: SessionConfig,
    /// Fixed RNG seed; `None` picks one from the clock.
    pub seed: Option<u32>,
    pub log_dir: PathBuf,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            session: SessionConfig::default(),
            seed: None,
            log_dir: env::temp_dir(),
        }
    }
}

impl HostConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `LANE_RUNNER_TRACK_LENGTH` - Cells per track (default: 50)
    /// - `LANE_RUNNER_JUMP_MS` - Jump duration in ms (default: 300)
    /// - `LANE_RUNNER_GUARD_MS` - Delay before input opens after start (default: 100)
    /// - `LANE_RUNNER_SEED` - Fixed RNG seed (default: clock-derived)
    /// - `LANE_RUNNER_LOG_DIR` - Directory for `lane-runner.log` (default: temp dir)
    pub fn from_env() -> Result<Self, HostConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, HostConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(len) = read::<usize>(&lookup, ENV_TRACK_LENGTH, "track length")? {
            config.session = config.session.with_track_length(len);
        }
        if let Some(ms) = read::<u32>(&lookup, ENV_JUMP_MS, "duration in milliseconds")? {
            config.session = config.session.with_jump_time_ms(ms);
        }
        if let Some(ms) = read::<u32>(&lookup, ENV_GUARD_MS, "duration in milliseconds")? {
            config.session = config.session.with_input_guard_ms(ms);
        }
        config.seed = read::<u32>(&lookup, ENV_SEED, "u32 seed")?;
        if let Some(dir) = lookup(ENV_LOG_DIR).filter(|v| !v.trim().is_empty()) {
            config.log_dir = PathBuf::from(dir);
        }

        config.session.validate()?;
        Ok(config)
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_NAME)
    }
}

fn read<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    expected: &'static str,
) -> Result<Option<T>, HostConfigError>
where
    T: FromStr,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    let value = raw.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse::<T>()
        .map(Some)
        .map_err(|_| HostConfigError::Invalid {
            key,
            value: raw.clone(),
            expected,
        })
}
