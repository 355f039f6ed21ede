//! Configuration of the game driver.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use log::LevelFilter;

use crate::error::AppError;

const TICKS_VAR: &str = "CATACOMB_TICKS";
const STEP_VAR: &str = "CATACOMB_STEP_MS";
const LOG_VAR: &str = "CATACOMB_LOG";

/// Configuration of the main loop of the game.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    ticks: u32,
    step: Duration,
    render_every: u32,
    log_level: LevelFilter,
}

impl AppConfig {
    /// Creates configuration from defaults overridden by `CATACOMB_*` environment variables.
    ///
    /// # Errors
    ///
    /// An error is returned if some variable cannot be parsed.
    ///
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let default = Self::default();
        let ticks = parse(&lookup, TICKS_VAR)?.unwrap_or(default.ticks);
        let step = parse(&lookup, STEP_VAR)?
            .map(Duration::from_millis)
            .unwrap_or(default.step);
        let log_level = parse(&lookup, LOG_VAR)?.unwrap_or(default.log_level);
        Ok(Self {
            ticks,
            step,
            log_level,
            ..default
        })
    }

    /// Count of simulation ticks to run.
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Fixed duration of one simulation tick.
    pub fn step(&self) -> Duration {
        self.step
    }

    /// Rendering systems are updated once per this count of ticks.
    pub fn render_every(&self) -> u32 {
        self.render_every
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ticks: 600,
            step: Duration::from_millis(16),
            render_every: 2,
            log_level: if cfg!(debug_assertions) {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
        }
    }
}

fn parse<F, T>(lookup: &F, name: &'static str) -> Result<Option<T>, AppError>
where
    F: Fn(&'static str) -> Option<String>,
    T: FromStr,
{
    lookup(name)
        .map(|value| {
            value
                .trim()
                .parse()
                .map_err(|_| AppError::InvalidVariable { name, value })
        })
        .transpose()
}
