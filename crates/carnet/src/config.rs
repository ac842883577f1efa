//! Configuration file.
//!
//! # Example TOML
//!
//! ```toml
//! [scheduler]
//! algorithm = "fixed"
//! intervals = [1, 2, 4, 8, 16, 32]
//!
//! [deck]
//! randomize = true
//! without_replacement = false
//! ```
//!
//! Every section and key is optional.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::deck::DeckPrefs;
use crate::error::Result;
use crate::schedule::{AnyScheduler, DEFAULT_INTERVALS, FixedScheduler, Sm2Scheduler};

/// Which scheduling algorithm to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Adaptive SM-2.
    #[default]
    Sm2,
    /// Fixed interval table.
    Fixed,
}

/// `[scheduler]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Algorithm name.
    #[serde(default)]
    pub algorithm: Algorithm,
    /// Day table for the fixed algorithm.
    #[serde(default = "default_intervals")]
    pub intervals: Vec<u32>,
}

fn default_intervals() -> Vec<u32> {
    DEFAULT_INTERVALS.to_vec()
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            intervals: default_intervals(),
        }
    }
}

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Scheduler settings.
    #[serde(default)]
    pub scheduler: SchedulerConfig,
    /// Deck ordering preferences.
    #[serde(default)]
    pub deck: DeckPrefs,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Load configuration, falling back to defaults if the file is missing.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.scheduler()?;
        Ok(config)
    }

    /// Build the configured scheduler.
    pub fn scheduler(&self) -> Result<AnyScheduler> {
        Ok(match self.scheduler.algorithm {
            Algorithm::Sm2 => AnyScheduler::Sm2(Sm2Scheduler),
            Algorithm::Fixed => {
                AnyScheduler::Fixed(FixedScheduler::new(self.scheduler.intervals.clone())?)
            }
        })
    }
}
