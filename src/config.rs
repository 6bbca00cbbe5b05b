use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SamplingStrategy {
    /// Shuffle, insert, retry on duplicates.
    Rejection,
    /// Draw distinct ranks and decode them.
    Index,
    /// Rejection sampling up to half the universe, index sampling beyond it.
    Auto,
}

impl Default for SamplingStrategy {
    fn default() -> Self {
        SamplingStrategy::Auto
    }
}

impl fmt::Display for SamplingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SamplingStrategy::Rejection => write!(f, "rejection"),
            SamplingStrategy::Index => write!(f, "index"),
            SamplingStrategy::Auto => write!(f, "auto"),
        }
    }
}

impl FromStr for SamplingStrategy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "rejection" | "reject" => Ok(SamplingStrategy::Rejection),
            "index" | "index-sample" => Ok(SamplingStrategy::Index),
            "auto" => Ok(SamplingStrategy::Auto),
            other => Err(format!("unknown sampling strategy '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PoolConfig {
    pub strategy: SamplingStrategy,
    pub seed: Option<u64>,
    /// Upper bound on rejection-sampling draws. `None` draws until the pool is full.
    pub max_draws: Option<u64>,
}

impl PoolConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }
}
