use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PoolError {
    #[error("requested count exceeds the {universe} distinct permutations available")]
    ExceedsUniverse { requested: u64, universe: u64 },
    #[error("rank {0} is outside the permutation universe")]
    RankOutOfRange(u64),
    #[error("gave up after {draws} draws with {collected} of {requested} permutations collected")]
    DrawLimitExceeded {
        draws: u64,
        collected: usize,
        requested: u64,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PermutationError {
    #[error("expected 10 symbols, found {0}")]
    WrongLength(usize),
    #[error("symbol '{0}' is not a decimal digit")]
    InvalidSymbol(char),
    #[error("digit '{0}' appears more than once")]
    RepeatedSymbol(char),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config: {0}")]
    Io(#[from] io::Error),
    #[error("parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
