use crate::config::{PoolConfig, SamplingStrategy};
use crate::error::PoolError;
use crate::pool::permutation::{Permutation, UNIVERSE_SIZE};
use crate::utils::debug::debug_log;
use fxhash::FxHashSet;
use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};

/// Distinct permutations collected so far, with draw bookkeeping.
#[derive(Debug, Clone, Default)]
pub struct PermutationPool {
    members: FxHashSet<Permutation>,
    draws: u64,
    collisions: u64,
}

impl PermutationPool {
    pub fn new() -> Self {
        PermutationPool::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        PermutationPool {
            members: FxHashSet::with_capacity_and_hasher(capacity, Default::default()),
            draws: 0,
            collisions: 0,
        }
    }

    /// Returns `false` and counts a collision when `permutation` is already present.
    pub fn insert(&mut self, permutation: Permutation) -> bool {
        self.draws += 1;
        let fresh = self.members.insert(permutation);
        if !fresh {
            self.collisions += 1;
        }
        fresh
    }

    pub fn contains(&self, permutation: &Permutation) -> bool {
        self.members.contains(permutation)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn draws(&self) -> u64 {
        self.draws
    }

    pub fn collisions(&self) -> u64 {
        self.collisions
    }

    /// Iterates in the set's own order, which carries no meaning.
    pub fn iter(&self) -> impl Iterator<Item = &Permutation> {
        self.members.iter()
    }
}

impl IntoIterator for PermutationPool {
    type Item = Permutation;
    type IntoIter = std::collections::hash_set::IntoIter<Permutation>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.into_iter()
    }
}

pub struct PoolGenerator<R> {
    config: PoolConfig,
    rng: R,
}

impl PoolGenerator<StdRng> {
    /// Seeds from `config.seed` when present, otherwise from the OS.
    pub fn new(config: PoolConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        PoolGenerator { config, rng }
    }
}

impl<R: Rng> PoolGenerator<R> {
    pub fn with_rng(config: PoolConfig, rng: R) -> Self {
        PoolGenerator { config, rng }
    }

    pub fn resolve_strategy(&self, count: u64) -> SamplingStrategy {
        match self.config.strategy {
            SamplingStrategy::Auto if count > UNIVERSE_SIZE / 2 => SamplingStrategy::Index,
            SamplingStrategy::Auto => SamplingStrategy::Rejection,
            explicit => explicit,
        }
    }

    pub fn generate(&mut self, count: u64) -> Result<PermutationPool, PoolError> {
        if count > UNIVERSE_SIZE {
            return Err(PoolError::ExceedsUniverse {
                requested: count,
                universe: UNIVERSE_SIZE,
            });
        }

        let strategy = self.resolve_strategy(count);
        debug_log(|| format!("generating {count} permutations with {strategy} sampling"));

        let pool = match strategy {
            SamplingStrategy::Index => self.sample_by_index(count)?,
            _ => self.sample_by_rejection(count)?,
        };

        debug_log(|| {
            format!(
                "pool complete: {} permutations, {} draws, {} collisions",
                pool.len(),
                pool.draws(),
                pool.collisions()
            )
        });
        Ok(pool)
    }

    fn sample_by_rejection(&mut self, count: u64) -> Result<PermutationPool, PoolError> {
        let target = count as usize;
        let mut pool = PermutationPool::with_capacity(target);
        while pool.len() < target {
            if let Some(limit) = self.config.max_draws {
                if pool.draws() >= limit {
                    return Err(PoolError::DrawLimitExceeded {
                        draws: pool.draws(),
                        collected: pool.len(),
                        requested: count,
                    });
                }
            }
            pool.insert(Permutation::random(&mut self.rng));
        }
        Ok(pool)
    }

    fn sample_by_index(&mut self, count: u64) -> Result<PermutationPool, PoolError> {
        let target = count as usize;
        let ranks = index::sample(&mut self.rng, UNIVERSE_SIZE as usize, target);
        let mut pool = PermutationPool::with_capacity(target);
        for rank in ranks.iter() {
            let rank = rank as u64;
            let permutation =
                Permutation::from_rank(rank).ok_or(PoolError::RankOutOfRange(rank))?;
            pool.insert(permutation);
        }
        Ok(pool)
    }
}

/// Generates `count` distinct permutations with the default configuration.
pub fn generate_pool(count: u64) -> Result<PermutationPool, PoolError> {
    PoolGenerator::new(PoolConfig::default()).generate(count)
}
