use perm_pool::{
    generate_pool, Permutation, PermutationPool, PoolConfig, PoolGenerator, SamplingStrategy,
    ALPHABET, UNIVERSE_SIZE,
};
use std::collections::HashSet;

fn assert_valid_pool(pool: &PermutationPool, expected: usize) {
    assert_eq!(pool.len(), expected);
    let mut seen = HashSet::new();
    for permutation in pool.iter() {
        let line = permutation.to_string();
        assert_eq!(line.len(), 10, "wrong length: {line}");
        let mut digits = *permutation.as_bytes();
        digits.sort_unstable();
        assert_eq!(digits, ALPHABET, "not a digit permutation: {line}");
        assert_eq!(line.parse::<Permutation>().as_ref(), Ok(permutation));
        assert!(seen.insert(line), "duplicate permutation");
    }
}

#[test]
fn small_pools_hold_distinct_permutations() {
    for count in [0u64, 1, 5, 100] {
        let pool = generate_pool(count).unwrap();
        assert_valid_pool(&pool, count as usize);
    }
}

#[test]
fn every_strategy_fills_the_pool() {
    for strategy in [
        SamplingStrategy::Rejection,
        SamplingStrategy::Index,
        SamplingStrategy::Auto,
    ] {
        let mut generator = PoolGenerator::new(PoolConfig {
            strategy,
            seed: Some(11),
            max_draws: None,
        });
        let pool = generator.generate(1_000).unwrap();
        assert_valid_pool(&pool, 1_000);
    }
}

#[test]
fn rejection_draws_account_for_collisions() {
    let mut generator = PoolGenerator::new(PoolConfig {
        strategy: SamplingStrategy::Rejection,
        seed: Some(21),
        max_draws: None,
    });
    let pool = generator.generate(50_000).unwrap();
    assert_eq!(pool.draws(), pool.len() as u64 + pool.collisions());
}

#[test]
fn unseeded_runs_differ() {
    let first: HashSet<Permutation> = generate_pool(20).unwrap().into_iter().collect();
    let second: HashSet<Permutation> = generate_pool(20).unwrap().into_iter().collect();
    assert_ne!(first, second);
}

#[test]
fn requests_beyond_the_universe_fail() {
    assert!(generate_pool(UNIVERSE_SIZE + 1).is_err());
}
