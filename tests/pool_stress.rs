use perm_pool::{Permutation, PoolConfig, PoolGenerator, SamplingStrategy, UNIVERSE_SIZE};

fn assert_covers_universe(strategy: SamplingStrategy) {
    let mut generator = PoolGenerator::new(PoolConfig {
        strategy,
        seed: Some(0x5eed),
        max_draws: None,
    });
    let pool = generator.generate(UNIVERSE_SIZE).unwrap();
    assert_eq!(pool.len() as u64, UNIVERSE_SIZE);
    for rank in (0..UNIVERSE_SIZE).step_by(997) {
        let permutation = Permutation::from_rank(rank).unwrap();
        assert!(pool.contains(&permutation), "missing rank {rank}");
    }
}

#[cfg_attr(
    not(feature = "stress-tests"),
    ignore = "set --features stress-tests to enable full-universe runs"
)]
#[test]
fn auto_strategy_emits_every_permutation() {
    assert_covers_universe(SamplingStrategy::Auto);
}

#[cfg_attr(
    not(feature = "stress-tests"),
    ignore = "set --features stress-tests to enable full-universe runs"
)]
#[cfg_attr(
    feature = "stress-tests",
    ignore = "pass -- --ignored to run rejection sampling over the whole universe"
)]
#[test]
fn rejection_strategy_eventually_emits_every_permutation() {
    assert_covers_universe(SamplingStrategy::Rejection);
}
