pub mod generator;
pub mod permutation;

pub use generator::{generate_pool, PermutationPool, PoolGenerator};
pub use permutation::{Permutation, ALPHABET, PERM_LENGTH, UNIVERSE_SIZE};
