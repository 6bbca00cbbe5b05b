pub mod config;
pub mod error;
pub mod pool;
pub mod utils;

pub use config::{PoolConfig, SamplingStrategy};
pub use error::{ConfigError, PermutationError, PoolError};
pub use pool::{
	generate_pool,
	Permutation,
	PermutationPool,
	PoolGenerator,
	ALPHABET,
	PERM_LENGTH,
	UNIVERSE_SIZE,
};
pub use utils::output::{save_pool, write_pool};
