use clap::Parser;
use perm_pool::{
    save_pool, write_pool, PoolConfig, PoolError, PoolGenerator, SamplingStrategy, UNIVERSE_SIZE,
};
use std::env;
use std::io;
use std::num::IntErrorKind;
use std::path::{Path, PathBuf};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Print a pool of distinct random permutations of the digits 0-9, one per line",
    long_about = None
)]
struct Cli {
    /// How many distinct permutations to generate (0 to 3628800)
    #[arg(value_name = "NUM_TO_GENERATE", allow_negative_numbers = true)]
    counts: Vec<String>,
    /// Sampling strategy (rejection, index, auto)
    #[arg(short, long)]
    strategy: Option<SamplingStrategy>,
    /// Seed for a reproducible pool
    #[arg(long)]
    seed: Option<u64>,
    /// Give up after this many rejection-sampling draws
    #[arg(long, value_name = "N")]
    max_draws: Option<u64>,
    /// Write the pool to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
    /// TOML file with defaults for strategy, seed and max_draws
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Report draw and collision counts on stderr
    #[arg(long)]
    stats: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    if cli.counts.len() != 1 {
        println!("Usage: {} NUM_TO_GENERATE", program_name());
        return Ok(());
    }

    let count = parse_count(&cli.counts[0])?;
    let config = resolve_config(&cli)?;
    let mut generator = PoolGenerator::new(config);
    let strategy = generator.resolve_strategy(count);
    let pool = generator.generate(count)?;

    if cli.stats {
        eprintln!(
            "{} permutations via {} sampling ({} draws, {} collisions)",
            pool.len(),
            strategy,
            pool.draws(),
            pool.collisions()
        );
    }

    match &cli.output {
        Some(path) => save_pool(path, &pool)?,
        None => match write_pool(&pool, io::stdout().lock()) {
            Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {}
            other => other?,
        },
    }
    Ok(())
}

/// Non-positive counts mean an empty pool. Counts too large for `i64` are
/// reported as exceeding the universe, like any other oversized request.
fn parse_count(value: &str) -> CliResult<u64> {
    match value.trim().parse::<i64>() {
        Ok(count) => Ok(u64::try_from(count).unwrap_or(0)),
        Err(err) if *err.kind() == IntErrorKind::PosOverflow => Err(PoolError::ExceedsUniverse {
            requested: u64::MAX,
            universe: UNIVERSE_SIZE,
        }
        .into()),
        Err(err) if *err.kind() == IntErrorKind::NegOverflow => Ok(0),
        Err(err) => Err(format!("invalid NUM_TO_GENERATE '{value}': {err}").into()),
    }
}

fn resolve_config(cli: &Cli) -> CliResult<PoolConfig> {
    let mut config = match &cli.config {
        Some(path) => PoolConfig::load(path)?,
        None => PoolConfig::default(),
    };
    if let Some(strategy) = cli.strategy {
        config.strategy = strategy;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if cli.max_draws.is_some() {
        config.max_draws = cli.max_draws;
    }
    Ok(config)
}

fn program_name() -> String {
    let invoked_as = env::args_os().next();
    invoked_as
        .as_deref()
        .and_then(|arg| Path::new(arg).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "perm_pool".to_string())
}
