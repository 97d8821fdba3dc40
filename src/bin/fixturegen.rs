use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use tracing_subscriber::EnvFilter;

use fixturegen::{generate_file, parse_exponent, record_count};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// File to create or overwrite.
    #[arg(value_name = "OUTPUT_PATH")]
    output: PathBuf,

    /// The record count is about 2.5 * 2^N_RANGE.
    #[arg(value_name = "N_RANGE", value_parser = parse_exponent)]
    exponent: u32,

    /// Seed the generator to get the same file on every run.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    setup_logging();
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let n = record_count(cli.exponent, &mut rng)?;
    println!("n={}", n);

    generate_file(&cli.output, n, &mut rng)
        .with_context(|| format!("failed to generate fixture with N = {}", cli.exponent))?;

    Ok(())
}

fn setup_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
