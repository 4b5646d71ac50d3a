use std::process::ExitCode;

use clap::Parser;

use percolation::config::ExperimentConfig;

/// Estimate the percolation threshold of an N×N grid by Monte-Carlo simulation.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Grid side length
    n: usize,

    /// Number of trials
    trials: usize,

    /// Seed the random number generator for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,
}

impl From<Args> for ExperimentConfig {
    fn from(args: Args) -> Self {
        Self {
            grid_size: args.n,
            trials: args.trials,
            seed: args.seed,
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = ExperimentConfig::from(Args::parse());
    match config.run() {
        Ok(stats) => {
            println!("{stats}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
