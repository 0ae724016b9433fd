mod args;
mod commands;
pub mod defaults;
mod printing;
mod prompt;

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use args::{ClassifyArgs, InitArgs, SimulateArgs};
use commands::{classify, init, simulate, summarize};

/// tripsim: three-taxon introgression simulator
///
/// Evolves sequences A, B and C from a reference genome with a pulse of
/// introgression from C into B, writes PAUP* batch files for every point of a
/// parameter sweep, and classifies the trees PAUP* recovers.
#[derive(Parser, Debug)]
#[command(name = "tripsim")]
#[command(author, version, long_about = None)]
#[command(about = "Simulates introgression and classifies recovered trees")]
struct Cli {
    /// Number of threads to use for parallel replicates
    ///
    /// If not specified, defaults to the number of logical CPUs.
    #[arg(short = 't', long, global = true)]
    threads: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a default configuration file.
    ///
    /// Holds the parameter grid, input files and seed used by `simulate`.
    Init(InitArgs),

    /// Simulate one or more replicates of the parameter sweep.
    ///
    /// Each replicate writes `bigboy_sims_N.nex` and a manifest of the trees
    /// PAUP* will append to `simdump_N.mrp`.
    Simulate(Box<SimulateArgs>),

    /// Classify the trees of a PAUP* tree dump.
    ///
    /// Writes one row per tree to `<input>.out` and per-parameter totals to
    /// `<input>_summary.csv`.
    Classify(ClassifyArgs),

    /// Recompute the summary of an existing classification file.
    Summarize {
        /// Classification CSV written by `classify`
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    match cli.command {
        Commands::Init(args) => {
            init::init_config(&args)?;
        }
        Commands::Simulate(args) => {
            simulate::run_simulate(&args)?;
        }
        Commands::Classify(args) => {
            classify::run_classify(&args)?;
        }
        Commands::Summarize { input } => {
            summarize::run_summarize(&input)?;
        }
    }

    Ok(())
}
