use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Output configuration path
    #[arg(short, long, default_value = crate::defaults::CONFIG_FILE)]
    pub output: PathBuf,

    /// Reference genome file (first line is used)
    #[arg(long, default_value = crate::defaults::GENOME_FILE)]
    pub genome: PathBuf,

    /// PAUP* partition file with `charset` lines
    #[arg(long, default_value = crate::defaults::PARTITION_FILE)]
    pub partitions: PathBuf,

    /// Maximum number of reference residues kept
    #[arg(long, default_value_t = crate::defaults::MAX_LENGTH)]
    pub max_length: usize,

    /// Base random seed; replicate N uses seed + N
    #[arg(long)]
    pub seed: Option<u64>,

    /// Overwrite an existing file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Replicate index to run
    ///
    /// If omitted (and --replicates is not given) you are asked for the
    /// number of simulations and replicates 0..N run one after another.
    pub replicate: Option<usize>,

    /// Configuration file written by `tripsim init`
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Run N replicates in parallel
    #[arg(short = 'n', long, conflicts_with = "replicate")]
    pub replicates: Option<usize>,

    /// Index of the first replicate when using --replicates
    #[arg(long, default_value = "0", requires = "replicates")]
    pub first: usize,

    /// Directory for batch files and manifests
    #[arg(short, long, default_value = crate::defaults::OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Override reference genome file
    #[arg(long)]
    pub genome: Option<PathBuf>,

    /// Override partition file
    #[arg(long)]
    pub partitions: Option<PathBuf>,

    /// Override maximum reference length
    #[arg(long)]
    pub max_length: Option<usize>,

    /// Override base random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Show progress bar
    #[arg(long, action = clap::ArgAction::Set, default_value = "true")]
    pub progress: bool,
}

#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Tree dump written by PAUP* (`simdump_N.mrp`)
    pub input: Option<PathBuf>,

    /// Run manifest listing the expected trees
    ///
    /// Defaults to `bigboy_sims_N.manifest.csv` next to the input when it
    /// exists.
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,

    /// Configuration whose grid is used when there is no manifest
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Partition file naming the partitions, when there is no manifest
    #[arg(long, conflicts_with = "partition_count")]
    pub partitions: Option<PathBuf>,

    /// Number of numbered partitions, when there is no manifest
    #[arg(long)]
    pub partition_count: Option<usize>,

    /// Show progress bar
    #[arg(long, action = clap::ArgAction::Set, default_value = "true")]
    pub progress: bool,
}
