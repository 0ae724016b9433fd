//! Shared default values for the command line.
//! Used by clap defaults and by `init`.

use tripsim_sim::simulation::DEFAULT_MAX_LENGTH;

pub const CONFIG_FILE: &str = "tripsim.json";
pub const OUTPUT_DIR: &str = ".";

pub const GENOME_FILE: &str = "melanogaster_genome.txt";
pub const PARTITION_FILE: &str = "melanogaster_partitions.txt";
pub const MAX_LENGTH: usize = DEFAULT_MAX_LENGTH;

pub const PROGRESS_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {per_sec}";
