//! Run configuration.
//!
//! The master [`Configuration`] can be written to and read back from a JSON
//! file so a sweep can be reproduced exactly on another machine or rerun for
//! more replicates.

use crate::errors::ConfigError;
use crate::simulation::ParameterGrid;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Reference genomes are cut to this many columns before use.
pub const DEFAULT_MAX_LENGTH: usize = 240_668;

fn default_genome() -> PathBuf {
    PathBuf::from("melanogaster_genome.txt")
}

fn default_partitions() -> PathBuf {
    PathBuf::from("melanogaster_partitions.txt")
}

fn default_max_length() -> usize {
    DEFAULT_MAX_LENGTH
}

/// Input files for a sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Reference genome; only the first line is read
    #[serde(default = "default_genome")]
    pub genome: PathBuf,
    /// PAUP* partition file listing `charset` definitions
    #[serde(default = "default_partitions")]
    pub partitions: PathBuf,
    /// Maximum number of reference columns kept
    #[serde(default = "default_max_length")]
    pub max_length: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            genome: default_genome(),
            partitions: default_partitions(),
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

/// The master configuration struct.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(default)]
    pub grid: ParameterGrid,
    #[serde(default)]
    pub inputs: InputConfig,
    /// Base RNG seed; replicate `r` uses `seed + r`
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Configuration {
    /// Read and validate a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.grid.validate()?;
        Ok(config)
    }

    /// Write the configuration as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text + "\n")?;
        Ok(())
    }

    /// Seed for a given replicate, if the run is seeded.
    pub fn replicate_seed(&self, replicate: usize) -> Option<u64> {
        self.seed.map(|s| s.wrapping_add(replicate as u64))
    }
}
