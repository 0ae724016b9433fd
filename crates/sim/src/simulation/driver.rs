//! Replicate driver.
//!
//! A replicate walks the whole parameter grid once, simulating each point and
//! streaming its NEXUS block (plus the matching manifest rows) to disk before
//! moving on. Nothing is retained between points.

use crate::base::Sequence;
use crate::errors::{IntrogressionError, SimulationError};
use crate::io::{BatchLayout, ManifestWriter, NexusWriter};
use crate::simulation::{
    generate_outgroups, simulate_point, Outgroup, ParameterGrid, ParameterPoint, TreeKey, Triplet,
};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Everything simulated for one grid point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationResult {
    pub triplet: Triplet,
    pub outgroups: Vec<Outgroup>,
}

/// RNG for one replicate: seeded when `seed` is given, OS entropy otherwise.
pub fn replicate_rng(seed: Option<u64>) -> Xoshiro256PlusPlus {
    match seed {
        Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
        None => Xoshiro256PlusPlus::from_seed(rand::rng().random()),
    }
}

/// Output files belonging to one replicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplicateFiles {
    /// NEXUS batch file
    pub batch: PathBuf,
    /// Run manifest
    pub manifest: PathBuf,
    /// Tree dump name, as referenced from inside the batch file
    pub tree_file: String,
}

impl ReplicateFiles {
    pub fn new(dir: impl AsRef<Path>, replicate: usize) -> Self {
        let dir = dir.as_ref();
        Self {
            batch: dir.join(format!("bigboy_sims_{replicate}.nex")),
            manifest: dir.join(format!("bigboy_sims_{replicate}.manifest.csv")),
            tree_file: format!("simdump_{replicate}.mrp"),
        }
    }
}

/// Totals for a finished replicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReplicateSummary {
    pub points: usize,
    pub trees: usize,
}

/// Runs one replicate of a sweep against a fixed reference.
pub struct ReplicateRunner<'a> {
    reference: &'a Sequence,
    grid: &'a ParameterGrid,
    partitions: &'a [String],
    partition_file: String,
}

impl<'a> ReplicateRunner<'a> {
    pub fn new(
        reference: &'a Sequence,
        grid: &'a ParameterGrid,
        partitions: &'a [String],
        partition_file: impl Into<String>,
    ) -> Self {
        Self {
            reference,
            grid,
            partitions,
            partition_file: partition_file.into(),
        }
    }

    /// Simulate the triplet, then the outgroups, for one point.
    pub fn simulate<R: Rng + ?Sized>(
        &self,
        point: &ParameterPoint,
        rng: &mut R,
    ) -> Result<SimulationResult, IntrogressionError> {
        let triplet = simulate_point(self.reference, point, rng)?;
        let outgroups = generate_outgroups(self.reference, point.mu, &self.grid.og_times, rng);
        Ok(SimulationResult { triplet, outgroups })
    }

    /// Stream the whole grid to `batch` and `manifest`.
    ///
    /// `on_point` is called after each point has been written.
    pub fn write<W, M, R, F>(
        &self,
        tree_file: &str,
        batch: W,
        manifest: M,
        rng: &mut R,
        mut on_point: F,
    ) -> Result<ReplicateSummary, SimulationError>
    where
        W: Write,
        M: Write,
        R: Rng + ?Sized,
        F: FnMut(&ParameterPoint),
    {
        self.grid.validate()?;
        if self.partitions.is_empty() {
            log::warn!("no partitions given; batch blocks will build no trees");
        }

        let layout = BatchLayout {
            partitions: self.partitions.to_vec(),
            partition_file: self.partition_file.clone(),
            tree_file: tree_file.to_string(),
        };
        let mut nexus = NexusWriter::new(batch, layout);
        let mut manifest = ManifestWriter::new(manifest)?;
        nexus.write_preamble()?;

        // Points sharing one (mu, mya) pair
        let slice = self.grid.depth_values.len() * self.grid.introgression_proportions.len();
        let mut summary = ReplicateSummary::default();

        for point in self.grid.points() {
            let result = self.simulate(&point, rng)?;
            nexus.write_block(&point, &result.triplet, &result.outgroups)?;
            for key in self.keys_for(&point) {
                manifest.write_key(&key)?;
            }
            summary.points += 1;
            log::debug!(
                "point {} written (mu={}, mya={}, depth={}, p={})",
                point.index + 1,
                point.mu,
                point.mya,
                point.depth,
                point.introgression_proportion
            );

            if (point.index + 1) % slice == 0 {
                nexus.flush()?;
                manifest.flush()?;
            }
            on_point(&point);
        }

        nexus.flush()?;
        manifest.flush()?;
        summary.trees = manifest.written();
        Ok(summary)
    }

    /// Create the replicate's files under `dir` and write them.
    pub fn run_in_dir<R, F>(
        &self,
        dir: impl AsRef<Path>,
        replicate: usize,
        rng: &mut R,
        on_point: F,
    ) -> Result<(ReplicateFiles, ReplicateSummary), SimulationError>
    where
        R: Rng + ?Sized,
        F: FnMut(&ParameterPoint),
    {
        let files = ReplicateFiles::new(dir, replicate);
        let batch = BufWriter::new(File::create(&files.batch)?);
        let manifest = BufWriter::new(File::create(&files.manifest)?);
        let summary = self.write(&files.tree_file, batch, manifest, rng, on_point)?;
        log::info!(
            "replicate {replicate}: {} points, {} trees expected -> {}",
            summary.points,
            summary.trees,
            files.batch.display()
        );
        Ok((files, summary))
    }

    fn keys_for<'p>(&'p self, point: &'p ParameterPoint) -> impl Iterator<Item = TreeKey> + 'p {
        self.partitions.iter().flat_map(move |partition| {
            self.grid.og_times.iter().map(move |&og_time| TreeKey {
                mu: point.mu,
                mya: point.mya,
                depth: point.depth,
                introgression_proportion: point.introgression_proportion,
                partition: partition.clone(),
                og_time,
            })
        })
    }
}
