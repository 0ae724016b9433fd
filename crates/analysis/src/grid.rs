//! Expected tree order when no manifest is available.

use std::path::Path;
use tripsim_sim::errors::InputError;
use tripsim_sim::io::read_partitions;
use tripsim_sim::simulation::{ParameterGrid, TreeKey};

/// Number of numbered partitions assumed by default.
pub const DEFAULT_PARTITION_COUNT: usize = 100;

/// A parameter grid plus the partitions each point was analysed under.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifierGrid {
    pub grid: ParameterGrid,
    pub partitions: Vec<String>,
}

impl Default for ClassifierGrid {
    fn default() -> Self {
        Self::new(ParameterGrid::default(), Self::numbered_partitions(DEFAULT_PARTITION_COUNT))
    }
}

impl ClassifierGrid {
    pub fn new(grid: ParameterGrid, partitions: Vec<String>) -> Self {
        Self { grid, partitions }
    }

    /// Partitions named `"0"`, `"1"`, ... up to `count - 1`.
    pub fn numbered_partitions(count: usize) -> Vec<String> {
        (0..count).map(|i| i.to_string()).collect()
    }

    /// Use the partition names listed in a partition file.
    pub fn with_partition_file(
        grid: ParameterGrid,
        path: impl AsRef<Path>,
    ) -> Result<Self, InputError> {
        Ok(Self::new(grid, read_partitions(path)?))
    }

    /// Keys in the order trees were appended: point, partition, og_time.
    pub fn keys(&self) -> Vec<TreeKey> {
        self.grid.tree_keys(&self.partitions).collect()
    }

    pub fn tree_count(&self) -> usize {
        self.grid.tree_count(self.partitions.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_matches_published_sweep() {
        let grid = ClassifierGrid::default();
        assert_eq!(grid.partitions.len(), 100);
        assert_eq!(grid.partitions[0], "0");
        assert_eq!(grid.partitions[99], "99");
        // 6 mu x 10 mya x 3 depth x 6 p x 100 partitions x 11 outgroups
        assert_eq!(grid.tree_count(), 1_188_000);
    }

    #[test]
    fn test_key_order() {
        let grid = ClassifierGrid::new(
            ParameterGrid {
                mu_values: vec![0.1],
                mya_values: vec![1.0],
                depth_values: vec![0.5],
                introgression_proportions: vec![0.0, 0.5],
                og_times: vec![2, 5],
            },
            ClassifierGrid::numbered_partitions(2),
        );
        let keys = grid.keys();
        let order: Vec<_> = keys
            .iter()
            .map(|k| (k.introgression_proportion, k.partition.as_str(), k.og_time))
            .collect();
        assert_eq!(
            order,
            vec![
                (0.0, "0", 2),
                (0.0, "0", 5),
                (0.0, "1", 2),
                (0.0, "1", 5),
                (0.5, "0", 2),
                (0.5, "0", 5),
                (0.5, "1", 2),
                (0.5, "1", 5),
            ]
        );
        assert_eq!(keys.len(), grid.tree_count());
    }

    #[test]
    fn test_partition_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("parts.txt");
        fs::write(&path, "charset alpha = 1-10;\ncharset beta = 11-20;\n").unwrap();
        let grid = ClassifierGrid::with_partition_file(ParameterGrid::default(), &path).unwrap();
        assert_eq!(grid.partitions, vec!["alpha", "beta"]);
    }
}
