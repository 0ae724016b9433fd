//! Parameter grid for introgression sweeps.
//!
//! A sweep is the Cartesian product of five ordered value lists. The order in
//! which points are visited is part of the output format: the external tool
//! appends one tree per (point, partition, outgroup) in exactly this order and
//! nothing in its output identifies which point a tree belongs to.
//!
//! Iteration order, outermost first:
//! `mu → mya → depth → introgression_proportion` for simulation points, then
//! `partition → og_time` inside each point for tree blocks.

use crate::errors::GridError;
use serde::{Deserialize, Serialize};

/// Taxon index of the first outgroup in a data matrix (A, B, C come first).
pub const FIRST_OUTGROUP_TAXON: usize = 4;

fn default_mu_values() -> Vec<f64> {
    vec![0.0001, 0.00025, 0.0005, 0.001, 0.0015, 0.002]
}

fn default_mya_values() -> Vec<f64> {
    (1..=10).map(|i| 2.5 * i as f64).collect()
}

fn default_depth_values() -> Vec<f64> {
    vec![0.25, 0.5, 0.75]
}

fn default_introgression_proportions() -> Vec<f64> {
    vec![0.0, 0.01, 0.031, 0.0625, 0.125, 0.25]
}

fn default_og_times() -> Vec<u32> {
    vec![2, 5, 10, 25, 50, 75, 100, 125, 150, 175, 200]
}

/// Ordered parameter lists spanning a sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterGrid {
    /// Substitutions per site per million years
    #[serde(default = "default_mu_values")]
    pub mu_values: Vec<f64>,
    /// Time since the root split (million years)
    #[serde(default = "default_mya_values")]
    pub mya_values: Vec<f64>,
    /// Depth of the A/B split as a fraction of `mya`
    #[serde(default = "default_depth_values")]
    pub depth_values: Vec<f64>,
    /// Fraction of sites moved from C into B
    #[serde(default = "default_introgression_proportions")]
    pub introgression_proportions: Vec<f64>,
    /// Branch lengths of the outgroups (million years)
    #[serde(default = "default_og_times")]
    pub og_times: Vec<u32>,
}

impl Default for ParameterGrid {
    fn default() -> Self {
        Self {
            mu_values: default_mu_values(),
            mya_values: default_mya_values(),
            depth_values: default_depth_values(),
            introgression_proportions: default_introgression_proportions(),
            og_times: default_og_times(),
        }
    }
}

/// One simulation point of the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterPoint {
    /// 0-based position in grid order
    pub index: usize,
    pub mu: f64,
    pub mya: f64,
    pub depth: f64,
    pub introgression_proportion: f64,
}

impl ParameterPoint {
    /// Time spent by the B lineage before A splits off.
    pub fn stem_time(&self) -> f64 {
        self.mya * (1.0 - self.depth)
    }

    /// Length of the A/B branches after their split.
    pub fn split_time(&self) -> f64 {
        self.mya * self.depth
    }
}

/// Identity of one expected tree block in the tool's output.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeKey {
    pub mu: f64,
    pub mya: f64,
    pub depth: f64,
    pub introgression_proportion: f64,
    pub partition: String,
    pub og_time: u32,
}

impl ParameterGrid {
    /// Number of simulation points (one NEXUS data block each).
    pub fn len(&self) -> usize {
        self.mu_values.len()
            * self.mya_values.len()
            * self.depth_values.len()
            * self.introgression_proportions.len()
    }

    /// True if any list is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over simulation points in published order.
    pub fn points(&self) -> impl Iterator<Item = ParameterPoint> + '_ {
        self.mu_values
            .iter()
            .flat_map(move |&mu| {
                self.mya_values.iter().flat_map(move |&mya| {
                    self.depth_values.iter().flat_map(move |&depth| {
                        self.introgression_proportions.iter().map(move |&p| (mu, mya, depth, p))
                    })
                })
            })
            .enumerate()
            .map(|(index, (mu, mya, depth, introgression_proportion))| ParameterPoint {
                index,
                mu,
                mya,
                depth,
                introgression_proportion,
            })
    }

    /// Iterate over the tree blocks expected for the given partitions.
    pub fn tree_keys<'a>(&'a self, partitions: &'a [String]) -> impl Iterator<Item = TreeKey> + 'a {
        self.points().flat_map(move |point| {
            partitions.iter().flat_map(move |partition| {
                self.og_times.iter().map(move |&og_time| TreeKey {
                    mu: point.mu,
                    mya: point.mya,
                    depth: point.depth,
                    introgression_proportion: point.introgression_proportion,
                    partition: partition.clone(),
                    og_time,
                })
            })
        })
    }

    /// Number of tree blocks expected for `partition_count` partitions.
    pub fn tree_count(&self, partition_count: usize) -> usize {
        self.len() * partition_count * self.og_times.len()
    }

    /// Check every list is non-empty and every value is in its domain.
    pub fn validate(&self) -> Result<(), GridError> {
        check_non_negative("mu_values", &self.mu_values)?;
        check_non_negative("mya_values", &self.mya_values)?;
        check_unit_range("depth_values", &self.depth_values)?;
        check_unit_range("introgression_proportions", &self.introgression_proportions)?;
        if self.og_times.is_empty() {
            return Err(GridError::EmptyList("og_times"));
        }
        Ok(())
    }
}

fn check_non_negative(name: &'static str, values: &[f64]) -> Result<(), GridError> {
    if values.is_empty() {
        return Err(GridError::EmptyList(name));
    }
    match values.iter().find(|v| !v.is_finite() || **v < 0.0) {
        Some(&v) => Err(GridError::InvalidValue(name, v)),
        None => Ok(()),
    }
}

fn check_unit_range(name: &'static str, values: &[f64]) -> Result<(), GridError> {
    if values.is_empty() {
        return Err(GridError::EmptyList(name));
    }
    match values.iter().find(|v| !(0.0..=1.0).contains(*v)) {
        Some(&v) => Err(GridError::OutOfUnitRange(name, v)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_grid() -> ParameterGrid {
        ParameterGrid {
            mu_values: vec![0.001, 0.002],
            mya_values: vec![5.0],
            depth_values: vec![0.25, 0.5],
            introgression_proportions: vec![0.0, 0.1],
            og_times: vec![2, 50],
        }
    }

    #[test]
    fn test_default_grid() {
        let grid = ParameterGrid::default();
        assert_eq!(grid.len(), 6 * 10 * 3 * 6);
        assert_eq!(grid.mya_values.first(), Some(&2.5));
        assert_eq!(grid.mya_values.last(), Some(&25.0));
        assert!(grid.validate().is_ok());
    }

    #[test]
    fn test_points_nested_order() {
        let grid = small_grid();
        let points: Vec<_> = grid.points().collect();
        assert_eq!(points.len(), grid.len());

        let tuples: Vec<_> = points
            .iter()
            .map(|p| (p.mu, p.depth, p.introgression_proportion))
            .collect();
        assert_eq!(
            tuples,
            vec![
                (0.001, 0.25, 0.0),
                (0.001, 0.25, 0.1),
                (0.001, 0.5, 0.0),
                (0.001, 0.5, 0.1),
                (0.002, 0.25, 0.0),
                (0.002, 0.25, 0.1),
                (0.002, 0.5, 0.0),
                (0.002, 0.5, 0.1),
            ]
        );
        for (i, p) in points.iter().enumerate() {
            assert_eq!(p.index, i);
        }
    }

    #[test]
    fn test_tree_keys_order() {
        let grid = small_grid();
        let partitions = vec!["p1".to_string(), "p2".to_string()];
        let keys: Vec<_> = grid.tree_keys(&partitions).collect();
        assert_eq!(keys.len(), grid.tree_count(partitions.len()));
        assert_eq!(keys.len(), 8 * 2 * 2);

        let head: Vec<_> = keys[..4]
            .iter()
            .map(|k| (k.partition.as_str(), k.og_time))
            .collect();
        assert_eq!(head, vec![("p1", 2), ("p1", 50), ("p2", 2), ("p2", 50)]);
        assert_eq!(keys[4].introgression_proportion, 0.1);
        assert_eq!(keys[4].partition, "p1");
    }

    #[test]
    fn test_point_branch_times() {
        let point = ParameterPoint {
            index: 0,
            mu: 0.001,
            mya: 10.0,
            depth: 0.25,
            introgression_proportion: 0.0,
        };
        assert_eq!(point.stem_time(), 7.5);
        assert_eq!(point.split_time(), 2.5);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut grid = small_grid();
        grid.introgression_proportions.push(1.5);
        assert_eq!(
            grid.validate(),
            Err(GridError::OutOfUnitRange("introgression_proportions", 1.5))
        );

        let mut grid = small_grid();
        grid.mu_values = vec![-0.1];
        assert_eq!(grid.validate(), Err(GridError::InvalidValue("mu_values", -0.1)));

        let mut grid = small_grid();
        grid.mya_values.clear();
        assert_eq!(grid.validate(), Err(GridError::EmptyList("mya_values")));
        assert!(grid.is_empty());

        let mut grid = small_grid();
        grid.og_times.clear();
        assert_eq!(grid.validate(), Err(GridError::EmptyList("og_times")));
    }

    #[test]
    fn test_grid_partial_json_uses_defaults() {
        let grid: ParameterGrid = serde_json::from_str(r#"{"mu_values": [0.01]}"#).unwrap();
        assert_eq!(grid.mu_values, vec![0.01]);
        assert_eq!(grid.og_times, ParameterGrid::default().og_times);
    }
}
