//! Parameter sweep, lineage simulation and the replicate driver.
//!
//! - `ParameterGrid`: the swept values and their iteration order.
//! - `Configuration`: JSON-backed run settings.
//! - `simulate_triplet` / `generate_outgroups`: one point's sequences.
//! - `ReplicateRunner`: streams a whole replicate to disk.

pub mod configs;
pub mod driver;
pub mod lineage;
pub mod outgroup;
pub mod parameters;

pub use configs::{Configuration, InputConfig, DEFAULT_MAX_LENGTH};
pub use driver::{
    replicate_rng, ReplicateFiles, ReplicateRunner, ReplicateSummary, SimulationResult,
};
pub use lineage::{simulate_point, simulate_triplet, Triplet};
pub use outgroup::{generate_outgroups, outgroup_label, Outgroup};
pub use parameters::{ParameterGrid, ParameterPoint, TreeKey, FIRST_OUTGROUP_TAXON};
