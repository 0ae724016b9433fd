//! Evolutionary operators acting on protein sequences.
//!
//! - **Mutation**: a fixed number of uniform point substitutions per branch
//! - **Introgression**: a one-off transfer of distinct sites from a donor lineage

pub mod introgression;
pub mod mutation;

pub use introgression::{introgress, introgress_positions, introgression_count};
pub use mutation::{mutate, mutate_in_place, mutation_count};
