//! # Simulation Crate
//!
//! The `sim` crate evolves three related protein sequences (A, B, C) and a set
//! of outgroups from a reference, with a single pulse of introgression from C
//! into B, and writes the results as PAUP* batch files for tree inference.

pub mod base;
pub mod errors;
pub mod evolution;
pub mod io;
pub mod simulation;
pub mod prelude;

pub use base::{AminoAcid, Residue, Sequence};
