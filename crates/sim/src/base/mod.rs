//! Base types for sequence representation.
//!
//! This module provides the foundational types for representing amino acids,
//! alignment residues, and protein sequences in the tripsim library.

mod amino_acid;
mod sequence;

pub use amino_acid::{AminoAcid, Residue};
pub use sequence::Sequence;
