//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use tripsim_sim::prelude::*;
//! use std::str::FromStr;
//!
//! let seq = Sequence::from_str("MKV-LA").unwrap();
//! assert_eq!(seq.gap_count(), 1);
//! ```

pub use crate::errors;
pub use crate::base::{AminoAcid, Residue, Sequence};
pub use crate::evolution::{introgress, mutate};
pub use crate::io::{read_partitions, read_reference, BatchLayout, NexusWriter};
pub use crate::simulation::{
    Configuration, Outgroup, ParameterGrid, ParameterPoint, ReplicateFiles, ReplicateRunner,
    TreeKey, Triplet,
};
