//! File formats read and written by the simulator.
//!
//! - [`input`]: reference genome and partition list
//! - [`nexus`]: PAUP* batch files
//! - [`manifest`]: per-tree keys matching the tool's output order

pub mod float;
pub mod input;
pub mod manifest;
pub mod nexus;

pub use float::FloatText;
pub use input::{read_partitions, read_reference};
pub use manifest::{parse_manifest, read_manifest, ManifestWriter, MANIFEST_HEADER};
pub use nexus::{BatchLayout, NexusWriter};
