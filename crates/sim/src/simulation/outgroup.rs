//! Outgroup sequences.
//!
//! Each outgroup is mutated from the pristine reference for its own branch
//! length; outgroups are never derived from one another.

use crate::base::Sequence;
use crate::evolution::mutate;
use rand::Rng;

/// One outgroup taxon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outgroup {
    /// Branch length in million years
    pub time: u32,
    pub sequence: Sequence,
}

impl Outgroup {
    /// Taxon label used in data matrices, e.g. `OG25`.
    pub fn label(&self) -> String {
        outgroup_label(self.time)
    }
}

/// Label for an outgroup with branch length `time`.
pub fn outgroup_label(time: u32) -> String {
    format!("OG{time}")
}

/// Mutate a fresh copy of `reference` once per entry of `times`, in order.
pub fn generate_outgroups<R: Rng + ?Sized>(
    reference: &Sequence,
    mu: f64,
    times: &[u32],
    rng: &mut R,
) -> Vec<Outgroup> {
    times
        .iter()
        .map(|&time| Outgroup {
            time,
            sequence: mutate(reference, mu, f64::from(time), rng),
        })
        .collect()
}
