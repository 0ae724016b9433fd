//! Three-taxon lineage simulation with one introgression pulse.
//!
//! ```text
//!      ,-------------- C
//!      |         |
//!  ----|         v
//!      |     ,-------- B
//!      `----|
//!            `-------- A
//!            <-depth->
//!      <----mya----->
//! ```
//!
//! C leaves the reference at the root and evolves for the full `mya`. The
//! A/B ancestor evolves for `mya × (1 − depth)`, then splits. A evolves for
//! the remaining `mya × depth`. B evolves for half of that interval, receives
//! residues from C, and evolves for the other half.

use crate::base::Sequence;
use crate::errors::IntrogressionError;
use crate::evolution::{introgress, mutate};
use crate::simulation::ParameterPoint;
use rand::Rng;

/// Tip sequences of the simulated tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triplet {
    pub a: Sequence,
    pub b: Sequence,
    pub c: Sequence,
}

impl Triplet {
    /// Taxa in matrix order.
    pub fn taxa(&self) -> [(&'static str, &Sequence); 3] {
        [("A", &self.a), ("B", &self.b), ("C", &self.c)]
    }
}

/// Simulate A, B and C from `reference`.
///
/// The order of operations, and therefore of RNG draws, is fixed:
/// C, AB stem, A, first half of B, introgression C → B, second half of B.
pub fn simulate_triplet<R: Rng + ?Sized>(
    reference: &Sequence,
    mu: f64,
    mya: f64,
    depth: f64,
    introgression_proportion: f64,
    rng: &mut R,
) -> Result<Triplet, IntrogressionError> {
    let point = ParameterPoint {
        index: 0,
        mu,
        mya,
        depth,
        introgression_proportion,
    };
    simulate_point(reference, &point, rng)
}

/// Simulate the triplet for one grid point; see [`simulate_triplet`].
pub fn simulate_point<R: Rng + ?Sized>(
    reference: &Sequence,
    point: &ParameterPoint,
    rng: &mut R,
) -> Result<Triplet, IntrogressionError> {
    let mu = point.mu;
    let c = mutate(reference, mu, point.mya, rng);

    let stem = mutate(reference, mu, point.stem_time(), rng);
    let a = mutate(&stem, mu, point.split_time(), rng);

    let half_split = point.split_time() / 2.0;
    let b = mutate(&stem, mu, half_split, rng);
    let b = introgress(&c, &b, point.introgression_proportion, rng)?;
    let b = mutate(&b, mu, half_split, rng);

    Ok(Triplet { a, b, c })
}
