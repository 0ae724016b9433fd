//! Introgression: a one-off pulse of residues from a donor lineage.
//!
//! `floor(proportion × len)` distinct sites are drawn without replacement and
//! the donor's residue is copied into the recipient at each of them. All other
//! sites of the recipient are left untouched. Because the sites are distinct,
//! the number of changed positions never exceeds the number of drawn sites
//! (fewer when donor and recipient already agree at a drawn site).

use crate::base::Sequence;
pub use crate::errors::IntrogressionError;
use rand::Rng;
use rand::seq::index;

/// Number of sites transferred for a given proportion.
#[inline]
pub fn introgression_count(proportion: f64, len: usize) -> usize {
    (proportion * len as f64).floor() as usize
}

fn check(source: &Sequence, target: &Sequence, proportion: f64) -> Result<(), IntrogressionError> {
    if !(0.0..=1.0).contains(&proportion) {
        return Err(IntrogressionError::ProportionOutOfRange(proportion));
    }
    if source.len() != target.len() {
        return Err(IntrogressionError::LengthMismatch {
            source: source.len(),
            target: target.len(),
        });
    }
    Ok(())
}

/// Draw the sites that receive donor residues, in ascending order.
pub fn introgress_positions<R: Rng + ?Sized>(
    source: &Sequence,
    target: &Sequence,
    proportion: f64,
    rng: &mut R,
) -> Result<Vec<usize>, IntrogressionError> {
    check(source, target, proportion)?;
    let len = source.len();
    let amount = introgression_count(proportion, len);
    let mut positions = index::sample(rng, len, amount).into_vec();
    positions.sort_unstable();
    Ok(positions)
}

/// Return a copy of `target` with `proportion` of its sites taken from `source`.
///
/// # Errors
/// - [`IntrogressionError::ProportionOutOfRange`] if `proportion` is not in `[0, 1]`
/// - [`IntrogressionError::LengthMismatch`] if the sequences differ in length
pub fn introgress<R: Rng + ?Sized>(
    source: &Sequence,
    target: &Sequence,
    proportion: f64,
    rng: &mut R,
) -> Result<Sequence, IntrogressionError> {
    let positions = introgress_positions(source, target, proportion, rng)?;
    log::trace!("introgressing {} of {} sites", positions.len(), source.len());

    let mut recipient = target.clone();
    let donor = source.as_slice();
    let slots = recipient.as_mut_slice();
    for pos in positions {
        slots[pos] = donor[pos];
    }
    Ok(recipient)
}
