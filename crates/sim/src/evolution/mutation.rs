//! Point substitutions for protein sequences.
//!
//! Mutation here is a deterministic-count process: the number of substitution
//! events on a branch is fixed by the mutation rate, the branch length and the
//! sequence length, and only *where* they land and *what* they write is random.
//!
//! ## Event count
//! `floor(mu × time × len)` events are applied. With `mu` in substitutions per
//! site per million years and `time` in million years this is the expected
//! number of hits on the branch, truncated to an integer.
//!
//! ## Event placement
//! Each event picks a site uniformly *with replacement*, so the same site may
//! be struck repeatedly, and writes an amino acid drawn uniformly from the
//! 20-letter alphabet. The draw may coincide with the current residue, making
//! the event silent. The event count is therefore an upper bound on the number
//! of observed differences, not an exact count.

use crate::base::{AminoAcid, Residue, Sequence};
use rand::Rng;

/// Number of substitution events for a branch of length `time`.
///
/// Negative, NaN or infinite products yield zero events.
#[inline]
pub fn mutation_count(mu: f64, time: f64, len: usize) -> usize {
    let expected = mu * time * len as f64;
    if expected.is_finite() && expected > 0.0 {
        expected.floor() as usize
    } else {
        0
    }
}

/// Return a copy of `sequence` after `mu × time` worth of point substitutions.
pub fn mutate<R: Rng + ?Sized>(sequence: &Sequence, mu: f64, time: f64, rng: &mut R) -> Sequence {
    let mut mutated = sequence.clone();
    mutate_in_place(&mut mutated, mu, time, rng);
    mutated
}

/// In-place variant of [`mutate`]; returns the number of events applied.
pub fn mutate_in_place<R: Rng + ?Sized>(
    sequence: &mut Sequence,
    mu: f64,
    time: f64,
    rng: &mut R,
) -> usize {
    let len = sequence.len();
    if len == 0 {
        return 0;
    }

    let count = mutation_count(mu, time, len);
    let residues = sequence.as_mut_slice();
    for _ in 0..count {
        let pos = rng.random_range(0..len);
        residues[pos] = Residue::Amino(AminoAcid::random(rng));
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;
    use std::str::FromStr;

    fn reference(len: usize) -> Sequence {
        Sequence::from_amino_acids((0..len).map(|i| AminoAcid::ALL[i % AminoAcid::COUNT]))
    }

    #[test]
    fn test_mutation_count_floor() {
        assert_eq!(mutation_count(0.001, 2.5, 1000), 2);
        assert_eq!(mutation_count(0.0015, 25.0, 1000), 37);
        assert_eq!(mutation_count(0.0001, 2.0, 1000), 0);
        assert_eq!(mutation_count(0.5, 1.0, 3), 1);
    }

    #[test]
    fn test_mutation_count_degenerate_inputs() {
        assert_eq!(mutation_count(0.001, 0.0, 1000), 0);
        assert_eq!(mutation_count(0.0, 10.0, 1000), 0);
        assert_eq!(mutation_count(-0.1, 10.0, 1000), 0);
        assert_eq!(mutation_count(f64::NAN, 1.0, 1000), 0);
        assert_eq!(mutation_count(f64::INFINITY, 1.0, 1000), 0);
    }

    #[test]
    fn test_mutate_zero_time_is_identity() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let seq = reference(500);
        let mutated = mutate(&seq, 0.002, 0.0, &mut rng);
        assert_eq!(mutated, seq);
    }

    #[test]
    fn test_mutate_preserves_length_and_alphabet() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
        let seq = Sequence::from_str("ARND--CEQGHxX*ILKMFPSTWYV").unwrap();
        for _ in 0..50 {
            let mutated = mutate(&seq, 0.5, 2.0, &mut rng);
            assert_eq!(mutated.len(), seq.len());
            for (before, after) in seq.as_slice().iter().zip(mutated.as_slice()) {
                // Gaps and other symbols survive only if never struck
                match after {
                    Residue::Amino(_) => {}
                    _ => assert_eq!(before, after),
                }
            }
        }
    }

    #[test]
    fn test_mutate_does_not_touch_input() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        let seq = reference(200);
        let snapshot = seq.clone();
        let _ = mutate(&seq, 0.01, 50.0, &mut rng);
        assert_eq!(seq, snapshot);
    }

    #[test]
    fn test_mutate_differences_bounded_by_event_count() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(99);
        let seq = reference(1000);
        let mutated = mutate(&seq, 0.0625, 1.0, &mut rng);
        let events = mutation_count(0.0625, 1.0, 1000);
        assert_eq!(events, 62);
        let diff = seq.hamming_distance(&mutated);
        assert!(diff <= events);
        // 62 hits on 1000 sites rarely collide and 19/20 of them change the residue
        assert!(diff > 40, "only {diff} differences");
    }

    #[test]
    fn test_mutate_in_place_reports_events() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(3);
        let mut seq = reference(100);
        let applied = mutate_in_place(&mut seq, 0.125, 1.0, &mut rng);
        assert_eq!(applied, 12);
    }

    #[test]
    fn test_mutate_empty_sequence() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(3);
        let seq = Sequence::new();
        assert!(mutate(&seq, 1.0, 100.0, &mut rng).is_empty());
    }

    #[test]
    fn test_mutate_reproducible_with_seed() {
        let seq = reference(300);
        let mut rng1 = Xoshiro256PlusPlus::seed_from_u64(123);
        let mut rng2 = Xoshiro256PlusPlus::seed_from_u64(123);
        assert_eq!(
            mutate(&seq, 0.01, 10.0, &mut rng1),
            mutate(&seq, 0.01, 10.0, &mut rng2)
        );
    }
}
