use super::{AminoAcid, Residue};
use crate::errors::InvalidSequence;
use std::fmt;
use std::str::FromStr;

/// Aligned protein sequence backed by a vector of residues.
///
/// Operators in [`crate::evolution`] never modify a `Sequence` in place from
/// the caller's point of view: they clone and return a new value, so every
/// lineage snapshot stays intact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Sequence(Vec<Residue>);

impl Sequence {
    /// Create a new, empty `Sequence`.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Create a gap-free `Sequence` from amino acids.
    pub fn from_amino_acids(amino_acids: impl IntoIterator<Item = AminoAcid>) -> Self {
        Self(amino_acids.into_iter().map(Residue::Amino).collect())
    }

    /// Return the length of the sequence in alignment columns.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return `true` if the sequence has no columns.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the residue at `index`, or `None` if out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Residue> {
        self.0.get(index).copied()
    }

    /// Borrow the underlying residue slice.
    #[inline]
    pub fn as_slice(&self) -> &[Residue] {
        &self.0
    }

    /// Borrow the mutable underlying residue slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Residue] {
        &mut self.0
    }

    /// Number of gap columns.
    pub fn gap_count(&self) -> usize {
        self.0.iter().filter(|r| r.is_gap()).count()
    }

    /// Positions at which `self` and `other` differ.
    ///
    /// Only the common prefix is compared.
    pub fn differing_positions(&self, other: &Sequence) -> Vec<usize> {
        self.0
            .iter()
            .zip(other.0.iter())
            .enumerate()
            .filter_map(|(i, (a, b))| (a != b).then_some(i))
            .collect()
    }

    /// Count of positions at which `self` and `other` differ.
    pub fn hamming_distance(&self, other: &Sequence) -> usize {
        self.0
            .iter()
            .zip(other.0.iter())
            .filter(|(a, b)| a != b)
            .count()
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text: String = self.0.iter().map(|r| r.to_char()).collect();
        f.write_str(&text)
    }
}

impl FromStr for Sequence {
    type Err = InvalidSequence;

    /// Parse one-letter codes and `-` gaps. Printable symbols outside the
    /// uppercase alphabet are kept as [`Residue::Other`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(position, c)| {
                u8::try_from(c)
                    .ok()
                    .and_then(Residue::from_ascii)
                    .ok_or(InvalidSequence::InvalidChar { position, found: c })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl From<Vec<Residue>> for Sequence {
    fn from(residues: Vec<Residue>) -> Self {
        Self(residues)
    }
}

impl AsRef<[Residue]> for Sequence {
    fn as_ref(&self) -> &[Residue] {
        &self.0
    }
}
