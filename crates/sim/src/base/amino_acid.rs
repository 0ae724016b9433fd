use core::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::InvalidAminoAcid;

/// One of the 20 standard amino acids.
///
/// `AminoAcid` is a compact, Copyable representation backed by a single byte.
/// The discriminants follow the sampling order used by [`AminoAcid::ALL`]
/// (A, R, N, D, C, E, Q, G, H, I, L, K, M, F, P, S, T, W, Y, V), which is
/// stable and relied upon for reproducible runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum AminoAcid {
    Ala = 0,
    Arg = 1,
    Asn = 2,
    Asp = 3,
    Cys = 4,
    Glu = 5,
    Gln = 6,
    Gly = 7,
    His = 8,
    Ile = 9,
    Leu = 10,
    Lys = 11,
    Met = 12,
    Phe = 13,
    Pro = 14,
    Ser = 15,
    Thr = 16,
    Trp = 17,
    Tyr = 18,
    Val = 19,
}

impl AminoAcid {
    /// Number of symbols in the alphabet.
    pub const COUNT: usize = 20;

    /// The whole alphabet in index order.
    pub const ALL: [AminoAcid; Self::COUNT] = [
        Self::Ala,
        Self::Arg,
        Self::Asn,
        Self::Asp,
        Self::Cys,
        Self::Glu,
        Self::Gln,
        Self::Gly,
        Self::His,
        Self::Ile,
        Self::Leu,
        Self::Lys,
        Self::Met,
        Self::Phe,
        Self::Pro,
        Self::Ser,
        Self::Thr,
        Self::Trp,
        Self::Tyr,
        Self::Val,
    ];

    const ASCII: [u8; Self::COUNT] = *b"ARNDCEQGHILKMFPSTWYV";

    /// Convert from u8 index (0-19)
    #[inline(always)]
    pub const fn from_index(idx: u8) -> Option<Self> {
        if (idx as usize) < Self::COUNT {
            Some(Self::ALL[idx as usize])
        } else {
            None
        }
    }

    /// Convert to the compact u8 index (0-19).
    #[inline(always)]
    pub const fn to_index(self) -> u8 {
        self as u8
    }

    /// Convert from an uppercase one-letter ASCII code.
    /// Returns `None` for anything outside the 20 standard residues.
    #[inline]
    pub const fn from_ascii(byte: u8) -> Option<Self> {
        let mut i = 0;
        while i < Self::COUNT {
            if Self::ASCII[i] == byte {
                return Some(Self::ALL[i]);
            }
            i += 1;
        }
        None
    }

    /// Convert to the uppercase one-letter ASCII code.
    #[inline(always)]
    pub const fn to_ascii(self) -> u8 {
        Self::ASCII[self as usize]
    }

    /// Convert to the uppercase one-letter `char`.
    #[inline(always)]
    pub const fn to_char(self) -> char {
        self.to_ascii() as char
    }

    /// Draw a residue uniformly from the alphabet.
    #[inline]
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::COUNT)]
    }
}

impl TryFrom<u8> for AminoAcid {
    type Error = InvalidAminoAcid;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Self::from_ascii(byte).ok_or(InvalidAminoAcid(byte))
    }
}

impl From<AminoAcid> for char {
    #[inline(always)]
    fn from(aa: AminoAcid) -> char {
        aa.to_char()
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A single alignment column.
///
/// Reference genomes are stored already aligned, so gaps (`-`) may appear in
/// the input, along with ambiguity codes, stop symbols or lowercase letters.
/// Those are kept byte for byte as [`Residue::Other`] so the matrix echoes the
/// reference. The evolutionary operators only ever write amino acids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Residue {
    Amino(AminoAcid),
    Gap,
    /// Any other printable ASCII symbol, as read.
    Other(u8),
}

impl Residue {
    pub const GAP_CHAR: u8 = b'-';

    #[inline]
    pub const fn from_ascii(byte: u8) -> Option<Self> {
        if byte == Self::GAP_CHAR {
            return Some(Self::Gap);
        }
        match AminoAcid::from_ascii(byte) {
            Some(aa) => Some(Self::Amino(aa)),
            None if byte.is_ascii_graphic() => Some(Self::Other(byte)),
            None => None,
        }
    }

    #[inline(always)]
    pub const fn to_ascii(self) -> u8 {
        match self {
            Self::Amino(aa) => aa.to_ascii(),
            Self::Gap => Self::GAP_CHAR,
            Self::Other(byte) => byte,
        }
    }

    #[inline(always)]
    pub const fn to_char(self) -> char {
        self.to_ascii() as char
    }

    #[inline(always)]
    pub const fn is_gap(self) -> bool {
        matches!(self, Self::Gap)
    }
}

impl From<AminoAcid> for Residue {
    #[inline(always)]
    fn from(aa: AminoAcid) -> Self {
        Self::Amino(aa)
    }
}

impl fmt::Display for Residue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
