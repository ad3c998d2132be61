use core::fmt;

use serde::{Deserialize, Serialize};

/// Molar mass assigned to every symbol outside the coding alphabet.
///
/// Raw reads carry sequencer noise alongside real bases. Noise symbols
/// still contribute to the mass of the physical sample, so they are
/// weighed at this flat rate instead of being skipped.
pub const JUNK_MASS: f64 = 100.0;

/// A DNA nucleotide base.
///
/// `Nucleotide` is the coding alphabet of a raw read: the four uppercase
/// symbols `A`, `C`, `G`, `T`. Recognition is case sensitive. Lowercase
/// letters and every other character are junk, weighed at [`JUNK_MASS`]
/// and ignored by codon arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Nucleotide {
    A,
    C,
    G,
    T,
}

impl Nucleotide {
    /// All four bases in alphabetical order.
    pub const ALL: [Self; 4] = [Self::A, Self::C, Self::G, Self::T];

    /// Convert from a `char`. Returns `None` for anything but the four
    /// uppercase coding symbols.
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(Self::A),
            'C' => Some(Self::C),
            'G' => Some(Self::G),
            'T' => Some(Self::T),
            _ => None,
        }
    }

    /// Convert from an ASCII byte (`b'A'`, `b'C'`, `b'G'`, `b'T'`).
    /// Returns `None` for anything else, lowercase included.
    #[inline]
    pub const fn from_ascii(byte: u8) -> Option<Self> {
        match byte {
            b'A' => Some(Self::A),
            b'C' => Some(Self::C),
            b'G' => Some(Self::G),
            b'T' => Some(Self::T),
            _ => None,
        }
    }

    /// Convert to an uppercase ASCII byte representing this nucleotide.
    #[inline(always)]
    pub const fn to_ascii(self) -> u8 {
        match self {
            Self::A => b'A',
            Self::C => b'C',
            Self::G => b'G',
            Self::T => b'T',
        }
    }

    /// Convert to an uppercase `char` representing this nucleotide.
    #[inline(always)]
    pub const fn to_char(self) -> char {
        self.to_ascii() as char
    }

    /// Return the molar mass of this base.
    #[inline(always)]
    pub const fn mass(self) -> f64 {
        match self {
            Self::A => 135.128,
            Self::C => 111.103,
            Self::G => 151.128,
            Self::T => 125.107,
        }
    }

    /// Return the complementary base (A <-> T, C <-> G).
    #[inline(always)]
    pub const fn complement(self) -> Self {
        match self {
            Self::A => Self::T,
            Self::T => Self::A,
            Self::C => Self::G,
            Self::G => Self::C,
        }
    }

    /// Return true if the nucleotide is a purine (A or G).
    #[inline(always)]
    pub const fn is_purine(self) -> bool {
        matches!(self, Self::A | Self::G)
    }

    /// Return true if the nucleotide is a pyrimidine (C or T).
    #[inline(always)]
    pub const fn is_pyrimidine(self) -> bool {
        matches!(self, Self::C | Self::T)
    }
}

impl From<Nucleotide> for char {
    #[inline(always)]
    fn from(nuc: Nucleotide) -> char {
        nuc.to_char()
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
