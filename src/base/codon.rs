use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::base::Nucleotide;
use crate::errors::InvalidCodon;

/// A codon: three coding symbols read in frame.
///
/// Codons are extracted from the coding symbols of a read after junk has
/// been stripped, so a `Codon` never contains noise. The type is `Copy`
/// and hashable, which lets distinct-codon inventories live in a
/// `HashSet<Codon>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Codon([Nucleotide; 3]);

impl Codon {
    /// The start codon, ATG.
    pub const START: Self = Self([Nucleotide::A, Nucleotide::T, Nucleotide::G]);

    /// The three stop codons: TAA, TAG, TGA.
    pub const STOP_CODONS: [Self; 3] = [
        Self([Nucleotide::T, Nucleotide::A, Nucleotide::A]),
        Self([Nucleotide::T, Nucleotide::A, Nucleotide::G]),
        Self([Nucleotide::T, Nucleotide::G, Nucleotide::A]),
    ];

    /// Build a codon from three bases.
    #[inline(always)]
    pub const fn new(bases: [Nucleotide; 3]) -> Self {
        Self(bases)
    }

    /// Return the three bases of this codon.
    #[inline(always)]
    pub const fn bases(self) -> [Nucleotide; 3] {
        self.0
    }

    /// Return true if this is the start codon.
    #[inline]
    pub fn is_start(self) -> bool {
        self == Self::START
    }

    /// Return true if this is one of the stop codons.
    #[inline]
    pub fn is_stop(self) -> bool {
        Self::STOP_CODONS.contains(&self)
    }

    /// Return the total molar mass of the three bases.
    #[inline]
    pub fn mass(self) -> f64 {
        let [a, b, c] = self.0;
        a.mass() + b.mass() + c.mass()
    }
}

impl FromStr for Codon {
    type Err = InvalidCodon;

    /// Parse a codon from exactly three coding symbols.
    ///
    /// Parsing is case sensitive like the rest of the alphabet, so
    /// `"atg"` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.chars().collect();
        if symbols.len() != 3 {
            return Err(InvalidCodon::WrongLength(symbols.len()));
        }
        let mut bases = [Nucleotide::A; 3];
        for (slot, &c) in bases.iter_mut().zip(&symbols) {
            *slot = Nucleotide::from_char(c).ok_or(InvalidCodon::InvalidChar(c))?;
        }
        Ok(Self(bases))
    }
}

impl fmt::Display for Codon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{}{}{}", a.to_char(), b.to_char(), c.to_char())
    }
}
