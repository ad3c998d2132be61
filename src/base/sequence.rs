use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::analysis::composition::Composition;
use crate::analysis::utils::round_to_decimals;
use crate::base::{Codon, Nucleotide};
use crate::errors::{InvalidSequence, MutationError};

/// Count the coding symbols in a run of raw text.
fn coding_count(s: &str) -> usize {
    s.chars().filter(|&c| Nucleotide::from_char(c).is_some()).count()
}

/// Mutable raw DNA read backed by a single string.
///
/// A `Sequence` stores one owned `String`: the read exactly as captured,
/// coding symbols and junk interleaved. Every operation re-derives what
/// it needs from that one field, so the raw text is the only state to
/// keep consistent.
///
/// Construction and codon substitution both enforce the same rule: the
/// number of coding symbols must be a whole multiple of three. The rule
/// holds for the entire life of the value, which keeps the read
/// partitionable into whole codons at any point. Junk survives inside
/// the read until the first substitution, which rewrites the read as its
/// cleaned form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sequence {
    raw: String,
}

impl Sequence {
    /// Minimum number of whole codons for a read to qualify as
    /// protein coding.
    pub const MIN_PROTEIN_CODONS: usize = 5;

    /// Minimum share of total molar mass that must come from G and C
    /// bases for a read to qualify as protein coding.
    pub const GC_MASS_THRESHOLD: f64 = 0.3;

    /// Create a `Sequence` from a candidate read.
    ///
    /// The candidate is stored verbatim, junk included. It is accepted
    /// only if its coding symbols (`A`, `C`, `G`, `T`, case sensitive)
    /// amount to a whole number of codons.
    ///
    /// Example:
    ///
    /// ```rust
    /// # use strandlab::base::Sequence;
    /// let read = Sequence::new("XXACGXX").unwrap();
    /// assert_eq!(read.as_str(), "XXACGXX");
    /// assert_eq!(read.coding_len(), 3);
    ///
    /// assert!(Sequence::new("AAAA").is_err());
    /// ```
    pub fn new(candidate: impl Into<String>) -> Result<Self, InvalidSequence> {
        let raw = candidate.into();
        let coding = coding_count(&raw);
        if coding % 3 != 0 {
            return Err(InvalidSequence { coding });
        }
        Ok(Self { raw })
    }

    /// Generate a random read with `codons` whole codons and `junk`
    /// noise symbols scattered through it.
    ///
    /// The result always satisfies the codon validity rule, so this is
    /// the cheap way to produce fixture reads of arbitrary size.
    pub fn random<R: Rng + ?Sized>(codons: usize, junk: usize, rng: &mut R) -> Self {
        const JUNK_SYMBOLS: [char; 9] = ['N', 'X', 'Y', 'Z', '-', 'a', 'c', 'g', 't'];

        let coding = codons * 3;
        let mut raw = String::with_capacity(coding + junk);
        for _ in 0..coding {
            let base = Nucleotide::ALL[rng.random_range(0..Nucleotide::ALL.len())];
            raw.push(base.to_char());
        }
        // All symbols are single-byte ASCII, so byte positions are
        // always char boundaries.
        for _ in 0..junk {
            let pos = rng.random_range(0..=raw.len());
            let symbol = JUNK_SYMBOLS[rng.random_range(0..JUNK_SYMBOLS.len())];
            raw.insert(pos, symbol);
        }
        Self { raw }
    }

    /// Return true if `candidate` passes the codon validity rule: its
    /// count of coding symbols is a whole multiple of three.
    ///
    /// Junk contributes nothing to the count, so a read of pure junk
    /// (or the empty string) is valid.
    pub fn is_valid(candidate: &str) -> bool {
        coding_count(candidate) % 3 == 0
    }

    /// Return the length of the raw read in symbols.
    ///
    /// Junk may be multi-byte text, so symbols are counted as `char`s
    /// rather than bytes.
    pub fn len(&self) -> usize {
        self.raw.chars().count()
    }

    /// Return `true` if the read contains no symbols at all.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Return the number of coding symbols in the read.
    pub fn coding_len(&self) -> usize {
        coding_count(&self.raw)
    }

    /// Borrow the raw read, junk included, exactly as last stored.
    #[inline(always)]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Iterate over the coding symbols of the read in order, skipping
    /// junk.
    fn coding_symbols(&self) -> impl Iterator<Item = Nucleotide> + '_ {
        self.raw.chars().filter_map(Nucleotide::from_char)
    }

    /// Return the cleaned form of the read: its coding symbols in
    /// order, with all junk stripped.
    pub fn cleaned(&self) -> String {
        self.coding_symbols().map(Nucleotide::to_char).collect()
    }

    /// Partition the cleaned read into its in-frame codons.
    ///
    /// Codons are read left to right from the first coding symbol.
    /// A trailing run of fewer than three symbols is dropped, though
    /// the validity rule means a `Sequence` never has one.
    pub fn codons(&self) -> Vec<Codon> {
        let symbols: Vec<Nucleotide> = self.coding_symbols().collect();
        symbols
            .chunks_exact(3)
            .map(|chunk| Codon::new([chunk[0], chunk[1], chunk[2]]))
            .collect()
    }

    /// Return the set of distinct codons appearing in the read.
    ///
    /// Example:
    ///
    /// ```rust
    /// # use strandlab::base::Sequence;
    /// let read = Sequence::new("ACGACG").unwrap();
    /// let codons = read.distinct_codons();
    /// assert_eq!(codons.len(), 1);
    /// ```
    pub fn distinct_codons(&self) -> HashSet<Codon> {
        self.codons().into_iter().collect()
    }

    /// Count raw occurrences of `symbol` in the read.
    ///
    /// The count is over the raw text, so junk symbols are countable
    /// and `'a'` is a different symbol from `'A'`.
    pub fn count_symbol(&self, symbol: char) -> usize {
        self.raw.chars().filter(|&c| c == symbol).count()
    }

    /// Return the total molar mass of the read, rounded to one decimal
    /// place.
    ///
    /// Every symbol weighs in: coding symbols at their base mass, junk
    /// at the flat [`JUNK_MASS`](crate::base::JUNK_MASS) rate.
    pub fn total_mass(&self) -> f64 {
        round_to_decimals(Composition::of(self).mass(), 1)
    }

    /// Apply the protein-coding heuristic to the read.
    ///
    /// The read qualifies when all of the following hold, checked in
    /// order with short-circuiting:
    ///
    /// 1. its first codon is the start codon ATG;
    /// 2. its last codon is one of the stop codons TAA, TAG, TGA;
    /// 3. it has at least [`MIN_PROTEIN_CODONS`](Self::MIN_PROTEIN_CODONS)
    ///    whole codons;
    /// 4. G and C bases contribute at least
    ///    [`GC_MASS_THRESHOLD`](Self::GC_MASS_THRESHOLD) of the total
    ///    molar mass of the raw read.
    ///
    /// The mass ratio is computed against the raw read, so junk dilutes
    /// GC share even though it never forms codons. An empty or pure-junk
    /// read has no codons and never qualifies.
    pub fn is_protein_coding(&self) -> bool {
        let codons = self.codons();
        match (codons.first(), codons.last()) {
            (Some(first), Some(last)) => {
                first.is_start()
                    && last.is_stop()
                    && codons.len() >= Self::MIN_PROTEIN_CODONS
                    && Composition::of(self).gc_mass_fraction() >= Self::GC_MASS_THRESHOLD
            }
            _ => false,
        }
    }

    /// Replace every occurrence of the codon run `original` with
    /// `replacement`, cleaning the read first.
    ///
    /// Both arguments must pass the same validity rule as a full read;
    /// otherwise the read is left untouched and an error reports which
    /// argument was rejected. On success the read is rewritten as its
    /// cleaned form with every non-overlapping occurrence of `original`
    /// substituted, and the number of substitutions is returned.
    ///
    /// The match is a literal substring search over the cleaned read.
    /// It does not respect codon frames, and a pattern containing junk
    /// can never match.
    ///
    /// # Errors
    ///
    /// Returns [`MutationError::InvalidOriginal`] or
    /// [`MutationError::InvalidReplacement`] when the corresponding
    /// argument fails the validity rule.
    ///
    /// Example:
    ///
    /// ```rust
    /// # use strandlab::base::Sequence;
    /// let mut read = Sequence::new("XXACGXX").unwrap();
    /// let replaced = read.mutate_codon("ACG", "TTT").unwrap();
    /// assert_eq!(replaced, 1);
    /// assert_eq!(read.as_str(), "TTT");
    /// ```
    pub fn mutate_codon(
        &mut self,
        original: &str,
        replacement: &str,
    ) -> Result<usize, MutationError> {
        if !Self::is_valid(original) {
            return Err(MutationError::InvalidOriginal {
                coding: coding_count(original),
            });
        }
        if !Self::is_valid(replacement) {
            return Err(MutationError::InvalidReplacement {
                coding: coding_count(replacement),
            });
        }

        let cleaned = self.cleaned();
        // An empty pattern matches between every pair of symbols, so it
        // is never searched for. Cleaning still applies.
        if original.is_empty() {
            self.raw = cleaned;
            return Ok(0);
        }
        let substitutions = cleaned.matches(original).count();
        self.raw = cleaned.replace(original, replacement);
        Ok(substitutions)
    }
}

impl Default for Sequence {
    /// The empty read. Zero coding symbols is a whole number of codons.
    fn default() -> Self {
        Self { raw: String::new() }
    }
}

impl FromStr for Sequence {
    type Err = InvalidSequence;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
