//! Error types for read validation and codon editing.

use thiserror::Error;

/// Error returned when a candidate read fails the codon validity rule.
///
/// A read is accepted only when its number of coding symbols (`A`, `C`,
/// `G`, `T`) is a whole multiple of three. Junk symbols are ignored by
/// the rule, so a read of pure junk is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid read: {coding} coding symbols is not a whole number of codons")]
pub struct InvalidSequence {
    /// Coding symbols counted in the rejected candidate.
    pub coding: usize,
}

/// Error returned when parsing a [`Codon`](crate::base::Codon) from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidCodon {
    /// The input did not contain exactly three symbols.
    #[error("codon must be exactly 3 symbols, got {0}")]
    WrongLength(usize),
    /// The input contained a symbol outside the coding alphabet.
    #[error("invalid symbol '{0}' in codon")]
    InvalidChar(char),
}

/// Error returned when a codon substitution is rejected.
///
/// Both arguments of a substitution must pass the same validity rule as
/// a full read. The read itself is left untouched when either argument
/// is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MutationError {
    /// The run to replace failed the codon validity rule.
    #[error("original run rejected: {coding} coding symbols is not a whole number of codons")]
    InvalidOriginal {
        /// Coding symbols counted in the rejected run.
        coding: usize,
    },
    /// The replacement run failed the codon validity rule.
    #[error("replacement run rejected: {coding} coding symbols is not a whole number of codons")]
    InvalidReplacement {
        /// Coding symbols counted in the rejected run.
        coding: usize,
    },
}
