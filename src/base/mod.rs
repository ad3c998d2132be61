//! Base types for raw read representation.
//!
//! This module provides the foundational types of the strandlab library:
//! the coding alphabet, codons, and the raw read itself.

mod codon;
mod nucleotide;
mod sequence;

pub use codon::Codon;
pub use nucleotide::{Nucleotide, JUNK_MASS};
pub use sequence::Sequence;
