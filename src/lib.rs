//! Strandlab: a library for modeling and editing raw DNA reads.
//!
//! This library provides data structures and operations for working with
//! sequencer output as it actually arrives: coding symbols interleaved
//! with junk. Reads are validated against a codon rule at construction,
//! weighed by molar mass, partitioned into codons, screened with a
//! protein-coding heuristic, and edited by codon substitution.

pub mod analysis;
pub mod base;
pub mod errors;
pub mod prelude;

// Re-export commonly used types for convenient external access.
//
// These types form the public, stable surface that most consumers of the
// library will use. Re-exporting them here makes them available as
// `strandlab::Sequence`, `strandlab::Nucleotide`, etc.
pub use base::{Codon, Nucleotide, Sequence};
