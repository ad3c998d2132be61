//! Commonly used imports for convenience.
//!
//! This prelude module provides a convenient way to import the most
//! commonly used types in the strandlab library.
//!
//! # Example
//!
//! ```
//! use strandlab::prelude::*;
//!
//! let read = Sequence::new("XXACGXX").unwrap();
//! assert_eq!(Composition::of(&read).junk(), 4);
//! ```

pub use crate::base::{Codon, Nucleotide, Sequence, JUNK_MASS};
pub use crate::errors::{InvalidCodon, InvalidSequence, MutationError};

// Analysis module re-exports
pub use crate::analysis::Composition;
