//! Analysis routines over raw reads.
//!
//! Everything here is derived data: a [`Composition`] census of one
//! read and the numeric helpers shared by mass reporting.

pub mod composition;
pub mod utils;

pub use composition::Composition;
