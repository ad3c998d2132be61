//! Read composition analysis
//!
//! A single scan over a raw read yields a [`Composition`]: per-base and
//! junk counts from which molar mass and GC mass share are derived. The
//! mass figures back both the total-mass operation and the GC arm of the
//! protein-coding heuristic.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::base::{Nucleotide, Sequence, JUNK_MASS};

/// Symbol census of a raw read.
///
/// Counts every symbol of the raw text exactly once: each of the four
/// bases separately, and everything else as junk. All derived figures
/// (coding total, molar mass, GC mass share) come from these five
/// counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Composition {
    a: usize,
    c: usize,
    g: usize,
    t: usize,
    junk: usize,
}

impl Composition {
    /// Take the census of a read.
    pub fn of(sequence: &Sequence) -> Self {
        Self::from_symbols(sequence.as_str())
    }

    /// Take the census of a run of raw text.
    pub fn from_symbols(s: &str) -> Self {
        let mut comp = Self::default();
        for c in s.chars() {
            match Nucleotide::from_char(c) {
                Some(Nucleotide::A) => comp.a += 1,
                Some(Nucleotide::C) => comp.c += 1,
                Some(Nucleotide::G) => comp.g += 1,
                Some(Nucleotide::T) => comp.t += 1,
                None => comp.junk += 1,
            }
        }
        comp
    }

    /// Return the count of one base.
    pub fn count(&self, nucleotide: Nucleotide) -> usize {
        match nucleotide {
            Nucleotide::A => self.a,
            Nucleotide::C => self.c,
            Nucleotide::G => self.g,
            Nucleotide::T => self.t,
        }
    }

    /// Return the number of junk symbols.
    #[inline(always)]
    pub fn junk(&self) -> usize {
        self.junk
    }

    /// Return the number of coding symbols.
    pub fn coding(&self) -> usize {
        self.a + self.c + self.g + self.t
    }

    /// Return the total number of symbols, junk included.
    pub fn total(&self) -> usize {
        self.coding() + self.junk
    }

    /// Return the per-base counts as a map, junk excluded.
    pub fn counts(&self) -> HashMap<Nucleotide, usize> {
        Nucleotide::ALL
            .iter()
            .map(|&nuc| (nuc, self.count(nuc)))
            .collect()
    }

    /// Return the total molar mass of the read: every base at its own
    /// mass, every junk symbol at [`JUNK_MASS`].
    pub fn mass(&self) -> f64 {
        self.a as f64 * Nucleotide::A.mass()
            + self.c as f64 * Nucleotide::C.mass()
            + self.g as f64 * Nucleotide::G.mass()
            + self.t as f64 * Nucleotide::T.mass()
            + self.junk as f64 * JUNK_MASS
    }

    /// Return the molar mass contributed by G and C bases.
    pub fn gc_mass(&self) -> f64 {
        self.g as f64 * Nucleotide::G.mass() + self.c as f64 * Nucleotide::C.mass()
    }

    /// Return the share of total molar mass contributed by G and C
    /// bases, between 0.0 and 1.0.
    ///
    /// Junk counts toward the denominator, so noisy reads report a
    /// lower share than their cleaned form would. An empty read
    /// reports 0.0.
    pub fn gc_mass_fraction(&self) -> f64 {
        if self.total() == 0 {
            return 0.0;
        }
        self.gc_mass() / self.mass()
    }

    /// Return the fraction of coding symbols that are G or C, between
    /// 0.0 and 1.0. Junk is excluded entirely. Reads with no coding
    /// symbols report 0.0.
    pub fn gc_content(&self) -> f64 {
        let coding = self.coding();
        if coding == 0 {
            return 0.0;
        }
        (self.g + self.c) as f64 / coding as f64
    }
}
