//! Mendelian-style genome combination for game entities.
//!
//! A [`Genome`] holds an active and an inactive allele per locus. A
//! [`CombinationEngine`] breeds two genomes into an endless stream of
//! offspring, optionally swapping in whole-genome override mutations
//! triggered by the parents' active alleles.

pub mod config;
pub mod engines;
pub mod error;
pub mod types;

pub use engines::combination::{
    AllelePair, CombinationEngine, Genome, MutationRegistry, MutationRule, Offspring,
};
pub use error::{GeneticsError, Result};
pub use types::{Allele, Locus, Parent};
