use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a genetic variant at a locus
pub type Allele = i32;

/// Index of a position in a genome
pub type Locus = usize;

/// Role of a genome in a combination request.
///
/// Offspring take their active alleles from parent A and their inactive
/// alleles from parent B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Parent {
    A,
    B,
}

impl fmt::Display for Parent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parent::A => write!(f, "parent A"),
            Parent::B => write!(f, "parent B"),
        }
    }
}
