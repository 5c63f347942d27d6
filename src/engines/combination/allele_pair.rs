use crate::types::Allele;
use serde::{Deserialize, Serialize};

/// Unordered pair of alleles used as a mutation trigger key.
///
/// The constructor stores the smaller allele first, so `(1, 2)` and `(2, 1)`
/// compare and hash the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AllelePair {
    low: Allele,
    high: Allele,
}

impl AllelePair {
    pub fn new(a: Allele, b: Allele) -> Self {
        Self {
            low: a.min(b),
            high: a.max(b),
        }
    }

    pub fn low(&self) -> Allele {
        self.low
    }

    pub fn high(&self) -> Allele {
        self.high
    }

    pub fn contains(&self, allele: Allele) -> bool {
        self.low == allele || self.high == allele
    }
}

impl From<(Allele, Allele)> for AllelePair {
    fn from((a, b): (Allele, Allele)) -> Self {
        Self::new(a, b)
    }
}
