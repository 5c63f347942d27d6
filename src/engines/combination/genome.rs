use crate::types::{Allele, Locus};
use serde::{Deserialize, Serialize};

/// Genotype record carried by a game entity.
///
/// Each locus holds an active (expressed) and an inactive (repressed) allele.
/// The active alleles determine observable traits; the inactive ones are carried
/// along and still take part in combination.
///
/// A genome is only usable once [`Genome::is_valid`] holds. The empty
/// [`Default`] shape exists so the host can deserialize into it.
///
/// # Example
///
/// ```
/// use mendel::Genome;
///
/// let genome = Genome::from_alleles(vec![1, 4], vec![2, 3]);
/// assert!(genome.is_valid());
/// assert_eq!(genome.genotype(), &[1, 4]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Genome {
    /// Number of loci in this genome
    pub locus_count: usize,
    /// Expressed alleles, one per locus
    pub active_alleles: Vec<Allele>,
    /// Repressed alleles, one per locus
    pub inactive_alleles: Vec<Allele>,
}

impl Genome {
    /// Sized shape with no alleles yet; fill it with [`Genome::push_locus`].
    pub fn with_locus_count(locus_count: usize) -> Self {
        Self {
            locus_count,
            active_alleles: Vec::with_capacity(locus_count),
            inactive_alleles: Vec::with_capacity(locus_count),
        }
    }

    /// Builds a genome whose locus count is the number of active alleles.
    pub fn from_alleles(active_alleles: Vec<Allele>, inactive_alleles: Vec<Allele>) -> Self {
        Self {
            locus_count: active_alleles.len(),
            active_alleles,
            inactive_alleles,
        }
    }

    pub fn push_locus(&mut self, active: Allele, inactive: Allele) {
        self.active_alleles.push(active);
        self.inactive_alleles.push(inactive);
    }

    /// True iff both allele sequences hold exactly `locus_count` entries.
    pub fn is_valid(&self) -> bool {
        self.active_alleles.len() == self.inactive_alleles.len()
            && self.active_alleles.len() == self.locus_count
    }

    /// The expressed alleles across all loci
    pub fn genotype(&self) -> &[Allele] {
        &self.active_alleles
    }

    /// `(active, inactive)` at `locus`, if both are present.
    pub fn locus(&self, locus: Locus) -> Option<(Allele, Allele)> {
        let active = *self.active_alleles.get(locus)?;
        let inactive = *self.inactive_alleles.get(locus)?;
        Some((active, inactive))
    }

    /// Replaces this record's contents with a copy of `other`.
    pub fn copy_from(&mut self, other: &Genome) {
        self.locus_count = other.locus_count;
        self.active_alleles.clone_from(&other.active_alleles);
        self.inactive_alleles.clone_from(&other.inactive_alleles);
    }
}
