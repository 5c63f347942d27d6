use crate::engines::combination::Genome;
use crate::error::GeneticsError;
use crate::types::{Allele, Locus};
use serde::{Deserialize, Serialize};

/// Declarative form of one `register_mutation` call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutationEntry {
    pub locus: Locus,
    /// Trigger pair; order does not matter
    pub alleles: [Allele; 2],
    pub chance: f32,
    pub override_genome: Genome,
}

impl MutationEntry {
    pub fn validate(&self, locus_count: usize) -> Result<(), GeneticsError> {
        if self.locus >= locus_count {
            return Err(GeneticsError::LocusOutOfRange {
                locus: self.locus,
                locus_count,
            });
        }
        if !(0.0..=1.0).contains(&self.chance) {
            return Err(GeneticsError::InvalidChance(self.chance));
        }
        if !self.override_genome.is_valid() || self.override_genome.locus_count != locus_count {
            return Err(GeneticsError::InvalidOverride {
                expected: locus_count,
                actual: self.override_genome.locus_count,
                valid: self.override_genome.is_valid(),
            });
        }
        Ok(())
    }
}
