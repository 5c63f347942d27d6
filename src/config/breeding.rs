use super::traits::ConfigSection;
use crate::engines::combination::Genome;
use crate::error::GeneticsError;
use serde::{Deserialize, Serialize};

/// Parents and batch size for a one-off breeding run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreedingConfig {
    pub parent_a: Genome,
    pub parent_b: Genome,
    pub offspring_count: usize,
}

impl Default for BreedingConfig {
    fn default() -> Self {
        Self {
            parent_a: Genome::default(),
            parent_b: Genome::default(),
            offspring_count: 10,
        }
    }
}

impl ConfigSection for BreedingConfig {
    fn section_name() -> &'static str {
        "breeding"
    }

    // Parent shapes are checked by `combine` itself
    fn validate(&self) -> Result<(), GeneticsError> {
        if self.offspring_count == 0 {
            return Err(GeneticsError::Configuration(format!(
                "[{}] offspring_count must be at least 1",
                Self::section_name()
            )));
        }
        Ok(())
    }
}
