use super::traits::ConfigSection;
use crate::error::GeneticsError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub locus_count: usize,
    /// Seed for the engine's generator; entropy-seeded when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            locus_count: 8,
            seed: None,
        }
    }
}

impl ConfigSection for EngineConfig {
    fn section_name() -> &'static str {
        "engine"
    }

    fn validate(&self) -> Result<(), GeneticsError> {
        if self.locus_count == 0 {
            return Err(GeneticsError::Configuration(format!(
                "[{}] locus_count must be at least 1",
                Self::section_name()
            )));
        }
        Ok(())
    }
}
