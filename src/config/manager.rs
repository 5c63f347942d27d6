use super::{
    breeding::BreedingConfig,
    engine::EngineConfig,
    mutations::MutationEntry,
    traits::ConfigSection,
};
use crate::error::GeneticsError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Sample configuration used when no path is given
pub const DEFAULT_CONFIG_PATH: &str = "demos/mendel.toml";

/// Prefix for environment overrides, e.g. `MENDEL__ENGINE__SEED=42`
const ENV_PREFIX: &str = "MENDEL";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneticsConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub mutations: Vec<MutationEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breeding: Option<BreedingConfig>,
}

impl GeneticsConfig {
    pub fn validate(&self) -> Result<(), GeneticsError> {
        self.engine.validate()?;
        for entry in &self.mutations {
            entry.validate(self.engine.locus_count)?;
        }
        if let Some(breeding) = &self.breeding {
            breeding.validate()?;
        }
        Ok(())
    }
}

pub struct ConfigManager {
    config: Arc<RwLock<GeneticsConfig>>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(GeneticsConfig::default())),
        }
    }

    /// Loads a TOML or JSON file (picked by extension) with environment
    /// overrides layered on top, then validates the result.
    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), GeneticsError> {
        let config: GeneticsConfig = ::config::Config::builder()
            .add_source(::config::File::from(path.as_ref()))
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;

        *self.config.write().map_err(|_| poisoned())? = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), GeneticsError> {
        let config = self.config.read().map_err(|_| poisoned())?;
        let toml_str = toml::to_string_pretty(&*config)
            .map_err(|e| GeneticsError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)?;

        Ok(())
    }

    pub fn get(&self) -> Result<GeneticsConfig, GeneticsError> {
        Ok(self.config.read().map_err(|_| poisoned())?.clone())
    }

    /// Applies `f` and keeps the change only if the result still validates.
    pub fn update<F>(&self, f: F) -> Result<(), GeneticsError>
    where
        F: FnOnce(&mut GeneticsConfig),
    {
        let mut config = self.config.write().map_err(|_| poisoned())?;
        let mut candidate = config.clone();
        f(&mut candidate);
        candidate.validate()?;
        *config = candidate;
        Ok(())
    }
}

fn poisoned() -> GeneticsError {
    GeneticsError::Configuration("Config lock poisoned".to_string())
}
