pub mod traits;
pub mod engine;
pub mod mutations;
pub mod breeding;
pub mod manager;

pub use manager::{ConfigManager, GeneticsConfig, DEFAULT_CONFIG_PATH};
pub use engine::EngineConfig;
pub use mutations::MutationEntry;
pub use breeding::BreedingConfig;
pub use traits::ConfigSection;
