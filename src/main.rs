use anyhow::Context;
use mendel::config::{ConfigManager, DEFAULT_CONFIG_PATH};
use mendel::CombinationEngine;

fn main() -> anyhow::Result<()> {
    // Configure logging via RUST_LOG
    env_logger::init();

    let path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    let manager = ConfigManager::new();
    manager
        .load_from_file(&path)
        .with_context(|| format!("loading {}", path))?;
    let config = manager.get()?;

    let breeding = config
        .breeding
        .clone()
        .context("config has no [breeding] section")?;

    let mut engine = CombinationEngine::from_config(&config)?;
    let offspring = engine.combine(&breeding.parent_a, &breeding.parent_b)?;

    // One JSON genome per line
    for child in offspring.take(breeding.offspring_count) {
        println!("{}", serde_json::to_string(&child)?);
    }

    Ok(())
}
