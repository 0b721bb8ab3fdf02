//! Seed loading from disk.

use maester_core::config::DatasetConfig;
use maester_graph::{Dataset, EntityStore};

use crate::error::{QueryError, Result};

/// Read both seed files concurrently and build the query context.
pub async fn load_dataset(config: &DatasetConfig) -> Result<Dataset> {
    let (characters, houses) = tokio::try_join!(
        read_seed(&config.characters),
        read_seed(&config.houses)
    )?;

    let store = EntityStore::from_json(&characters, &houses)?;
    tracing::info!(
        characters_path = %config.characters,
        houses_path = %config.houses,
        "Seed data parsed"
    );
    Ok(Dataset::new(store))
}

async fn read_seed(path: &str) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| QueryError::SeedFile {
            path: path.to_string(),
            source,
        })
}
