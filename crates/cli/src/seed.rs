//! Seed catalogs: JSON arrays of categories with loose product records.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use storefront_catalog::{CatalogRegistry, Category};
use storefront_core::DomainError;

/// Seed shipped with the binary.
pub const DEFAULT_SEED: &str = include_str!("../data/catalog.json");

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed seed catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("category '{category}', product #{index}: {source}")]
    Record {
        category: String,
        index: usize,
        #[source]
        source: DomainError,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategorySeed {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Kept untyped; each record is checked when added.
    #[serde(default)]
    pub products: Vec<Value>,
}

pub fn parse(json: &str) -> Result<Vec<CategorySeed>, SeedError> {
    Ok(serde_json::from_str(json)?)
}

/// Read the seed at `path`, or the embedded seed when `None`.
pub fn load(path: Option<&Path>) -> Result<Vec<CategorySeed>, SeedError> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            parse(&json)
        }
        None => parse(DEFAULT_SEED),
    }
}

/// Create every seeded category through `registry`. Stops at the first
/// record that cannot be added.
pub fn build(
    registry: &mut CatalogRegistry,
    seeds: &[CategorySeed],
) -> Result<Vec<Category>, SeedError> {
    let mut categories = Vec::with_capacity(seeds.len());
    for seed in seeds {
        let mut category = registry.new_category(&seed.name, &seed.description);
        for (index, record) in seed.products.iter().enumerate() {
            registry
                .add_record(&mut category, record)
                .map_err(|source| SeedError::Record {
                    category: seed.name.clone(),
                    index,
                    source,
                })?;
        }
        categories.push(category);
    }
    Ok(categories)
}
