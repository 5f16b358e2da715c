//! Catalog files.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{Collection, Product};
use crate::error::{CatalogError, Result};

/// On-disk encoding of a catalog file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Toml,
    Json,
}

impl CatalogFormat {
    /// Pick a format from the file extension; anything but `.json` is TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => CatalogFormat::Json,
            _ => CatalogFormat::Toml,
        }
    }
}

/// Collections and products as stored in a catalog file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CatalogData {
    #[serde(default)]
    pub collections: Vec<Collection>,
    #[serde(default)]
    pub products: Vec<Product>,
}

impl CatalogData {
    /// Build from in-memory parts and validate.
    pub fn new(collections: Vec<Collection>, products: Vec<Product>) -> Result<Self> {
        let data = Self {
            collections,
            products,
        };
        data.validate()?;
        Ok(data)
    }

    /// Load and validate a catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let data = Self::parse(&content, CatalogFormat::from_path(path))?;
        debug!(
            path = %path.display(),
            collections = data.collections.len(),
            products = data.products.len(),
            "loaded catalog"
        );
        Ok(data)
    }

    /// Parse and validate catalog text.
    pub fn parse(content: &str, format: CatalogFormat) -> Result<Self> {
        let data: CatalogData = match format {
            CatalogFormat::Json => serde_json::from_str(content)?,
            CatalogFormat::Toml => toml::from_str(content)?,
        };
        data.validate()?;
        Ok(data)
    }

    /// Encode in the given format.
    pub fn to_string(&self, format: CatalogFormat) -> Result<String> {
        match format {
            CatalogFormat::Json => serde_json::to_string_pretty(self)
                .map_err(|e| CatalogError::Serialization(e.to_string())),
            CatalogFormat::Toml => Ok(toml::to_string_pretty(self)?),
        }
    }

    /// Check id uniqueness and that every product links to a known
    /// collection.
    pub fn validate(&self) -> Result<()> {
        let mut slugs = HashSet::new();
        for collection in &self.collections {
            if !slugs.insert(&collection.slug) {
                return Err(CatalogError::Validation(format!(
                    "duplicate collection slug: {}",
                    collection.slug
                )));
            }
        }

        let mut ids = HashSet::new();
        for product in &self.products {
            if !ids.insert(&product.id) {
                return Err(CatalogError::Validation(format!(
                    "duplicate product id: {}",
                    product.id
                )));
            }
            if !slugs.contains(&product.collection_slug) {
                return Err(CatalogError::Validation(format!(
                    "product {} references unknown collection: {}",
                    product.id, product.collection_slug
                )));
            }
        }

        Ok(())
    }
}
