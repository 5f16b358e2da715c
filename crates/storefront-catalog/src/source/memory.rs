//! In-memory catalog source.

use async_trait::async_trait;
use tracing::debug;

use crate::catalog::{Collection, Product};
use crate::error::Result;
use crate::ids::CollectionId;
use crate::source::{CatalogData, CatalogSource};

/// Catalog held entirely in memory.
///
/// Cheap to share behind an `Arc`; every lookup clones out of the owned
/// data, so callers never hold borrows across awaits.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    data: CatalogData,
}

impl InMemoryCatalog {
    /// Wrap validated catalog data.
    pub fn new(data: CatalogData) -> Self {
        Self { data }
    }

    /// Load a catalog file.
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        Ok(Self::new(CatalogData::load(path)?))
    }

    fn find_collection(&self, slug: &CollectionId) -> Option<&Collection> {
        self.data.collections.iter().find(|c| &c.slug == slug)
    }
}

#[async_trait]
impl CatalogSource for InMemoryCatalog {
    async fn products_by_collection(&self, slug: &CollectionId) -> Result<Vec<Product>> {
        let products: Vec<Product> = self
            .data
            .products
            .iter()
            .filter(|p| &p.collection_slug == slug)
            .cloned()
            .collect();
        debug!(collection = %slug, products = products.len(), "products by collection");
        Ok(products)
    }

    async fn collection(&self, slug: &CollectionId) -> Result<Option<Collection>> {
        Ok(self.find_collection(slug).cloned())
    }

    async fn collections(&self) -> Result<Vec<Collection>> {
        Ok(self.data.collections.clone())
    }

    async fn all_products(&self) -> Result<Vec<Product>> {
        Ok(self.data.products.clone())
    }
}
