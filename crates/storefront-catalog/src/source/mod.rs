//! Catalog data sources.
//!
//! The view layer never reaches for a global product list; it is handed a
//! [`CatalogSource`] by whoever assembles the application.

mod data;
mod memory;

pub use data::{CatalogData, CatalogFormat};
pub use memory::InMemoryCatalog;

use crate::catalog::{Category, Collection, Product};
use crate::error::Result;
use crate::ids::CollectionId;
use async_trait::async_trait;

/// Read-only lookup of collections and their products.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Products linked to a collection, in catalog order. An unknown slug
    /// yields an empty list.
    async fn products_by_collection(&self, slug: &CollectionId) -> Result<Vec<Product>>;

    /// Collection metadata, if the slug exists.
    async fn collection(&self, slug: &CollectionId) -> Result<Option<Collection>>;

    /// All collections, in catalog order.
    async fn collections(&self) -> Result<Vec<Collection>>;

    /// Every product in the catalog.
    async fn all_products(&self) -> Result<Vec<Product>>;

    /// Navigation entries, one per collection.
    async fn categories(&self) -> Result<Vec<Category>> {
        Ok(self
            .collections()
            .await?
            .iter()
            .map(Collection::category)
            .collect())
    }
}
