//! Collection types for product organization.

use crate::ids::CollectionId;
use serde::{Deserialize, Serialize};

/// A named collection of products (e.g. "Abayas").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    /// Collection identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// URL-friendly slug, the key products link to.
    pub slug: CollectionId,
    /// Collection description.
    #[serde(default)]
    pub description: String,
    /// Hero image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Number of products in this collection.
    #[serde(default)]
    pub product_count: usize,
}

impl Collection {
    /// Create a new collection.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        slug: impl Into<CollectionId>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slug: slug.into(),
            description: String::new(),
            image: None,
            product_count: 0,
        }
    }

    /// Navigation summary for this collection.
    pub fn category(&self) -> Category {
        Category {
            name: self.name.clone(),
            slug: self.slug.clone(),
        }
    }
}

/// Lightweight navigation entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Display name.
    pub name: String,
    /// Collection the entry links to.
    pub slug: CollectionId,
}
