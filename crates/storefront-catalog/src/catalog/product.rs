//! Product types.

use crate::catalog::ColorKey;
use crate::ids::{CollectionId, ProductId};
use crate::price::Price;
use serde::{Deserialize, Serialize};

/// A color a product is offered in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductColor {
    /// Display label.
    pub name: String,
    /// Canonical color identity.
    pub hex: ColorKey,
}

impl ProductColor {
    /// Create a product color.
    pub fn new(name: impl Into<String>, hex: ColorKey) -> Self {
        Self {
            name: name.into(),
            hex,
        }
    }
}

/// A product in the catalog.
///
/// `sizes` and `colors` are always present; a catalog entry that omits them
/// deserializes to empty lists, meaning "no such dimension for this product".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Price in the catalog's currency.
    pub price: Price,
    /// Size labels in catalog order.
    #[serde(default)]
    pub sizes: Vec<String>,
    /// Offered colors.
    #[serde(default)]
    pub colors: Vec<ProductColor>,
    /// Availability flag.
    #[serde(default)]
    pub in_stock: bool,
    /// Long description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Display name of the owning collection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection: Option<String>,
    /// Slug of the owning collection.
    pub collection_slug: CollectionId,
    /// Image URLs, primary image first.
    #[serde(default)]
    pub images: Vec<String>,
}

impl Product {
    /// Create a product with no sizes, colors or images, in stock.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Price,
        collection_slug: impl Into<CollectionId>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            sizes: Vec::new(),
            colors: Vec::new(),
            in_stock: true,
            description: None,
            collection: None,
            collection_slug: collection_slug.into(),
            images: Vec::new(),
        }
    }

    /// Set the size labels.
    pub fn with_sizes<I, S>(mut self, sizes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sizes = sizes.into_iter().map(Into::into).collect();
        self
    }

    /// Add a color.
    pub fn with_color(mut self, name: impl Into<String>, hex: ColorKey) -> Self {
        self.colors.push(ProductColor::new(name, hex));
        self
    }

    /// Set the availability flag.
    pub fn with_in_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = in_stock;
        self
    }

    /// Check if the product is offered in a size.
    pub fn has_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }

    /// Check if the product is offered in a color.
    pub fn has_color(&self, key: &ColorKey) -> bool {
        self.colors.iter().any(|c| &c.hex == key)
    }
}
