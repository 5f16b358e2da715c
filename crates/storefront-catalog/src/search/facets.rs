//! Facet computation.

use crate::catalog::{sort_sizes, ColorKey, Product};
use crate::price::PriceRange;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// A selectable color facet value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColorOption {
    /// Display label (first-seen name for this key).
    pub label: String,
    /// Color key matched by the filter.
    pub value: ColorKey,
}

/// Filter dimensions offered for a product set.
///
/// Always recomputed from scratch when the product set changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AvailableFilters {
    /// Lowest and highest price in the set.
    pub price: PriceRange,
    /// Distinct sizes in display order.
    pub sizes: Vec<String>,
    /// Distinct colors in first-seen order.
    pub colors: Vec<ColorOption>,
    /// Whether any product is in stock.
    pub has_stock: bool,
}

impl AvailableFilters {
    /// Look up the display label for a color key.
    pub fn color_label(&self, key: &ColorKey) -> Option<&str> {
        self.colors
            .iter()
            .find(|c| &c.value == key)
            .map(|c| c.label.as_str())
    }
}

/// Derive the available filter dimensions from a product set.
///
/// Total and deterministic for a given input order. An empty set yields
/// [`AvailableFilters::default`]: price range `0..=1000`, no sizes, no colors,
/// no stock.
pub fn compute_available_filters(products: &[Product]) -> AvailableFilters {
    let price = price_range(products);

    let mut seen_sizes = HashSet::new();
    let mut sizes = Vec::new();
    for size in products.iter().flat_map(|p| &p.sizes) {
        if seen_sizes.insert(size) {
            sizes.push(size.clone());
        }
    }
    sort_sizes(&mut sizes);

    let mut seen_colors = HashSet::new();
    let mut colors = Vec::new();
    for color in products.iter().flat_map(|p| &p.colors) {
        if seen_colors.insert(&color.hex) {
            colors.push(ColorOption {
                label: color.name.clone(),
                value: color.hex.clone(),
            });
        }
    }

    let has_stock = products.iter().any(|p| p.in_stock);

    debug!(
        products = products.len(),
        sizes = sizes.len(),
        colors = colors.len(),
        has_stock,
        "computed available filters"
    );

    AvailableFilters {
        price,
        sizes,
        colors,
        has_stock,
    }
}

fn price_range(products: &[Product]) -> PriceRange {
    let prices = products.iter().map(|p| p.price);
    match (prices.clone().min(), prices.max()) {
        (Some(min), Some(max)) => PriceRange::new(min, max),
        _ => PriceRange::DEFAULT,
    }
}
