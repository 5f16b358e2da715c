//! Active filter state and filter application.

use crate::catalog::{ColorKey, Product};
use crate::price::{Price, PriceRange};
use crate::search::AvailableFilters;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// User-selected constraints on a product set.
///
/// Dimensions combine with AND; values inside `sizes` or `colors` combine
/// with OR. An empty list places no constraint on its dimension.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ActiveFilters {
    /// Inclusive lower price bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_min: Option<Price>,
    /// Inclusive upper price bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_max: Option<Price>,
    /// Size labels, match any.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sizes: Vec<String>,
    /// Color keys, match any.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub colors: Vec<ColorKey>,
    /// Exclude out-of-stock products.
    #[serde(default)]
    pub in_stock_only: bool,
}

impl ActiveFilters {
    /// No constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set both price bounds.
    pub fn with_price(mut self, min: Option<Price>, max: Option<Price>) -> Self {
        self.price_min = min;
        self.price_max = max;
        self
    }

    /// Set the lower price bound.
    pub fn with_price_min(mut self, min: Price) -> Self {
        self.price_min = Some(min);
        self
    }

    /// Set the upper price bound.
    pub fn with_price_max(mut self, max: Price) -> Self {
        self.price_max = Some(max);
        self
    }

    /// Replace the size selection.
    pub fn with_sizes<I, S>(mut self, sizes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sizes = sizes.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the color selection.
    pub fn with_colors(mut self, colors: impl IntoIterator<Item = ColorKey>) -> Self {
        self.colors = colors.into_iter().collect();
        self
    }

    /// Set the in-stock-only flag.
    pub fn with_in_stock_only(mut self, in_stock_only: bool) -> Self {
        self.in_stock_only = in_stock_only;
        self
    }

    /// Select the size if unselected, unselect it otherwise.
    pub fn toggle_size(mut self, size: &str) -> Self {
        if let Some(pos) = self.sizes.iter().position(|s| s == size) {
            self.sizes.remove(pos);
        } else {
            self.sizes.push(size.to_string());
        }
        self
    }

    /// Select the color if unselected, unselect it otherwise.
    pub fn toggle_color(mut self, color: &ColorKey) -> Self {
        if let Some(pos) = self.colors.iter().position(|c| c == color) {
            self.colors.remove(pos);
        } else {
            self.colors.push(color.clone());
        }
        self
    }

    /// Drop every constraint.
    pub fn cleared(self) -> Self {
        Self::default()
    }

    /// Check if no dimension is constrained.
    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    /// Number of constrained dimensions; a price bound on either side counts
    /// once.
    pub fn active_count(&self) -> usize {
        [
            self.price_min.is_some() || self.price_max.is_some(),
            !self.sizes.is_empty(),
            !self.colors.is_empty(),
            self.in_stock_only,
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    /// Price bounds to show on a slider: the selected bound where set, the
    /// available bound otherwise.
    pub fn effective_price_range(&self, available: &AvailableFilters) -> PriceRange {
        PriceRange::new(
            self.price_min.unwrap_or(available.price.min),
            self.price_max.unwrap_or(available.price.max),
        )
    }

    /// Check whether a product satisfies every active constraint.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(min) = self.price_min {
            if product.price < min {
                return false;
            }
        }

        if let Some(max) = self.price_max {
            if product.price > max {
                return false;
            }
        }

        if !self.sizes.is_empty() && !self.sizes.iter().any(|s| product.has_size(s)) {
            return false;
        }

        if !self.colors.is_empty() && !self.colors.iter().any(|c| product.has_color(c)) {
            return false;
        }

        if self.in_stock_only && !product.in_stock {
            return false;
        }

        true
    }
}

/// Return the products matching `active`, in input order.
pub fn apply_filters(products: &[Product], active: &ActiveFilters) -> Vec<Product> {
    let matched: Vec<Product> = products
        .iter()
        .filter(|product| active.matches(product))
        .cloned()
        .collect();

    debug!(
        input = products.len(),
        matched = matched.len(),
        constraints = active.active_count(),
        "applied filters"
    );

    matched
}
