//! Catalog model and product filtering for the storefront.
//!
//! This crate provides:
//!
//! - **Catalog**: Products, collections, canonical color keys, size ordering
//! - **Search**: Facet computation, filter application, name search
//! - **Source**: The read-only catalog data source and catalog files
//! - **View**: Collection page state composing the pieces above
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_catalog::prelude::*;
//!
//! let catalog = InMemoryCatalog::load("catalog.toml")?;
//! let mut view = CollectionView::load(&catalog, "abayas").await?;
//!
//! // Populate the filter panel once per product set
//! let facets = view.available_filters();
//! println!("{} - {}", facets.price.min, facets.price.max);
//!
//! // Narrow down and search
//! view.update_filters(|f| f.toggle_size("M").with_in_stock_only(true));
//! view.set_search("abaya");
//! println!("{} products", view.visible_count());
//! ```

pub mod error;
pub mod ids;
pub mod price;

pub mod catalog;
pub mod search;
pub mod source;
pub mod view;

pub use catalog::{ColorKey, Product};
pub use error::CatalogError;
pub use ids::*;
pub use price::{Currency, Price, PriceRange};
pub use search::{apply_filters, compute_available_filters, ActiveFilters, AvailableFilters};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::ids::*;
    pub use crate::price::{Currency, Price, PriceRange};

    // Catalog
    pub use crate::catalog::{Category, Collection, ColorKey, Product, ProductColor};

    // Search
    pub use crate::search::{
        apply_filters, compute_available_filters, search_by_name, ActiveFilters,
        AvailableFilters, ColorOption,
    };

    // Source
    pub use crate::source::{CatalogData, CatalogFormat, CatalogSource, InMemoryCatalog};

    // View
    pub use crate::view::CollectionView;
}
