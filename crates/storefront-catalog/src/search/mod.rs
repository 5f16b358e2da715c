//! Search module.
//!
//! Facet computation, filter application and name search over a product set.

mod facets;
mod filter;
mod text;

pub use facets::{compute_available_filters, AvailableFilters, ColorOption};
pub use filter::{apply_filters, ActiveFilters};
pub use text::{matches_query, search_by_name};
