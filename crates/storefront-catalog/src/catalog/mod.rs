//! Product catalog module.
//!
//! Contains types for products, collections, color keys and size labels.

mod collection;
mod color;
mod product;
mod size;

pub use collection::{Category, Collection};
pub use color::ColorKey;
pub use product::{Product, ProductColor};
pub use size::{canonical_size_index, compare_sizes, sort_sizes, CANONICAL_SIZES};
