//! Catalog error types.

use thiserror::Error;

/// Errors raised while loading or querying catalog data.
///
/// Facet computation and filtering are total and never produce one of these;
/// they come from the data source and from ingestion-time validation.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Collection not found.
    #[error("Collection not found: {0}")]
    CollectionNotFound(String),

    /// Color key is not a `#rgb` or `#rrggbb` hex string.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Price is negative, non-finite or unparsable.
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    /// Catalog data failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Failed to read catalog data.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse catalog data.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Parse(e.to_string())
    }
}

impl From<toml::de::Error> for CatalogError {
    fn from(e: toml::de::Error) -> Self {
        CatalogError::Parse(e.to_string())
    }
}

impl From<toml::ser::Error> for CatalogError {
    fn from(e: toml::ser::Error) -> Self {
        CatalogError::Serialization(e.to_string())
    }
}

/// Result alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
