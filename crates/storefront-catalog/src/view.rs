//! Collection page state.
//!
//! Ties the pieces together the way a collection page uses them: facets are
//! computed once per product set, filters run on every state change, and the
//! name search narrows the filtered result.

use tracing::{info, warn};

use crate::catalog::{Collection, Product};
use crate::error::Result;
use crate::ids::CollectionId;
use crate::search::{
    apply_filters, compute_available_filters, search_by_name, ActiveFilters, AvailableFilters,
};
use crate::source::CatalogSource;

/// State behind a single collection page.
#[derive(Debug, Clone)]
pub struct CollectionView {
    slug: CollectionId,
    collection: Option<Collection>,
    products: Vec<Product>,
    available: AvailableFilters,
    active: ActiveFilters,
    search: String,
}

impl CollectionView {
    /// Fetch a collection and its products, then compute its facets.
    ///
    /// Metadata and products are requested concurrently. A missing collection
    /// is not an error: the view reports `is_found() == false`.
    pub async fn load(source: &dyn CatalogSource, slug: impl Into<CollectionId>) -> Result<Self> {
        let slug = slug.into();
        let (collection, products) = futures::join!(
            source.collection(&slug),
            source.products_by_collection(&slug)
        );
        let collection = collection?;
        let products = products?;

        if collection.is_none() {
            warn!(collection = %slug, "collection not found");
        } else {
            info!(collection = %slug, products = products.len(), "loaded collection");
        }

        Ok(Self::from_parts(slug, collection, products))
    }

    /// Build a view from data the caller already holds.
    pub fn from_parts(
        slug: CollectionId,
        collection: Option<Collection>,
        products: Vec<Product>,
    ) -> Self {
        let available = compute_available_filters(&products);
        Self {
            slug,
            collection,
            products,
            available,
            active: ActiveFilters::default(),
            search: String::new(),
        }
    }

    /// Load a different collection, resetting filters and search.
    ///
    /// State is reset before the fetch. If the fetch fails the view is left
    /// empty for the new slug, never showing the previous collection.
    pub async fn switch_collection(
        &mut self,
        source: &dyn CatalogSource,
        slug: impl Into<CollectionId>,
    ) -> Result<()> {
        let slug = slug.into();
        *self = Self::from_parts(slug.clone(), None, Vec::new());
        *self = Self::load(source, slug).await?;
        Ok(())
    }

    /// Slug this view was loaded for.
    pub fn slug(&self) -> &CollectionId {
        &self.slug
    }

    /// Collection metadata, if the collection exists.
    pub fn collection(&self) -> Option<&Collection> {
        self.collection.as_ref()
    }

    /// Check whether the collection exists.
    pub fn is_found(&self) -> bool {
        self.collection.is_some()
    }

    /// Every product in the collection, unfiltered.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Filter dimensions for this collection.
    pub fn available_filters(&self) -> &AvailableFilters {
        &self.available
    }

    /// Current filter selection.
    pub fn active_filters(&self) -> &ActiveFilters {
        &self.active
    }

    /// Current search text.
    pub fn search_query(&self) -> &str {
        &self.search
    }

    /// Replace the filter selection.
    pub fn set_filters(&mut self, active: ActiveFilters) {
        self.active = active;
    }

    /// Update the filter selection in place.
    pub fn update_filters(&mut self, f: impl FnOnce(ActiveFilters) -> ActiveFilters) {
        let current = std::mem::take(&mut self.active);
        self.active = f(current);
    }

    /// Replace the search text.
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    /// Drop filters and search.
    pub fn clear(&mut self) {
        self.active = ActiveFilters::default();
        self.search.clear();
    }

    /// Products to display: filters first, then the name search.
    pub fn visible_products(&self) -> Vec<Product> {
        search_by_name(apply_filters(&self.products, &self.active), &self.search)
    }

    /// Number of products to display.
    pub fn visible_count(&self) -> usize {
        self.visible_products().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ColorKey;
    use crate::error::CatalogError;
    use crate::price::Price;
    use crate::source::{CatalogData, InMemoryCatalog};
    use async_trait::async_trait;

    struct Unavailable;

    #[async_trait]
    impl CatalogSource for Unavailable {
        async fn products_by_collection(&self, _slug: &CollectionId) -> Result<Vec<Product>> {
            Err(CatalogError::Validation("catalog offline".to_string()))
        }

        async fn collection(&self, _slug: &CollectionId) -> Result<Option<Collection>> {
            Err(CatalogError::Validation("catalog offline".to_string()))
        }

        async fn collections(&self) -> Result<Vec<Collection>> {
            Ok(Vec::new())
        }

        async fn all_products(&self) -> Result<Vec<Product>> {
            Ok(Vec::new())
        }
    }

    fn source() -> InMemoryCatalog {
        let black = ColorKey::parse("#1a1a1a").unwrap();
        let pink = ColorKey::parse("#FFC0CB").unwrap();
        let data = CatalogData::new(
            vec![
                Collection::new("1", "Abayas", "abayas"),
                Collection::new("2", "Accessories", "accessories"),
            ],
            vec![
                Product::new("a1", "Black Abaya", Price::from_major(485), "abayas")
                    .with_sizes(["XS", "S", "M", "L", "XL"])
                    .with_color("Black", black),
                Product::new("a2", "Pink Abaya", Price::from_major(525), "abayas")
                    .with_sizes(["S", "M", "L"])
                    .with_color("Pink", pink),
                Product::new("s1", "Silk Scarf", Price::from_major(60), "accessories"),
            ],
        )
        .unwrap();
        InMemoryCatalog::new(data)
    }

    #[tokio::test]
    async fn test_load_computes_facets() {
        let view = CollectionView::load(&source(), "abayas").await.unwrap();
        assert!(view.is_found());
        assert_eq!(view.products().len(), 2);
        assert_eq!(view.available_filters().price.min, Price::from_major(485));
        assert_eq!(view.visible_count(), 2);
    }

    #[tokio::test]
    async fn test_missing_collection() {
        let view = CollectionView::load(&source(), "shoes").await.unwrap();
        assert!(!view.is_found());
        assert_eq!(view.visible_count(), 0);
        assert_eq!(view.available_filters(), &AvailableFilters::default());
    }

    #[tokio::test]
    async fn test_search_runs_after_filters() {
        let mut view = CollectionView::load(&source(), "abayas").await.unwrap();
        view.set_filters(ActiveFilters::new().with_price_max(Price::from_major(500)));
        view.set_search("pink");
        assert_eq!(view.visible_count(), 0);

        view.set_search("black");
        let visible = view.visible_products();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id.as_str(), "a1");
    }

    #[tokio::test]
    async fn test_update_filters_and_clear() {
        let mut view = CollectionView::load(&source(), "abayas").await.unwrap();
        view.update_filters(|f| f.toggle_size("XS"));
        assert_eq!(view.visible_count(), 1);
        view.set_search("abaya");
        view.clear();
        assert!(view.active_filters().is_empty());
        assert_eq!(view.search_query(), "");
        assert_eq!(view.visible_count(), 2);
    }

    #[tokio::test]
    async fn test_switch_collection_resets_state() {
        let catalog = source();
        let mut view = CollectionView::load(&catalog, "abayas").await.unwrap();
        view.update_filters(|f| f.with_in_stock_only(true));
        view.set_search("abaya");

        view.switch_collection(&catalog, "accessories").await.unwrap();
        assert_eq!(view.slug().as_str(), "accessories");
        assert!(view.active_filters().is_empty());
        assert_eq!(view.search_query(), "");
        assert!(view.available_filters().sizes.is_empty());
        assert_eq!(view.visible_count(), 1);
    }

    #[tokio::test]
    async fn test_failed_switch_drops_previous_state() {
        let mut view = CollectionView::load(&source(), "abayas").await.unwrap();
        view.update_filters(|f| f.toggle_size("M"));
        view.set_search("pink");

        assert!(view.switch_collection(&Unavailable, "accessories").await.is_err());
        assert_eq!(view.slug().as_str(), "accessories");
        assert!(!view.is_found());
        assert!(view.products().is_empty());
        assert!(view.active_filters().is_empty());
        assert_eq!(view.search_query(), "");
        assert_eq!(view.available_filters(), &AvailableFilters::default());
    }
}
