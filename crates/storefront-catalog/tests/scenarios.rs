//! End-to-end scenarios over the sample catalog.

use std::path::PathBuf;
use std::sync::Arc;

use storefront_catalog::prelude::*;

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/catalog.toml")
}

fn key(hex: &str) -> ColorKey {
    ColorKey::parse(hex).unwrap()
}

fn ids(products: &[Product]) -> Vec<&str> {
    products.iter().map(|p| p.id.as_str()).collect()
}

fn two_abayas() -> Vec<Product> {
    vec![
        Product::new("a1", "Black Abaya", Price::from_major(485), "abayas")
            .with_sizes(["XS", "S", "M", "L", "XL"])
            .with_color("Black", key("#1a1a1a")),
        Product::new("a2", "Pink Abaya", Price::from_major(525), "abayas")
            .with_sizes(["S", "M", "L"])
            .with_color("Pink", key("#FFC0CB")),
    ]
}

#[test]
fn facets_for_two_abayas() {
    let filters = compute_available_filters(&two_abayas());
    assert_eq!(
        filters.price,
        PriceRange::new(Price::from_major(485), Price::from_major(525))
    );
    assert_eq!(filters.sizes, vec!["XS", "S", "M", "L", "XL"]);
    assert_eq!(
        filters.colors.iter().map(|c| c.value.clone()).collect::<Vec<_>>(),
        vec![key("#1a1a1a"), key("#FFC0CB")]
    );
    assert!(filters.has_stock);
}

#[test]
fn price_max_keeps_first_abaya() {
    let active = ActiveFilters::new().with_price_max(Price::from_major(500));
    assert_eq!(ids(&apply_filters(&two_abayas(), &active)), vec!["a1"]);
}

#[test]
fn color_filter_keeps_second_abaya() {
    let active = ActiveFilters::new().with_colors([key("#FFC0CB")]);
    assert_eq!(ids(&apply_filters(&two_abayas(), &active)), vec!["a2"]);
}

#[test]
fn in_stock_only_drops_sold_out() {
    let mut products = two_abayas();
    products.insert(
        1,
        Product::new("a3", "Maroon Abaya", Price::from_major(495), "abayas").with_in_stock(false),
    );
    let active = ActiveFilters::new().with_in_stock_only(true);
    assert_eq!(ids(&apply_filters(&products, &active)), vec!["a1", "a2"]);
}

#[test]
fn empty_collection_facets() {
    let filters = compute_available_filters(&[]);
    assert_eq!(filters.price.min, Price::ZERO);
    assert_eq!(filters.price.max, Price::from_major(1000));
    assert!(filters.sizes.is_empty());
    assert!(filters.colors.is_empty());
    assert!(!filters.has_stock);
}

#[tokio::test]
async fn abayas_collection_from_catalog_file() {
    let catalog = InMemoryCatalog::load(fixture()).unwrap();
    let view = CollectionView::load(&catalog, "abayas").await.unwrap();

    assert_eq!(view.collection().map(|c| c.name.as_str()), Some("Abayas"));
    let filters = view.available_filters();
    assert_eq!(filters.price.min, Price::from_major(485));
    assert_eq!(filters.price.max, Price::from_major(545));
    assert_eq!(filters.sizes, vec!["XS", "S", "M", "L", "XL"]);
    let labels: Vec<&str> = filters.colors.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(labels, vec!["Black", "Pink", "Maroon", "White"]);
    assert_eq!(view.visible_count(), 4);
}

#[tokio::test]
async fn accessories_dedupe_colors_across_spellings() {
    let catalog = InMemoryCatalog::load(fixture()).unwrap();
    let mut view = CollectionView::load(&catalog, "accessories").await.unwrap();

    let filters = view.available_filters().clone();
    assert_eq!(
        filters.price,
        PriceRange::new(Price::from_cents(4550), Price::from_major(60))
    );
    assert_eq!(filters.sizes, vec!["One Size"]);
    assert_eq!(filters.colors.len(), 2);
    assert_eq!(filters.color_label(&key("#ffffff")), Some("Ivory"));

    view.update_filters(|f| f.toggle_color(&key("#FFF")));
    assert_eq!(ids(&view.visible_products()), vec!["s1", "s2"]);

    view.update_filters(|f| f.with_in_stock_only(true));
    assert_eq!(ids(&view.visible_products()), vec!["s2"]);
}

#[tokio::test]
async fn filter_then_search_count() {
    let catalog = InMemoryCatalog::load(fixture()).unwrap();
    let mut view = CollectionView::load(&catalog, "abayas").await.unwrap();

    view.update_filters(|f| f.toggle_size("XL"));
    assert_eq!(ids(&view.visible_products()), vec!["a1", "a3"]);

    view.set_search("MAROON");
    assert_eq!(view.visible_count(), 1);

    view.set_search("white");
    assert_eq!(view.visible_count(), 0);
}

#[tokio::test]
async fn source_is_shareable_across_tasks() {
    let catalog: Arc<dyn CatalogSource> = Arc::new(InMemoryCatalog::load(fixture()).unwrap());

    let handles: Vec<_> = ["abayas", "accessories", "shoes"]
        .into_iter()
        .map(|slug| {
            let catalog = Arc::clone(&catalog);
            tokio::spawn(async move {
                let view = CollectionView::load(catalog.as_ref(), slug).await?;
                Ok::<_, CatalogError>((view.is_found(), view.visible_count()))
            })
        })
        .collect();

    let mut results = Vec::new();
    for handle in handles {
        results.push(handle.await.unwrap().unwrap());
    }
    assert_eq!(results, vec![(true, 4), (true, 2), (false, 0)]);
}
