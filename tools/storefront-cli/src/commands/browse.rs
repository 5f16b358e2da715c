//! Filter and search a collection.

use anyhow::{bail, Context as _, Result};
use serde::Serialize;
use storefront_catalog::prelude::*;

use super::BrowseArgs;
use crate::context::Context;
use crate::output::{column_width, stock_badge};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BrowseResult<'a> {
    collection: &'a str,
    active_filters: &'a ActiveFilters,
    search: &'a str,
    count: usize,
    products: &'a [Product],
}

/// Run the browse command.
pub async fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    let active = active_filters(&args, ctx.config.display.show_out_of_stock)?;

    let catalog = ctx.load_catalog()?;
    let mut view = CollectionView::load(&catalog, args.slug.as_str()).await?;
    if !view.is_found() {
        bail!(CatalogError::CollectionNotFound(args.slug));
    }

    view.set_filters(active);
    if let Some(query) = args.search {
        view.set_search(query);
    }

    let products = view.visible_products();

    if ctx.output.is_json() {
        ctx.output.json(&BrowseResult {
            collection: view.slug().as_str(),
            active_filters: view.active_filters(),
            search: view.search_query(),
            count: products.len(),
            products: &products,
        });
        return Ok(());
    }

    let title = view.collection().map_or(args.slug.as_str(), |c| c.name.as_str());
    ctx.output.header(title);

    let filters = view.active_filters();
    if !filters.is_empty() {
        ctx.output
            .kv("active filters", &filters.active_count().to_string());
    }
    if !view.search_query().is_empty() {
        ctx.output.kv("search", view.search_query());
    }

    if products.is_empty() {
        ctx.output.info("No products match.");
        return Ok(());
    }

    let currency = ctx.config.display.currency;
    let rows: Vec<[String; 4]> = products
        .iter()
        .map(|p| {
            [
                p.id.to_string(),
                p.name.clone(),
                p.price.display(currency),
                p.sizes.join(","),
            ]
        })
        .collect();

    let headers = ["Id", "Name", "Price", "Sizes"];
    let mut widths = [0; 5];
    for (i, header) in headers.iter().enumerate() {
        widths[i] = column_width(header, rows.iter().map(|r| r[i].as_str()));
    }

    ctx.output
        .table_row(&["Id", "Name", "Price", "Sizes", "Stock"], &widths);
    for (product, row) in products.iter().zip(&rows) {
        let stock = stock_badge(product.in_stock);
        ctx.output.table_row(
            &[&row[0], &row[1], &row[2], &row[3], &stock],
            &widths,
        );
    }

    ctx.output.success(&format!(
        "{} of {} products",
        products.len(),
        view.products().len()
    ));

    Ok(())
}

/// Build the active filters from command line flags.
///
/// Colors go through the same normalization as catalog data, so `#FFF`
/// selects products stored as `#ffffff`.
fn active_filters(args: &BrowseArgs, show_out_of_stock: bool) -> Result<ActiveFilters> {
    let colors = args
        .colors
        .iter()
        .map(|hex| ColorKey::parse(hex))
        .collect::<Result<Vec<_>, _>>()
        .context("Invalid --color")?;

    let min = args
        .min_price
        .as_deref()
        .map(Price::parse)
        .transpose()
        .context("Invalid --min-price")?;
    let max = args
        .max_price
        .as_deref()
        .map(Price::parse)
        .transpose()
        .context("Invalid --max-price")?;

    Ok(ActiveFilters::new()
        .with_price(min, max)
        .with_sizes(args.sizes.iter().cloned())
        .with_colors(colors)
        .with_in_stock_only(args.in_stock || !show_out_of_stock))
}
