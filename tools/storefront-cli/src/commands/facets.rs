//! Show the filters available for a collection.

use anyhow::{bail, Result};
use storefront_catalog::prelude::*;

use super::FacetsArgs;
use crate::context::Context;
use crate::output::format_price_range;

/// Run the facets command.
pub async fn run(args: FacetsArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    let view = CollectionView::load(&catalog, args.slug.as_str()).await?;

    if !view.is_found() {
        bail!(CatalogError::CollectionNotFound(args.slug));
    }

    let available = view.available_filters();
    if ctx.output.is_json() {
        ctx.output.json(available);
        return Ok(());
    }

    let title = view.collection().map_or(args.slug.as_str(), |c| c.name.as_str());
    ctx.output.header(&format!("Filters for {}", title));

    if view.products().is_empty() {
        ctx.output.info("This collection has no products.");
        return Ok(());
    }

    let currency = ctx.config.display.currency;
    ctx.output.kv(
        "price",
        &format_price_range(available.price.min, available.price.max, currency),
    );
    if !available.has_stock {
        ctx.output.warn("Every product in this collection is sold out.");
    }

    if !available.sizes.is_empty() {
        ctx.output.kv("sizes", &available.sizes.join(", "));
    }

    if !available.colors.is_empty() {
        ctx.output.kv("colors", "");
        for color in &available.colors {
            ctx.output
                .list_item(&format!("{} ({})", color.label, color.value));
        }
    }

    Ok(())
}
