//! List collections in the catalog.

use anyhow::Result;
use serde::Serialize;
use storefront_catalog::prelude::*;

use crate::context::Context;
use crate::output::column_width;

#[derive(Serialize)]
struct CollectionRow {
    slug: String,
    name: String,
    products: usize,
}

/// Run the collections command.
pub async fn run(ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog()?;

    let mut rows = Vec::new();
    for collection in catalog.collections().await? {
        let products = catalog.products_by_collection(&collection.slug).await?.len();
        rows.push(CollectionRow {
            slug: collection.slug.to_string(),
            name: collection.name,
            products,
        });
    }

    if ctx.output.is_json() {
        ctx.output.json(&rows);
        return Ok(());
    }

    ctx.output.header("Collections");
    if rows.is_empty() {
        ctx.output.info("The catalog has no collections.");
        return Ok(());
    }

    let widths = [
        column_width("Slug", rows.iter().map(|r| r.slug.as_str())),
        column_width("Name", rows.iter().map(|r| r.name.as_str())),
        8,
    ];
    ctx.output.table_row(&["Slug", "Name", "Products"], &widths);
    for row in &rows {
        ctx.output.table_row(
            &[&row.slug, &row.name, &row.products.to_string()],
            &widths,
        );
    }

    Ok(())
}
