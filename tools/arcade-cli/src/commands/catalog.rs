//! Catalog listing and search commands.

use anyhow::Result;
use arcade_commerce::catalog::CatalogItem;
use arcade_commerce::search::search as filter;
use arcade_storefront::games_catalog;

use super::{CatalogArgs, SearchArgs};
use crate::context::Context;

const WIDTHS: [usize; 4] = [3, 42, 28, 8];

/// List every game.
pub fn list(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let catalog = games_catalog()?;

    if ctx.output.is_json() {
        ctx.output.json(&catalog.items());
        return Ok(());
    }

    ctx.output.header("Games");
    print_table(catalog.iter(), args.long, ctx);
    Ok(())
}

/// List games matching a query.
pub fn search(args: SearchArgs, ctx: &Context) -> Result<()> {
    let catalog = games_catalog()?;
    let results = filter(&args.query, &catalog);

    if ctx.output.is_json() {
        ctx.output.json(&results);
        return Ok(());
    }

    if results.is_empty() {
        ctx.output.warn(&format!("No games match {:?}", args.query));
        return Ok(());
    }

    ctx.output.header(&format!("Results for {:?}", args.query));
    print_table(results.into_iter(), false, ctx);
    Ok(())
}

fn print_table<'a>(items: impl Iterator<Item = &'a CatalogItem>, long: bool, ctx: &Context) {
    ctx.output
        .table_row(&["ID", "TITLE", "DEVELOPER", "PRICE"], &WIDTHS);
    for item in items {
        let id = item.id.to_string();
        let price = item.price.display();
        ctx.output
            .table_row(&[&id, &item.title, &item.developer, &price], &WIDTHS);
        if long {
            ctx.output.kv("description", &item.description);
        }
    }
}
