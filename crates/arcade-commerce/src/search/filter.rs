//! Title/developer text filter.

use crate::catalog::{Catalog, CatalogItem};

/// Filter the catalog by a free-text query.
///
/// An item matches when the lower-cased query is a substring of its
/// lower-cased title or developer. The empty query matches everything.
/// Results keep catalog order.
pub fn search<'a>(query: &str, catalog: &'a Catalog) -> Vec<&'a CatalogItem> {
    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|item| item.matches_lowercase(&needle))
        .collect()
}
