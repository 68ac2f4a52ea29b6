//! Shared test fixtures.

use crate::catalog::{Catalog, CatalogItem};
use crate::ids::ProductId;
use crate::money::Money;

/// Six-item catalog with the storefront's launch prices.
pub(crate) fn six_game_catalog() -> Catalog {
    let rows: [(u32, &str, &str, i64); 6] = [
        (1, "Grand Theft Auto V", "Rockstar North", 2999),
        (2, "Naruto x Boruto: Ultimate Ninja Storm Connections", "CyberConnect2 Co., Ltd.", 1999),
        (3, "Lego Batman: Legacy of the Dark Knight", "TT Games", 1499),
        (4, "Marvel's Spider-Man: Miles Morales", "Insomniac Games, Nixxes Software", 4999),
        (5, "Resident Evil 9: Requiem", "CAPCOM Co., Ltd.", 999),
        (6, "Call of Duty: Black Ops 7", "Treyarch, Raven Software", 2499),
    ];

    let items = rows
        .into_iter()
        .map(|(id, title, developer, cents)| CatalogItem {
            id: ProductId::new(id),
            title: title.to_string(),
            developer: developer.to_string(),
            price: Money::new(cents),
            image: format!("game{id}.jpg"),
            description: format!("{title} description"),
        })
        .collect();

    Catalog::new(items).expect("fixture catalog is valid")
}
