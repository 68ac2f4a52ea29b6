//! The launch lineup shown on the storefront.

use arcade_commerce::catalog::Catalog;
use arcade_commerce::CommerceError;

/// Catalog records as JSON, in display order.
pub const GAMES_JSON: &str = r#"[
  {
    "id": 1,
    "title": "Grand Theft Auto V",
    "developer": "Rockstar North",
    "price": 29.99,
    "image": "game1.jpg",
    "description": "Experience the ultimate open-world adventure in Los Santos. Steal cars, complete missions, and live the criminal life in this iconic game."
  },
  {
    "id": 2,
    "title": "Naruto x Boruto: Ultimate Ninja Storm Connections",
    "developer": "CyberConnect2 Co., Ltd.",
    "price": 19.99,
    "image": "game2.jpg",
    "description": "Dive into the world of Naruto with intense battles, new stories, and connections between generations. Master jutsu and fight alongside your favorite characters."
  },
  {
    "id": 3,
    "title": "Lego Batman: Legacy of the Dark Knight",
    "developer": "TT Games",
    "price": 14.99,
    "image": "game3.jpg",
    "description": "Join Batman and his allies in a Lego-filled adventure. Solve puzzles, battle villains, and uncover the secrets of Gotham in this fun family game."
  },
  {
    "id": 4,
    "title": "Marvel's Spider-Man: Miles Morales",
    "developer": "Insomniac Games, Nixxes Software",
    "price": 49.99,
    "image": "game4.jpg",
    "description": "Swing through New York as Miles Morales. Experience a new Spider-Man story with stunning graphics, web-slinging action, and superhero responsibilities."
  },
  {
    "id": 5,
    "title": "Resident Evil 9: Requiem",
    "developer": "CAPCOM Co., Ltd.",
    "price": 9.99,
    "image": "game5.jpg",
    "description": "Survive the horror in this latest installment of Resident Evil. Face terrifying creatures, solve puzzles, and uncover the dark secrets of the Umbrella Corporation."
  },
  {
    "id": 6,
    "title": "Call of Duty: Black Ops 7",
    "developer": "Treyarch, Raven Software, Beenox, High Moon Studios, Sledgehammer Games, Infinity Ward, Activision Shanghai, Demonware",
    "price": 24.99,
    "image": "game6.jpg",
    "description": "Engage in high-stakes multiplayer battles and campaign missions. Experience the next level of warfare with cutting-edge graphics and intense gameplay."
  }
]"#;

/// Build the built-in catalog.
pub fn games_catalog() -> Result<Catalog, CommerceError> {
    Catalog::from_json(GAMES_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcade_commerce::{Money, ProductId};

    #[test]
    fn test_builtin_catalog_parses() {
        let catalog = games_catalog().unwrap();
        let prices: Vec<i64> = catalog.iter().map(|g| g.price.amount_cents).collect();
        assert_eq!(prices, vec![2999, 1999, 1499, 4999, 999, 2499]);
        assert_eq!(
            catalog.get(ProductId::new(4)).map(|g| g.price),
            Some(Money::from_decimal(49.99))
        );
    }
}
