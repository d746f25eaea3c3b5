//! Authoritative item → price catalog.
//!
//! # Data Flow
//! ```text
//! menu.rs (static category → items)
//!     → Catalog::from_menu() (flatten once at startup)
//!     → shared via Arc, read-only for process lifetime
//! ```
//!
//! # Design Decisions
//! - Built exactly once; no writer exists after construction, so no
//!   synchronization is needed
//! - Duplicate identifiers resolve last-write-wins with a startup warning

pub mod menu;

use std::collections::HashMap;

use crate::catalog::menu::{MenuCategory, MENU_DATA};

/// Immutable identifier → unit price mapping.
pub struct Catalog {
    prices: HashMap<String, u32>,
}

impl Catalog {
    /// Build the catalog from the compiled-in menu.
    pub fn from_menu() -> Self {
        Self::from_categories(MENU_DATA)
    }

    /// Build from an explicit category list.
    pub fn from_categories(categories: &[MenuCategory]) -> Self {
        let mut prices = HashMap::new();
        for category in categories {
            for (name, price) in category.items {
                if prices.insert((*name).to_string(), *price).is_some() {
                    tracing::warn!(item = %name, "Duplicate menu identifier, keeping last price");
                }
            }
        }
        Self { prices }
    }

    /// Authoritative unit price for an item, if it exists.
    pub fn price_of(&self, item_id: &str) -> Option<u32> {
        self.prices.get(item_id).copied()
    }

    /// Number of distinct orderable items.
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_prices() {
        let catalog = Catalog::from_menu();
        assert_eq!(catalog.price_of("こってり"), Some(950));
        assert_eq!(catalog.price_of("味玉"), Some(150));
        assert_eq!(catalog.price_of("ビール"), Some(600));
    }

    #[test]
    fn test_unknown_item() {
        let catalog = Catalog::from_menu();
        assert_eq!(catalog.price_of("存在しないメニュー"), None);
    }

    #[test]
    fn test_lookup_is_idempotent() {
        let catalog = Catalog::from_menu();
        let first = catalog.price_of("豚増こってり");
        for _ in 0..10 {
            assert_eq!(catalog.price_of("豚増こってり"), first);
        }
    }

    #[test]
    fn test_flattens_all_categories() {
        let catalog = Catalog::from_menu();
        let expected: usize = MENU_DATA.iter().map(|c| c.items.len()).sum();
        assert_eq!(catalog.len(), expected);
    }

    #[test]
    fn test_duplicate_last_write_wins() {
        let categories = [
            MenuCategory {
                category: "a",
                items: &[("ラーメン", 900)],
            },
            MenuCategory {
                category: "b",
                items: &[("ラーメン", 950)],
            },
        ];
        let catalog = Catalog::from_categories(&categories);
        assert_eq!(catalog.price_of("ラーメン"), Some(950));
        assert_eq!(catalog.len(), 1);
    }
}
