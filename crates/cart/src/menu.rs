//! Static menu catalog with search and filters.
//!
//! The menu is fixed content shipped with the site. Searching and filtering
//! never mutate it; each query returns the matching cards in menu order.

use rust_decimal::Decimal;
use serde::Deserialize;
use tandoor_core::{Diet, DietFilter, DishName};
use tracing::debug;

const BUILTIN_MENU: &str = include_str!("../data/menu.json");

/// Category value that matches every card.
pub const ALL_CATEGORIES: &str = "all";

/// One dish as shown on the menu.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MenuCard {
    pub name: DishName,
    pub price: Decimal,
    pub category: String,
    pub diet: Diet,
}

/// The restaurant menu.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Menu {
    cards: Vec<MenuCard>,
}

impl Menu {
    /// Parse a menu from a JSON array of cards.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the document is not a list of
    /// valid cards.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The menu shipped with the library.
    ///
    /// # Errors
    ///
    /// Returns an error only if the embedded menu file is corrupt.
    pub fn builtin() -> Result<Self, serde_json::Error> {
        Self::from_json(BUILTIN_MENU)
    }

    /// All cards in menu order.
    #[must_use]
    pub fn cards(&self) -> &[MenuCard] {
        &self.cards
    }

    /// Cards whose name contains `query`, ignoring case and surrounding
    /// whitespace. An empty query matches every card.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&MenuCard> {
        let needle = query.trim().to_lowercase();
        let hits: Vec<&MenuCard> = self
            .cards
            .iter()
            .filter(|card| needle.is_empty() || card.name.as_str().to_lowercase().contains(&needle))
            .collect();
        debug!(query = %needle, hits = hits.len(), "Menu search");
        hits
    }

    /// Cards in `category`; [`ALL_CATEGORIES`] matches every card.
    #[must_use]
    pub fn filter_by_category(&self, category: &str) -> Vec<&MenuCard> {
        self.cards
            .iter()
            .filter(|card| category == ALL_CATEGORIES || card.category == category)
            .collect()
    }

    /// Cards admitted by a dietary filter.
    #[must_use]
    pub fn filter_by_diet(&self, filter: DietFilter) -> Vec<&MenuCard> {
        self.cards
            .iter()
            .filter(|card| filter.admits(card.diet))
            .collect()
    }

    /// Card named exactly `name`, ignoring case.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&MenuCard> {
        let name = name.trim();
        self.cards
            .iter()
            .find(|card| card.name.as_str().eq_ignore_ascii_case(name))
    }

    /// Distinct categories in order of first appearance.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for card in &self.cards {
            if !seen.contains(&card.category.as_str()) {
                seen.push(&card.category);
            }
        }
        seen
    }
}
