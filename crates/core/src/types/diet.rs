//! Dietary tags for menu cards.

use serde::{Deserialize, Serialize};

/// Dietary tag carried by a menu card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Diet {
    Veg,
    NonVeg,
}

/// Dietary filter chosen by a visitor browsing the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DietFilter {
    #[default]
    All,
    Veg,
    NonVeg,
}

impl DietFilter {
    /// Whether a card with the given tag passes this filter.
    #[must_use]
    pub fn admits(self, diet: Diet) -> bool {
        match self {
            Self::All => true,
            Self::Veg => diet == Diet::Veg,
            Self::NonVeg => diet == Diet::NonVeg,
        }
    }
}

impl std::fmt::Display for Diet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Veg => write!(f, "veg"),
            Self::NonVeg => write!(f, "non-veg"),
        }
    }
}

impl std::str::FromStr for DietFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "veg" => Ok(Self::Veg),
            "non-veg" => Ok(Self::NonVeg),
            _ => Err(format!("invalid diet filter: {s} (expected all, veg or non-veg)")),
        }
    }
}
