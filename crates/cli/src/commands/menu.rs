//! Menu browsing.
//!
//! # Usage
//!
//! ```bash
//! tandoor menu
//! tandoor menu --search naan
//! tandoor menu --category mains --diet non-veg
//! ```

use tandoor_cart::menu::{Menu, MenuCard};
use tandoor_core::{CurrencyCode, DietFilter, Price};

/// Cards passing every filter given, in menu order.
pub fn select<'a>(
    menu: &'a Menu,
    search: Option<&str>,
    category: &str,
    diet: DietFilter,
) -> Vec<&'a MenuCard> {
    let in_category = menu.filter_by_category(category);
    let in_diet = menu.filter_by_diet(diet);
    menu.search(search.unwrap_or_default())
        .into_iter()
        .filter(|card| in_category.contains(card) && in_diet.contains(card))
        .collect()
}

/// Print the menu, filtered.
#[allow(clippy::print_stdout)]
pub fn list(
    currency: CurrencyCode,
    search: Option<&str>,
    category: &str,
    diet: DietFilter,
) -> Result<(), serde_json::Error> {
    let menu = Menu::builtin()?;
    let cards = select(&menu, search, category, diet);
    if cards.is_empty() {
        println!("No dishes match");
        return Ok(());
    }

    for card in cards {
        println!(
            "{:<24} {:>10}  {:<9} {}",
            card.name.as_str(),
            Price::new(card.price, currency).display(),
            card.category,
            card.diet,
        );
    }
    Ok(())
}
