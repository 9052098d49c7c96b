//! Render instructions for the three screens, derived from dish records.
//!
//! The front-end draws these and never reads anything back from the page.

use crate::constants::CURRENCY_PREFIX;
use crate::dish::DishRecord;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Thumbnail {
    Image(String),
    Placeholder,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuCard {
    pub id: String,
    pub name: String,
    pub price_label: String,
    pub thumbnail: Thumbnail,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminEntry {
    pub id: String,
    pub name: String,
    pub summary: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DishDetail {
    pub name: String,
    /// Label/value pairs in display order.
    pub facts: Vec<(&'static str, String)>,
}

pub fn format_price(price: f64) -> String {
    format!("{} {:.2}", CURRENCY_PREFIX, price)
}

pub fn menu_cards(dishes: &[DishRecord]) -> Vec<MenuCard> {
    dishes
        .iter()
        .map(|d| MenuCard {
            id: d.id.clone(),
            name: d.name.clone(),
            price_label: format_price(d.price),
            thumbnail: match d.image_reference.as_deref() {
                Some(src) if !src.is_empty() => Thumbnail::Image(src.to_string()),
                _ => Thumbnail::Placeholder,
            },
        })
        .collect()
}

pub fn admin_entries(dishes: &[DishRecord]) -> Vec<AdminEntry> {
    dishes
        .iter()
        .map(|d| AdminEntry {
            id: d.id.clone(),
            name: d.name.clone(),
            summary: format!(
                "{}cm × {}cm - {}",
                d.diameter,
                d.height,
                format_price(d.price)
            ),
        })
        .collect()
}

pub fn dish_detail(dish: &DishRecord) -> DishDetail {
    let mut facts = vec![
        ("Diâmetro", format!("{} cm", dish.diameter)),
        ("Altura", format!("{} cm", dish.height)),
    ];
    if let Some(desc) = dish.description_text() {
        facts.push(("Descrição", desc.to_string()));
    }
    facts.push(("Preço", format_price(dish.price)));
    DishDetail {
        name: dish.name.clone(),
        facts,
    }
}
