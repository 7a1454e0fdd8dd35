use serde::Serialize;

use storefront_products::{Availability, Product};

/// One grid row, already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductRow {
    pub id: i64,
    pub product_name: String,
    pub price: String,
    pub availability: &'static str,
    /// Traffic-light colour next to the availability text.
    pub availability_color: &'static str,
    pub stock_count: u32,
    /// Category names ordered by category id, comma separated.
    pub categories: String,
}

pub fn availability_color(availability: Availability) -> &'static str {
    match availability {
        Availability::Available => "#2dd085",
        Availability::Coming => "#ffc66e",
        Availability::Discontinued => "#f54993",
    }
}

impl From<&Product> for ProductRow {
    fn from(p: &Product) -> Self {
        // `categories` is a BTreeSet ordered by id.
        let categories = p
            .categories
            .iter()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            id: p.id.get(),
            product_name: p.product_name.clone(),
            price: p.price.to_string(),
            availability: p.availability.display_name(),
            availability_color: availability_color(p.availability),
            stock_count: p.stock_count,
            categories,
        }
    }
}
