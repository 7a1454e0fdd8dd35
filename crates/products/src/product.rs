use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use storefront_core::{CategoryId, DomainError, ProductId};

use crate::price::Price;

/// Stock status shown in the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Availability {
    Available,
    #[default]
    Coming,
    Discontinued,
}

impl Availability {
    pub const ALL: [Availability; 3] = [
        Availability::Available,
        Availability::Coming,
        Availability::Discontinued,
    ];

    /// Name shown to users and matched by the catalog filter.
    pub fn display_name(self) -> &'static str {
        match self {
            Availability::Available => "AVAILABLE",
            Availability::Coming => "COMING",
            Availability::Discontinued => "DISCONTINUED",
        }
    }
}

impl core::fmt::Display for Availability {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl core::str::FromStr for Availability {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Availability::ALL
            .into_iter()
            .find(|a| a.display_name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::validation(format!("unknown availability '{wanted}'")))
    }
}

/// Reference data: loaded once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

impl Category {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(id),
            name: name.into(),
        }
    }
}

/// A product record as stored in the catalog.
///
/// `id == ProductId::UNSAVED` means the product was never saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub product_name: String,
    #[serde(default)]
    pub price: Price,
    #[serde(default)]
    pub availability: Availability,
    #[serde(default)]
    pub stock_count: u32,
    /// Ordered by category id.
    #[serde(default)]
    pub categories: BTreeSet<Category>,
}

impl Default for Product {
    fn default() -> Self {
        Self {
            id: ProductId::UNSAVED,
            product_name: String::new(),
            price: Price::ZERO,
            availability: Availability::default(),
            stock_count: 0,
            categories: BTreeSet::new(),
        }
    }
}

impl Product {
    /// A fresh product with default field values and the unsaved id.
    pub fn unsaved() -> Self {
        Self::default()
    }

    pub fn named(id: i64, product_name: impl Into<String>) -> Self {
        Self {
            id: ProductId::new(id),
            product_name: product_name.into(),
            ..Self::default()
        }
    }

    pub fn is_unsaved(&self) -> bool {
        self.id.is_unsaved()
    }

    /// Case-insensitive substring match on the name, the availability or any category name.
    ///
    /// `needle` must already be lowercase.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.product_name.to_lowercase().contains(needle)
            || self
                .availability
                .display_name()
                .to_lowercase()
                .contains(needle)
            || self
                .categories
                .iter()
                .any(|c| c.name.to_lowercase().contains(needle))
    }
}
