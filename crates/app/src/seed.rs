//! Reference data and the initial product snapshot.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use storefront_core::{CategoryId, DomainError, DomainResult, ProductId};
use storefront_products::{Availability, Category, Price, Product, ProductCatalog};

/// Product as written in a seed file: categories are referenced by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedProduct {
    pub id: ProductId,
    pub product_name: String,
    #[serde(default)]
    pub price: Price,
    #[serde(default)]
    pub availability: Availability,
    #[serde(default)]
    pub stock_count: u32,
    #[serde(default)]
    pub category_ids: Vec<CategoryId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub categories: Vec<Category>,
    pub products: Vec<SeedProduct>,
}

impl Default for SeedData {
    fn default() -> Self {
        let categories = [
            "Children's books",
            "Best sellers",
            "Romance",
            "Mystery",
            "Thriller",
            "Sci-fi",
            "Non-fiction",
            "Cookbooks",
        ]
        .into_iter()
        .enumerate()
        .map(|(i, name)| Category::new(i as i64 + 1, name))
        .collect();

        let products = vec![
            seed_product(1, "Speaking Javascript", 2499, Availability::Available, 42, &[2, 7]),
            seed_product(2, "The Secret of the Old Mill", 1290, Availability::Available, 7, &[1, 4]),
            seed_product(3, "Murder at the Lighthouse", 1750, Availability::Coming, 0, &[4, 5]),
            seed_product(4, "Starship Gardens", 999, Availability::Available, 13, &[6]),
            seed_product(5, "Letters from Lisbon", 1425, Availability::Discontinued, 0, &[3]),
            seed_product(6, "One Pot Weeknights", 2100, Availability::Available, 5, &[7, 8]),
        ];

        Self {
            categories,
            products,
        }
    }
}

fn seed_product(
    id: i64,
    name: &str,
    cents: u64,
    availability: Availability,
    stock_count: u32,
    category_ids: &[i64],
) -> SeedProduct {
    SeedProduct {
        id: ProductId::new(id),
        product_name: name.to_string(),
        price: Price::from_cents(cents),
        availability,
        stock_count,
        category_ids: category_ids.iter().copied().map(CategoryId::new).collect(),
    }
}

impl SeedData {
    /// Resolve category references and build the shared catalog.
    ///
    /// Unknown category ids, duplicate category ids and non-positive or duplicate
    /// product ids are `Configuration` errors.
    pub fn build_catalog(&self) -> DomainResult<ProductCatalog> {
        let mut category_ids = BTreeSet::new();
        for c in &self.categories {
            if !category_ids.insert(c.id) {
                return Err(DomainError::configuration(format!(
                    "duplicate category id {}",
                    c.id
                )));
            }
        }

        let products = self
            .products
            .iter()
            .map(|seed| self.resolve(seed))
            .collect::<DomainResult<Vec<_>>>()?;

        let catalog = ProductCatalog::with_products(products)?;
        tracing::info!(
            products = catalog.len(),
            categories = self.categories.len(),
            "catalog seeded"
        );
        Ok(catalog)
    }

    fn resolve(&self, seed: &SeedProduct) -> DomainResult<Product> {
        let categories = seed
            .category_ids
            .iter()
            .map(|id| {
                self.categories
                    .iter()
                    .find(|c| c.id == *id)
                    .cloned()
                    .ok_or_else(|| {
                        DomainError::configuration(format!(
                            "product {} references unknown category {id}",
                            seed.id
                        ))
                    })
            })
            .collect::<DomainResult<BTreeSet<_>>>()?;

        Ok(Product {
            id: seed.id,
            product_name: seed.product_name.clone(),
            price: seed.price,
            availability: seed.availability,
            stock_count: seed.stock_count,
            categories,
        })
    }
}
