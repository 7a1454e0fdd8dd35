use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use storefront_core::{CategoryId, DomainError, DomainResult, ProductId};
use storefront_products::{Availability, Category, Price, Product, parse_stock_count};

/// Text-level field values of the product editor.
///
/// The renderer edits these strings; `commit` maps them back onto a `Product`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductForm {
    pub id: ProductId,
    pub product_name: String,
    pub price: String,
    pub availability: Availability,
    pub stock_count: String,
    pub category_ids: BTreeSet<CategoryId>,
}

impl ProductForm {
    pub fn edit(product: &Product) -> Self {
        Self {
            id: product.id,
            product_name: product.product_name.clone(),
            price: product.price.to_string(),
            availability: product.availability,
            stock_count: product.stock_count.to_string(),
            category_ids: product.categories.iter().map(|c| c.id).collect(),
        }
    }

    /// Delete is only offered for products that exist in the catalog.
    pub fn delete_enabled(&self) -> bool {
        !self.id.is_unsaved()
    }

    /// Convert the field values back into a product, resolving category ids
    /// against the reference list.
    pub fn commit(&self, categories: &[Category]) -> DomainResult<Product> {
        let price = Price::parse(&self.price)?;

        let categories = self
            .category_ids
            .iter()
            .map(|id| {
                categories
                    .iter()
                    .find(|c| c.id == *id)
                    .cloned()
                    .ok_or_else(|| DomainError::validation(format!("unknown category {id}")))
            })
            .collect::<DomainResult<BTreeSet<_>>>()?;

        Ok(Product {
            id: self.id,
            product_name: self.product_name.clone(),
            price,
            availability: self.availability,
            stock_count: parse_stock_count(&self.stock_count),
            categories,
        })
    }
}
