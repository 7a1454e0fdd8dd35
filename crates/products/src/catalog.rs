use std::collections::HashSet;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use storefront_core::{DomainError, DomainResult, ProductId};

use crate::product::Product;

/// In-memory product collection edited by the CRUD screen.
///
/// May be shared between sessions behind an `Arc`: writes (and therefore id
/// assignment) are serialized by the lock, reads clone a consistent snapshot.
#[derive(Debug, Default)]
pub struct ProductCatalog {
    inner: RwLock<Vec<Product>>,
}

impl ProductCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from an initial snapshot (e.g. the repository contents).
    ///
    /// Every product must already carry a unique, positive id.
    pub fn with_products(products: Vec<Product>) -> DomainResult<Self> {
        let mut seen = HashSet::new();
        for p in &products {
            if p.is_unsaved() {
                return Err(DomainError::configuration(format!(
                    "initial product '{}' has no id",
                    p.product_name
                )));
            }
            if p.id.get() <= 0 {
                return Err(DomainError::configuration(format!(
                    "initial product '{}' has non-positive id {}",
                    p.product_name, p.id
                )));
            }
            if !seen.insert(p.id) {
                return Err(DomainError::configuration(format!(
                    "duplicate product id {}",
                    p.id
                )));
            }
        }

        Ok(Self {
            inner: RwLock::new(products),
        })
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Product>> {
        // A panicking writer can only interrupt between whole-vector operations.
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Product>> {
        self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// All products in insertion order.
    pub fn list(&self) -> Vec<Product> {
        self.read().clone()
    }

    /// Products whose name, availability or any category name contains `text`,
    /// ignoring case. Empty text returns the full list.
    pub fn filter(&self, text: &str) -> Vec<Product> {
        if text.is_empty() {
            return self.list();
        }

        let needle = text.to_lowercase();
        self.read()
            .iter()
            .filter(|p| p.matches_lowercase(&needle))
            .cloned()
            .collect()
    }

    pub fn get(&self, id: ProductId) -> DomainResult<Product> {
        self.read()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(format!("product {id}")))
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Create (unsaved id) or update in place (existing id).
    ///
    /// New products get `max(id) + 1`, or 1 in an empty catalog. Running out
    /// of ids is an `InvariantViolation`.
    pub fn save(&self, mut product: Product) -> DomainResult<Product> {
        let mut products = self.write();

        if product.is_unsaved() {
            let max = products.iter().map(|p| p.id.get()).max().unwrap_or(0);
            let next = max.max(0).checked_add(1).ok_or_else(|| {
                DomainError::invariant(format!("no product id left after {max}"))
            })?;
            product.id = ProductId::new(next);
            products.push(product.clone());
            tracing::info!(id = %product.id, name = %product.product_name, "product created");
            return Ok(product);
        }

        let slot = products
            .iter_mut()
            .find(|p| p.id == product.id)
            .ok_or_else(|| DomainError::not_found(format!("product {}", product.id)))?;
        *slot = product.clone();
        tracing::info!(id = %product.id, name = %product.product_name, "product updated");
        Ok(product)
    }

    pub fn delete(&self, id: ProductId) -> DomainResult<()> {
        let mut products = self.write();
        let index = products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| DomainError::not_found(format!("product {id}")))?;
        products.remove(index);
        tracing::info!(%id, "product deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::product::{Availability, Category};

    fn widget_catalog() -> ProductCatalog {
        ProductCatalog::with_products(vec![Product::named(1, "Widget")]).unwrap()
    }

    fn unsaved(name: &str) -> Product {
        Product {
            product_name: name.to_string(),
            ..Product::unsaved()
        }
    }

    #[test]
    fn save_create_then_delete_scenario() {
        let catalog = widget_catalog();

        let saved = catalog.save(unsaved("Ab")).unwrap();
        assert_eq!(saved.id, ProductId::new(2));
        assert_eq!(catalog.list().len(), 2);

        catalog.delete(ProductId::new(1)).unwrap();
        let remaining = catalog.list();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, ProductId::new(2));

        let err = catalog.delete(ProductId::new(1)).unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[test]
    fn first_id_in_empty_catalog_is_one() {
        let catalog = ProductCatalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.save(unsaved("Ab")).unwrap().id, ProductId::new(1));
    }

    #[test]
    fn ids_follow_max_not_count() {
        let catalog = ProductCatalog::with_products(vec![
            Product::named(3, "Three"),
            Product::named(10, "Ten"),
        ])
        .unwrap();
        assert_eq!(catalog.save(unsaved("Next")).unwrap().id, ProductId::new(11));
    }

    #[test]
    fn update_replaces_in_place() {
        let catalog = ProductCatalog::with_products(vec![
            Product::named(1, "Widget"),
            Product::named(2, "Gadget"),
        ])
        .unwrap();

        let mut changed = catalog.get(ProductId::new(1)).unwrap();
        changed.product_name = "Widget XL".to_string();
        catalog.save(changed).unwrap();

        let names: Vec<_> = catalog.list().into_iter().map(|p| p.product_name).collect();
        assert_eq!(names, vec!["Widget XL", "Gadget"]);
    }

    #[test]
    fn update_of_unknown_id_is_not_found() {
        let catalog = widget_catalog();
        let err = catalog.save(Product::named(99, "Ghost")).unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn initial_snapshot_must_have_unique_saved_ids() {
        let dup = ProductCatalog::with_products(vec![Product::named(1, "A"), Product::named(1, "B")]);
        assert!(matches!(dup, Err(DomainError::Configuration(_))));

        let unsaved = ProductCatalog::with_products(vec![unsaved("A")]);
        assert!(matches!(unsaved, Err(DomainError::Configuration(_))));
    }

    #[test]
    fn initial_ids_must_be_positive() {
        for id in [0, -3] {
            let result = ProductCatalog::with_products(vec![Product::named(id, "Neg")]);
            assert!(matches!(result, Err(DomainError::Configuration(_))), "id {id}");
        }
    }

    #[test]
    fn created_ids_are_never_the_unsaved_marker() {
        let catalog = widget_catalog();
        catalog.delete(ProductId::new(1)).unwrap();

        let a = catalog.save(unsaved("Alpha")).unwrap();
        let mut b = catalog.save(unsaved("Beta")).unwrap();
        assert!(!a.is_unsaved());
        assert!(!b.is_unsaved());

        b.product_name = "Beta 2".to_string();
        let updated = catalog.save(b.clone()).unwrap();
        assert_eq!(updated.id, b.id);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn exhausted_ids_are_an_error_not_a_wrap() {
        let catalog = ProductCatalog::with_products(vec![Product::named(i64::MAX, "Max")]).unwrap();
        let err = catalog.save(unsaved("Next")).unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn filter_is_or_across_fields() {
        let mut by_name = Product::named(1, "Mystery Box");
        by_name.availability = Availability::Available;
        let mut by_category = Product::named(2, "Paperback");
        by_category.categories.insert(Category::new(4, "Mystery"));
        let mut by_availability = Product::named(3, "Gizmo");
        by_availability.availability = Availability::Discontinued;

        let catalog =
            ProductCatalog::with_products(vec![by_name, by_category, by_availability]).unwrap();

        let ids = |text: &str| -> Vec<i64> { catalog.filter(text).iter().map(|p| p.id.get()).collect() };
        assert_eq!(ids("MYSTERY"), vec![1, 2]);
        assert_eq!(ids("discontinued"), vec![3]);
        assert_eq!(ids("avail"), vec![1]);
        assert_eq!(ids("nothing"), Vec::<i64>::new());
    }

    #[test]
    fn concurrent_creates_get_distinct_ids() {
        let catalog = Arc::new(ProductCatalog::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let catalog = Arc::clone(&catalog);
                std::thread::spawn(move || {
                    (0..25)
                        .map(|j| catalog.save(unsaved(&format!("p{i}-{j}"))).unwrap().id)
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids: Vec<_> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 200);
        assert_eq!(catalog.len(), 200);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: two creates in a row get distinct ids, and deleting one keeps the other.
            #[test]
            fn creates_get_distinct_ids(
                existing in prop::collection::btree_set(1i64..1000, 0..10),
                a in "[A-Za-z]{2,12}",
                b in "[A-Za-z]{2,12}"
            ) {
                let seed = existing.iter().map(|id| Product::named(*id, "seed")).collect();
                let catalog = ProductCatalog::with_products(seed).unwrap();

                let first = catalog.save(unsaved(&a)).unwrap();
                let second = catalog.save(unsaved(&b)).unwrap();
                prop_assert_ne!(first.id, second.id);

                catalog.delete(first.id).unwrap();
                prop_assert_eq!(catalog.get(second.id).unwrap(), second);
            }

            /// Property: the empty filter is exactly `list()`.
            #[test]
            fn empty_filter_equals_list(names in prop::collection::vec("[A-Za-z ]{0,12}", 0..12)) {
                let catalog = ProductCatalog::new();
                for name in &names {
                    catalog.save(unsaved(name)).unwrap();
                }
                prop_assert_eq!(catalog.filter(""), catalog.list());
            }

            /// Property: filtering never invents or reorders products.
            #[test]
            fn filter_is_ordered_subsequence(
                names in prop::collection::vec("[a-c]{1,4}", 0..12),
                needle in "[a-cA-C]{1,2}"
            ) {
                let catalog = ProductCatalog::new();
                for name in &names {
                    catalog.save(unsaved(name)).unwrap();
                }
                let all = catalog.list();
                let mut rest = all.iter();
                for hit in catalog.filter(&needle) {
                    prop_assert!(rest.any(|p| *p == hit));
                }
            }
        }
    }
}
