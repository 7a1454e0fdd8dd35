//! Products domain module.
//!
//! Product records, category reference data and the in-memory catalog the
//! CRUD screen edits. Pure domain logic (no IO, no rendering).

pub mod catalog;
pub mod price;
pub mod product;

pub use catalog::ProductCatalog;
pub use price::{Price, parse_stock_count};
pub use product::{Availability, Category, Product};
