//! `storefront-core`: shared domain building blocks.
//!
//! This crate contains **pure domain** primitives (no UI or storage concerns).

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::{CategoryId, ProductId, UNSAVED_ID};
