//! `storefront-app`: wires the demo screens together.
//!
//! Collaborators are built by explicit factory functions from an `AppConfig`
//! instead of being looked up in a container.

pub mod command;
pub mod config;
pub mod seed;
pub mod session;
pub mod views;

pub use command::UiCommand;
pub use config::{AppConfig, ConfigSource};
pub use seed::SeedData;
pub use session::{Screen, Session};
pub use views::ViewKind;
