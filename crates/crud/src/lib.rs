//! CRUD screen logic for the product catalog.
//!
//! UI events come in as commands; the logic mutates the catalog and its own
//! selection/form state and hands back a snapshot for the renderer. No
//! widget is touched here.

pub mod form;
pub mod grid;
pub mod logic;
pub mod notification;

pub use form::ProductForm;
pub use grid::ProductRow;
pub use logic::{CrudCommand, CrudSnapshot, CrudViewLogic};
pub use notification::{Notification, NotificationKind};
