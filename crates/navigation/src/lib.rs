//! View navigation with access gating.
//!
//! Deterministic decision logic only: the registry maps names to view
//! factories, the controller decides whether a navigation request succeeds,
//! and rendering is left to the caller.

pub mod controller;
pub mod listener;
pub mod menu;
pub mod registry;
pub mod toolbar;
pub mod view;

pub use controller::{NavigationController, NavigationError, NavigationOutcome};
pub use listener::{ViewChangeEvent, ViewChangeListener};
pub use menu::{MenuItem, NavigationMenu};
pub use registry::{ViewFactory, ViewRegistry};
pub use toolbar::{NavCommand, NavigationToolbar, ToolbarResponse};
pub use view::{ViewDescriptor, DEFAULT_VIEW_NAME, ERROR_VIEW_NAME};
