use std::sync::Arc;

use serde::Serialize;

use storefront_core::DomainResult;
use storefront_navigation::{ViewDescriptor, ViewRegistry};

/// Inventory (CRUD) view name.
pub const INVENTORY_VIEW: &str = "Inventory";
pub const ABOUT_VIEW: &str = "About";

/// The screens this app can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewKind {
    Login,
    Default,
    Public,
    Private,
    Inventory,
    About,
    Error,
}

impl ViewKind {
    pub fn title(self) -> &'static str {
        match self {
            ViewKind::Login => "Login",
            ViewKind::Default => "Default",
            ViewKind::Public => "Public",
            ViewKind::Private => "Private",
            ViewKind::Inventory => "Inventory",
            ViewKind::About => "About",
            ViewKind::Error => "Error",
        }
    }
}

/// Registry with the tutorial views (`""`, `public`, `private`) and the
/// product screens (`Inventory`, `About`).
pub fn build_registry() -> DomainResult<Arc<ViewRegistry<ViewKind>>> {
    let mut registry = ViewRegistry::new(|| ViewKind::Error);
    registry.register(ViewDescriptor::public(""), || ViewKind::Default)?;
    registry.register(ViewDescriptor::private("private"), || ViewKind::Private)?;
    registry.register(ViewDescriptor::public("public"), || ViewKind::Public)?;
    registry.register(ViewDescriptor::public(INVENTORY_VIEW), || ViewKind::Inventory)?;
    registry.register(ViewDescriptor::public(ABOUT_VIEW), || ViewKind::About)?;
    Ok(Arc::new(registry))
}
