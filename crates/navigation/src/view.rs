use serde::{Deserialize, Serialize};

/// Name reserved for the default view.
pub const DEFAULT_VIEW_NAME: &str = "";

/// Name of the built-in error view descriptor. It is never reachable by name.
pub const ERROR_VIEW_NAME: &str = "error";

/// Static description of a navigable view.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewDescriptor {
    pub name: String,
    pub is_private: bool,
}

impl ViewDescriptor {
    pub fn public(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_private: false,
        }
    }

    pub fn private(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_private: true,
        }
    }

    pub fn is_default(&self) -> bool {
        self.name == DEFAULT_VIEW_NAME
    }
}

/// Split a navigation state such as `"Inventory/12"` into the view name and
/// its parameters.
pub fn split_state(state: &str) -> (&str, &str) {
    match state.split_once('/') {
        Some((name, parameters)) => (name, parameters),
        None => (state, ""),
    }
}
