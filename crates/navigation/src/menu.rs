use std::sync::RwLock;

use serde::Serialize;

use crate::listener::{ViewChangeEvent, ViewChangeListener};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub view_name: String,
    pub caption: String,
}

/// Side menu with one entry per top-level view.
///
/// Register it as a `ViewChangeListener` so the highlighted entry follows the
/// current view.
#[derive(Debug, Default)]
pub struct NavigationMenu {
    items: Vec<MenuItem>,
    active: RwLock<Option<String>>,
}

impl NavigationMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_view_button(&mut self, view_name: impl Into<String>, caption: impl Into<String>) {
        self.items.push(MenuItem {
            view_name: view_name.into(),
            caption: caption.into(),
        });
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Name of the highlighted entry, if the current view has one.
    pub fn active_view(&self) -> Option<String> {
        match self.active.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn set_active_view(&self, view_name: &str) {
        let next = self
            .items
            .iter()
            .find(|item| item.view_name == view_name)
            .map(|item| item.view_name.clone());

        match self.active.write() {
            Ok(mut guard) => *guard = next,
            Err(poisoned) => *poisoned.into_inner() = next,
        }
    }
}

impl ViewChangeListener for NavigationMenu {
    fn after_view_change(&self, event: &ViewChangeEvent) {
        self.set_active_view(&event.new_view.name);
    }
}
