use std::collections::HashMap;
use std::sync::Arc;

use storefront_core::{DomainError, DomainResult};

use crate::view::{DEFAULT_VIEW_NAME, ERROR_VIEW_NAME, ViewDescriptor};

/// Produces a fresh view instance on each navigation.
pub type ViewFactory<V> = Arc<dyn Fn() -> V + Send + Sync>;

struct Entry<V> {
    descriptor: ViewDescriptor,
    factory: ViewFactory<V>,
}

impl<V> Clone for Entry<V> {
    fn clone(&self) -> Self {
        Self {
            descriptor: self.descriptor.clone(),
            factory: Arc::clone(&self.factory),
        }
    }
}

/// Name -> view factory table, plus the designated error view.
///
/// Registration happens at startup; after that the registry is read-only and
/// shared by `Arc`.
pub struct ViewRegistry<V> {
    entries: HashMap<String, Entry<V>>,
    order: Vec<String>,
    error: Entry<V>,
}

impl<V> ViewRegistry<V> {
    /// Create an empty registry whose error view is produced by `error_factory`.
    pub fn new(error_factory: impl Fn() -> V + Send + Sync + 'static) -> Self {
        Self {
            entries: HashMap::new(),
            order: Vec::new(),
            error: Entry {
                descriptor: ViewDescriptor::public(ERROR_VIEW_NAME),
                factory: Arc::new(error_factory),
            },
        }
    }

    pub fn register(
        &mut self,
        descriptor: ViewDescriptor,
        factory: impl Fn() -> V + Send + Sync + 'static,
    ) -> DomainResult<()> {
        if self.entries.contains_key(&descriptor.name) {
            return Err(DomainError::duplicate_name(format!(
                "view '{}' is already registered",
                descriptor.name
            )));
        }

        tracing::debug!(view = %descriptor.name, private = descriptor.is_private, "view registered");
        self.order.push(descriptor.name.clone());
        self.entries.insert(
            descriptor.name.clone(),
            Entry {
                descriptor,
                factory: Arc::new(factory),
            },
        );
        Ok(())
    }

    /// Replace the error view.
    pub fn set_error_view(
        &mut self,
        descriptor: ViewDescriptor,
        factory: impl Fn() -> V + Send + Sync + 'static,
    ) {
        self.error = Entry {
            descriptor,
            factory: Arc::new(factory),
        };
    }

    pub fn resolve(&self, name: &str) -> DomainResult<&ViewDescriptor> {
        self.entries
            .get(name)
            .map(|e| &e.descriptor)
            .ok_or_else(|| DomainError::not_found(format!("view '{name}'")))
    }

    pub fn default_view(&self) -> DomainResult<&ViewDescriptor> {
        self.entries
            .get(DEFAULT_VIEW_NAME)
            .map(|e| &e.descriptor)
            .ok_or_else(|| DomainError::configuration("no default view registered"))
    }

    pub fn error_view(&self) -> &ViewDescriptor {
        &self.error.descriptor
    }

    /// Instantiate the view registered under `name`.
    pub fn create(&self, name: &str) -> DomainResult<V> {
        let entry = self
            .entries
            .get(name)
            .ok_or_else(|| DomainError::not_found(format!("view '{name}'")))?;
        Ok((entry.factory)())
    }

    pub fn create_error_view(&self) -> V {
        (self.error.factory)()
    }

    /// Registered descriptors in registration order.
    pub fn descriptors(&self) -> impl Iterator<Item = &ViewDescriptor> {
        self.order
            .iter()
            .filter_map(|name| self.entries.get(name).map(|e| &e.descriptor))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> Clone for ViewRegistry<V> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            order: self.order.clone(),
            error: self.error.clone(),
        }
    }
}

impl<V> core::fmt::Debug for ViewRegistry<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ViewRegistry")
            .field("views", &self.order)
            .field("error_view", &self.error.descriptor.name)
            .finish()
    }
}
