use std::sync::Arc;

use serde::Serialize;

use storefront_auth::AccessGate;
use storefront_core::DomainResult;

use crate::listener::{ViewChangeEvent, ViewChangeListener};
use crate::registry::ViewRegistry;
use crate::view::{DEFAULT_VIEW_NAME, ViewDescriptor, split_state};

/// Why a navigation ended on the error view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationError {
    NotFound,
    AccessDenied,
}

/// Result of a single navigation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum NavigationOutcome {
    /// The current view is now `view`.
    Navigate {
        view: ViewDescriptor,
        parameters: String,
    },
    /// Unknown name or access denied: the error view is shown and the current
    /// view stays as it was.
    Error {
        reason: NavigationError,
        requested: String,
    },
    /// A view-change listener refused the change.
    Vetoed { requested: String },
}

impl NavigationOutcome {
    /// Whether the control that triggered the navigation shows an error indicator.
    pub fn shows_error_indicator(&self) -> bool {
        matches!(self, NavigationOutcome::Error { .. })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, NavigationOutcome::Navigate { .. })
    }
}

/// Decides and applies navigation requests for one session.
///
/// Every request is evaluated against the live gate and registry; no
/// decision is remembered between calls.
pub struct NavigationController<V> {
    registry: Arc<ViewRegistry<V>>,
    gate: Arc<AccessGate>,
    current: ViewDescriptor,
    listeners: Vec<Arc<dyn ViewChangeListener>>,
}

impl<V> NavigationController<V> {
    /// Create a controller positioned on the default view.
    ///
    /// Fails with `Configuration` if the registry has no default view.
    pub fn new(registry: Arc<ViewRegistry<V>>, gate: Arc<AccessGate>) -> DomainResult<Self> {
        let current = registry.default_view()?.clone();
        Ok(Self {
            registry,
            gate,
            current,
            listeners: Vec::new(),
        })
    }

    pub fn add_listener(&mut self, listener: Arc<dyn ViewChangeListener>) {
        self.listeners.push(listener);
    }

    pub fn current_view(&self) -> &ViewDescriptor {
        &self.current
    }

    pub fn registry(&self) -> &Arc<ViewRegistry<V>> {
        &self.registry
    }

    pub fn gate(&self) -> &Arc<AccessGate> {
        &self.gate
    }

    /// Decide the outcome for `state` without applying it or consulting listeners.
    pub fn decide(&self, state: &str) -> NavigationOutcome {
        let (name, parameters) = split_state(state);

        // The default view is always public.
        let resolved = if name == DEFAULT_VIEW_NAME {
            self.registry.default_view()
        } else {
            self.registry.resolve(name)
        };

        let descriptor = match resolved {
            Ok(d) => d,
            Err(err) => {
                tracing::debug!(%err, "navigation target not resolved");
                return NavigationOutcome::Error {
                    reason: NavigationError::NotFound,
                    requested: state.to_string(),
                };
            }
        };

        if descriptor.is_private && !descriptor.is_default() && !self.gate.is_open() {
            return NavigationOutcome::Error {
                reason: NavigationError::AccessDenied,
                requested: state.to_string(),
            };
        }

        NavigationOutcome::Navigate {
            view: descriptor.clone(),
            parameters: parameters.to_string(),
        }
    }

    /// Decide and apply a navigation request.
    pub fn navigate(&mut self, state: &str) -> NavigationOutcome {
        let outcome = self.decide(state);

        let NavigationOutcome::Navigate { view, parameters } = outcome.clone() else {
            tracing::debug!(requested = state, ?outcome, "navigation rejected");
            return outcome;
        };

        let event = ViewChangeEvent {
            old_view: self.current.clone(),
            new_view: view,
            parameters,
        };

        if !self.listeners.iter().all(|l| l.before_view_change(&event)) {
            tracing::debug!(requested = state, "navigation vetoed by listener");
            return NavigationOutcome::Vetoed {
                requested: state.to_string(),
            };
        }

        self.current = event.new_view.clone();
        tracing::info!(view = %self.current.name, "navigated");
        for listener in &self.listeners {
            listener.after_view_change(&event);
        }

        outcome
    }

    /// Produce the view instance a renderer should show after `outcome`.
    pub fn render(&self, outcome: &NavigationOutcome) -> DomainResult<V> {
        match outcome {
            NavigationOutcome::Navigate { view, .. } => self.registry.create(&view.name),
            NavigationOutcome::Error { .. } => Ok(self.registry.create_error_view()),
            NavigationOutcome::Vetoed { .. } => self.registry.create(&self.current.name),
        }
    }
}

impl<V> core::fmt::Debug for NavigationController<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NavigationController")
            .field("current", &self.current)
            .field("gate_open", &self.gate.is_open())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
