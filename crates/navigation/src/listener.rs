use crate::view::ViewDescriptor;

/// A pending or completed change of the current view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewChangeEvent {
    pub old_view: ViewDescriptor,
    pub new_view: ViewDescriptor,
    pub parameters: String,
}

/// Observer of view changes.
///
/// `before_view_change` runs only for navigations that already passed the
/// existence and access checks; returning `false` vetoes the change.
pub trait ViewChangeListener: Send + Sync {
    fn before_view_change(&self, _event: &ViewChangeEvent) -> bool {
        true
    }

    fn after_view_change(&self, _event: &ViewChangeEvent) {}
}
