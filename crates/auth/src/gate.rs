use std::sync::atomic::{AtomicBool, Ordering};

/// Session-scoped "private access granted" flag.
///
/// Shared by `Arc` between the navigation controller and the controls that log
/// in/out. Setting the flag is unconditional and idempotent.
#[derive(Debug, Default)]
pub struct AccessGate {
    open: AtomicBool,
}

impl AccessGate {
    /// A closed gate.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(open: bool) -> Self {
        Self {
            open: AtomicBool::new(open),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }

    pub fn set_open(&self, open: bool) {
        let previous = self.open.swap(open, Ordering::SeqCst);
        if previous != open {
            tracing::info!(open, "private access changed");
        }
    }
}
