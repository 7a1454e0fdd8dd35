use std::sync::{Arc, RwLock};

use crate::{AccessGate, Role};

/// Boundary between a login screen and the session's access state.
pub trait AccessControl: Send + Sync {
    /// Attempt to sign in. Returns whether the session is now signed in.
    fn sign_in(&self, username: &str, password: &str) -> bool;

    fn sign_out(&self);

    fn is_user_signed_in(&self) -> bool;

    fn is_user_in_role(&self, role: &Role) -> bool;

    /// Name of the signed-in principal, if any.
    fn principal_name(&self) -> Option<String>;
}

/// Demo access control: any non-blank username is accepted and no password
/// is checked. Signing in opens the session's gate; signing out closes it.
///
/// The gate is the single source of truth for "signed in": when something
/// else opens it the session is signed in anonymously, and a principal is
/// only reported while the gate is open.
#[derive(Debug)]
pub struct BasicAccessControl {
    gate: Arc<AccessGate>,
    principal: RwLock<Option<String>>,
}

impl BasicAccessControl {
    pub fn new(gate: Arc<AccessGate>) -> Self {
        Self {
            gate,
            principal: RwLock::new(None),
        }
    }

    pub fn gate(&self) -> &Arc<AccessGate> {
        &self.gate
    }

    fn set_principal(&self, name: Option<String>) {
        match self.principal.write() {
            Ok(mut guard) => *guard = name,
            Err(poisoned) => *poisoned.into_inner() = name,
        }
    }
}

impl AccessControl for BasicAccessControl {
    fn sign_in(&self, username: &str, _password: &str) -> bool {
        let username = username.trim();
        if username.is_empty() {
            tracing::warn!("sign-in rejected: empty username");
            return false;
        }

        self.set_principal(Some(username.to_string()));
        self.gate.set_open(true);
        tracing::info!(user = username, "signed in");
        true
    }

    fn sign_out(&self) {
        self.set_principal(None);
        self.gate.set_open(false);
        tracing::info!("signed out");
    }

    fn is_user_signed_in(&self) -> bool {
        self.gate.is_open()
    }

    fn is_user_in_role(&self, role: &Role) -> bool {
        // Only the "admin" principal holds the admin role; no other roles exist.
        match self.principal_name() {
            Some(name) => *role == Role::ADMIN && name == Role::ADMIN.as_str(),
            None => false,
        }
    }

    fn principal_name(&self) -> Option<String> {
        if !self.gate.is_open() {
            return None;
        }
        match self.principal.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}
