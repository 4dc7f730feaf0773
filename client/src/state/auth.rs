//! Provider identity for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The identity token is what the document store calls need. It is kept
//! beside the route-guard flag, not inside it: the flag decides whether a
//! page may render, the identity decides whether its data can load.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::IdentitySession;
use crate::util::persistence;

/// Storage key for the remembered identity.
pub const IDENTITY_KEY: &str = "bookkee_identity";

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub identity: Option<IdentitySession>,
}

impl AuthState {
    /// Restore the identity remembered by a previous page load.
    pub fn restore() -> Self {
        Self { identity: persistence::load_json(IDENTITY_KEY) }
    }

    pub fn remember(&mut self, identity: IdentitySession) {
        persistence::save_json(IDENTITY_KEY, &identity);
        self.identity = Some(identity);
    }

    pub fn forget(&mut self) {
        persistence::remove(IDENTITY_KEY);
        self.identity = None;
    }

    /// Email to show in the header, if signed in.
    pub fn display_email(&self) -> Option<&str> {
        self.identity.as_ref().map(|i| i.email.as_str()).filter(|e| !e.is_empty())
    }
}
