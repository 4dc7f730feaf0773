//! `localStorage`-backed session flag.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route guard reads this flag on every navigation; the login page sets
//! it after the provider confirms a sign-in and the logout route clears it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use gate::{FlagStore, SessionState};

use crate::util::persistence;

/// [`FlagStore`] over the browser's `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserFlagStore;

impl FlagStore for BrowserFlagStore {
    fn get(&self, key: &str) -> Option<String> {
        persistence::load_raw(key)
    }

    fn set(&self, key: &str, value: &str) {
        persistence::save_raw(key, value);
    }

    fn remove(&self, key: &str) {
        persistence::remove(key);
    }
}

/// Session view over the browser flag.
pub fn browser_session() -> SessionState<BrowserFlagStore> {
    SessionState::new(BrowserFlagStore)
}
