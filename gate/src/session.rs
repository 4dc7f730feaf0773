//! Session flag storage and the typed session view over it.
//!
//! SYSTEM CONTEXT
//! ==============
//! The flag is written by the login and logout flows and read by the route
//! guard. Storage is injected so the browser build can use `localStorage`
//! while tests use [`MemoryFlagStore`].

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Storage key holding the signed-in flag.
pub const SESSION_FLAG_KEY: &str = "isLoggedIn";

/// The only stored value that counts as signed in.
pub const AUTHENTICATED_SENTINEL: &str = "true";

/// Client-scoped key/value storage that survives reloads.
///
/// Methods take `&self`: backing stores (browser storage, `RefCell` maps)
/// handle their own interior mutability on the single UI thread.
pub trait FlagStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

impl<T: FlagStore + ?Sized> FlagStore for Rc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value);
    }

    fn remove(&self, key: &str) {
        (**self).remove(key);
    }
}

impl<T: FlagStore + ?Sized> FlagStore for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value);
    }

    fn remove(&self, key: &str) {
        (**self).remove(key);
    }
}

/// In-memory [`FlagStore`] for tests and non-browser builds.
#[derive(Debug, Default)]
pub struct MemoryFlagStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryFlagStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a raw session flag value.
    #[must_use]
    pub fn with_flag(value: &str) -> Self {
        let store = Self::new();
        store.set(SESSION_FLAG_KEY, value);
        store
    }

    /// Number of writes currently held; used by tests to check for stray keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }
}

impl FlagStore for MemoryFlagStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

/// Typed access to the signed-in flag.
#[derive(Debug, Clone, Default)]
pub struct SessionState<S> {
    store: S,
}

impl<S: FlagStore> SessionState<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// `true` only when the stored flag equals [`AUTHENTICATED_SENTINEL`] exactly.
    pub fn is_authenticated(&self) -> bool {
        self.store
            .get(SESSION_FLAG_KEY)
            .is_some_and(|value| value == AUTHENTICATED_SENTINEL)
    }

    /// Record a confirmed sign-in.
    pub fn set_authenticated(&self) {
        self.store.set(SESSION_FLAG_KEY, AUTHENTICATED_SENTINEL);
    }

    /// Forget the sign-in; the key is removed rather than set to `"false"`.
    ///
    /// Returns `false` when the store still grants access afterwards, which
    /// means the removal did not reach the backing storage.
    #[must_use]
    pub fn clear_authenticated(&self) -> bool {
        self.store.remove(SESSION_FLAG_KEY);
        !self.is_authenticated()
    }

    /// Raw stored flag, for diagnostics.
    pub fn raw_flag(&self) -> Option<String> {
        self.store.get(SESSION_FLAG_KEY)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
