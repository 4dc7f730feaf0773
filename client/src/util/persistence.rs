//! Browser `localStorage` access.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers centralize browser-only read/write behavior so the session
//! flag store and the remembered identity share one piece of `web-sys` glue.
//! Outside the browser build every read is empty and every write is a no-op.

#[cfg(test)]
#[path = "persistence_test.rs"]
mod persistence_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Raw string stored under `key`.
pub fn load_raw(key: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        local_storage()?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
        None
    }
}

pub fn save_raw(key: &str, value: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = local_storage() {
            if storage.set_item(key, value).is_err() {
                log::warn!("localStorage write failed for {key}");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (key, value);
    }
}

pub fn remove(key: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = local_storage() {
            if storage.remove_item(key).is_err() {
                log::warn!("localStorage remove failed for {key}");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
    }
}

/// Load a JSON value from `localStorage` for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = load_raw(key)?;
    serde_json::from_str(&raw).ok()
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => save_raw(key, &raw),
        Err(e) => log::warn!("could not serialize {key}: {e}"),
    }
}
