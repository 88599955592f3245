//! Browser localStorage helpers for UI preference persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes the web-sys glue for reading and writing JSON values so
//! components can persist preferences without repeating it. A missing window
//! or storage (or a quota failure) degrades to a silent no-op.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// localStorage key for the toolbar preferences.
pub const PREFS_KEY: &str = "doodlepad.prefs";

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Load a JSON value from `localStorage` for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = storage()?.get_item(key).ok().flatten()?;
    serde_json::from_str(&raw).ok()
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    let Some(storage) = storage() else {
        return;
    };
    let Ok(raw) = serde_json::to_string(value) else {
        return;
    };
    if storage.set_item(key, &raw).is_err() {
        log::warn!("failed to persist {key} to localStorage");
    }
}
