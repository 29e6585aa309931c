//! Browser Bindings
//!
//! `localStorage`, blocking dialogs and the JS clock behind the
//! todo-store traits.

use chrono::{DateTime, TimeZone, Utc};
use log::warn;
use wasm_bindgen::{JsCast, JsValue};

use todo_store::{Clock, KeyValueStorage, Prompter, StorageError};

// ========================
// Storage
// ========================

/// `window.localStorage`
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    /// Fails when there is no window or storage is blocked (e.g. privacy mode)
    pub fn open() -> Result<Self, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        let storage = window
            .local_storage()
            .map_err(|_| StorageError::Unavailable)?
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { storage })
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.get_item(key).map_err(storage_error)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage.set_item(key, value).map_err(storage_error)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.storage.remove_item(key).map_err(storage_error)
    }
}

fn storage_error(err: JsValue) -> StorageError {
    match err.dyn_ref::<web_sys::DomException>() {
        Some(ex) if ex.name() == "QuotaExceededError" => StorageError::QuotaExceeded,
        Some(ex) => StorageError::Backend(format!("{}: {}", ex.name(), ex.message())),
        None => StorageError::Backend(format!("{:?}", err)),
    }
}

// ========================
// Dialogs
// ========================

/// `confirm`, `prompt` and `alert` on the current window
pub struct BrowserDialogs;

impl Prompter for BrowserDialogs {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn prompt(&self, message: &str, default: &str) -> Option<String> {
        web_sys::window()?
            .prompt_with_message_and_default(message, default)
            .ok()
            .flatten()
    }

    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}

// ========================
// Clock
// ========================

/// `Date.now()`
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now(&self) -> DateTime<Utc> {
        let millis = js_sys::Date::now() as i64;
        match Utc.timestamp_millis_opt(millis).single() {
            Some(now) => now,
            None => {
                warn!("Date.now() out of range: {}", millis);
                DateTime::<Utc>::default()
            }
        }
    }
}
