#![forbid(unsafe_code)]

//! `window.localStorage` as a [`StorageBackend`].

use teems_runtime::{StorageBackend, StorageError, StorageResult};
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// Browser local storage.
///
/// Private browsing modes and sandboxed frames may deny access; the backend
/// then reports [`StorageError::Unavailable`] from every call.
pub struct LocalStorage {
    storage: Option<Storage>,
}

fn js_error(context: &str, err: &JsValue) -> StorageError {
    let detail = err.as_string().unwrap_or_else(|| format!("{err:?}"));
    StorageError::Unavailable(format!("{context}: {detail}"))
}

impl LocalStorage {
    /// Open the current window's local storage.
    #[must_use]
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            tracing::warn!("localStorage is not accessible");
        }
        Self { storage }
    }

    fn storage(&self) -> StorageResult<&Storage> {
        self.storage
            .as_ref()
            .ok_or_else(|| StorageError::Unavailable("localStorage is not accessible".into()))
    }
}

impl StorageBackend for LocalStorage {
    fn name(&self) -> &str {
        "localStorage"
    }

    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|e| js_error("getItem", &e))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| js_error("setItem", &e))
    }

    fn is_available(&self) -> bool {
        self.storage.is_some()
    }
}
