#![forbid(unsafe_code)]

use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::host::SiteHost;
use crate::local_storage::LocalStorage;

/// The site bridge as seen from JavaScript.
///
/// The page script constructs one instance per load with
/// `location.pathname`, forwards inputs as JSON strings, and applies the
/// returned JSON output.
#[wasm_bindgen]
pub struct TeemsWeb {
    host: Option<SiteHost>,
}

#[wasm_bindgen]
impl TeemsWeb {
    #[wasm_bindgen(constructor)]
    pub fn new(path: &str) -> Self {
        let year = js_sys::Date::new_0().get_full_year() as i32;
        let storage = Rc::new(LocalStorage::open());
        Self {
            host: Some(SiteHost::new(path, storage, year)),
        }
    }

    /// Apply one JSON input; returns the JSON output.
    ///
    /// Rejects with a message string on invalid input or after `destroy`.
    pub fn input(&mut self, json: &str) -> Result<String, JsValue> {
        let host = self
            .host
            .as_mut()
            .ok_or_else(|| JsValue::from_str("TeemsWeb was destroyed"))?;
        host.handle_json(json)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Last location pushed by navigation or history.
    pub fn location(&self) -> Option<String> {
        self.host
            .as_ref()
            .and_then(|h| h.location().map(str::to_string))
    }

    /// Explicit teardown for JS callers.
    pub fn destroy(&mut self) {
        self.host = None;
    }
}
