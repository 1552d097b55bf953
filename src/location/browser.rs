//! Browser address bar backed by `window.location` and `window.history`.

use wasm_bindgen::JsValue;

use super::LocationStore;
use crate::error::{QueryError, QueryResult};
use crate::query::QueryMap;

/// The current document's URL.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserLocation;

impl BrowserLocation {
    fn window() -> QueryResult<web_sys::Window> {
        web_sys::window().ok_or_else(|| QueryError::Browser {
            message: "no global window".to_string(),
        })
    }
}

impl LocationStore for BrowserLocation {
    fn read(&self) -> QueryResult<QueryMap> {
        let search = Self::window()?
            .location()
            .search()
            .map_err(|err| js_error("location.search", err))?;
        Ok(QueryMap::parse(&search))
    }

    fn replace(&self, query: &QueryMap) -> QueryResult<()> {
        let window = Self::window()?;
        let location = window.location();

        let pathname = location
            .pathname()
            .map_err(|err| js_error("location.pathname", err))?;
        let hash = location
            .hash()
            .map_err(|err| js_error("location.hash", err))?;

        let url = if query.is_empty() {
            format!("{pathname}{hash}")
        } else {
            format!("{pathname}?{query}{hash}")
        };

        let history = window
            .history()
            .map_err(|err| js_error("window.history", err))?;
        // Keep whatever state a router stored on the current entry.
        let state = history.state().unwrap_or(JsValue::NULL);
        history
            .replace_state_with_url(&state, "", Some(&url))
            .map_err(|err| js_error("history.replaceState", err))
    }
}

fn js_error(call: &str, err: JsValue) -> QueryError {
    QueryError::Browser {
        message: format!("{call} failed: {err:?}"),
    }
}
