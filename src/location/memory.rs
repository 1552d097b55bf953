//! In-memory location with a simulated history stack.

use std::cell::{Cell, RefCell};

use url::{Position, Url};

use super::LocationStore;
use crate::error::{QueryError, QueryResult};
use crate::query::QueryMap;

const BASE_URL: &str = "http://localhost/";

/// A URL held in memory, for tests and non-browser hosts.
///
/// Tracks history depth and the number of in-place replacements so callers
/// can check that nothing was pushed.
#[derive(Debug)]
pub struct MemoryLocation {
    url: RefCell<Url>,
    history_len: Cell<usize>,
    replace_count: Cell<usize>,
}

impl MemoryLocation {
    /// Create a location from an absolute URL or a path such as
    /// `/search?q=rust#results`.
    pub fn new(href: &str) -> QueryResult<Self> {
        let url = resolve(None, href)?;
        Ok(Self {
            url: RefCell::new(url),
            history_len: Cell::new(1),
            replace_count: Cell::new(0),
        })
    }

    /// Path, query and fragment of the current URL.
    pub fn href(&self) -> String {
        self.url.borrow()[Position::BeforePath..].to_string()
    }

    pub fn path(&self) -> String {
        self.url.borrow().path().to_string()
    }

    /// Query with its leading `?`, or an empty string.
    pub fn search(&self) -> String {
        self.url
            .borrow()
            .query()
            .map(|query| format!("?{query}"))
            .unwrap_or_default()
    }

    pub fn fragment(&self) -> Option<String> {
        self.url.borrow().fragment().map(str::to_string)
    }

    pub fn history_len(&self) -> usize {
        self.history_len.get()
    }

    pub fn replace_count(&self) -> usize {
        self.replace_count.get()
    }

    /// Navigate to `href`, adding a history entry.
    pub fn push(&self, href: &str) -> QueryResult<()> {
        let current = self.url.borrow().clone();
        let next = resolve(Some(&current), href)?;
        *self.url.borrow_mut() = next;
        self.history_len.set(self.history_len.get() + 1);
        Ok(())
    }

    /// Overwrite the raw query string, as code outside any binding would.
    pub fn set_search(&self, search: &str) {
        let search = search.strip_prefix('?').unwrap_or(search);
        let query = (!search.is_empty()).then_some(search);
        self.url.borrow_mut().set_query(query);
    }
}

impl LocationStore for MemoryLocation {
    fn read(&self) -> QueryResult<QueryMap> {
        Ok(QueryMap::parse(self.url.borrow().query().unwrap_or("")))
    }

    fn replace(&self, query: &QueryMap) -> QueryResult<()> {
        let serialized = query.to_query_string();
        let query = (!serialized.is_empty()).then_some(serialized.as_str());

        self.url.borrow_mut().set_query(query);
        self.replace_count.set(self.replace_count.get() + 1);
        Ok(())
    }
}

fn resolve(current: Option<&Url>, href: &str) -> QueryResult<Url> {
    let invalid = |err: url::ParseError| QueryError::InvalidUrl {
        href: href.to_string(),
        message: err.to_string(),
    };

    let base = match current {
        Some(url) => url.clone(),
        None => Url::parse(BASE_URL).map_err(invalid)?,
    };
    base.join(href).map_err(invalid)
}
