//! Location stores - where a binding reads and writes the current URL.
//!
//! The binding never touches a global. It talks to a `LocationStore`, so the
//! same logic runs against the browser address bar or an in-memory URL.

#[cfg(feature = "frontend")]
mod browser;
mod memory;
#[cfg(test)]
mod memory_test;

use std::rc::Rc;

#[cfg(test)]
use mockall::automock;

use crate::error::QueryResult;
use crate::query::QueryMap;

#[cfg(feature = "frontend")]
pub use browser::BrowserLocation;
pub use memory::MemoryLocation;

/// Read and replace the query component of the current URL.
#[cfg_attr(test, automock)]
pub trait LocationStore {
    /// Parse the current query string.
    fn read(&self) -> QueryResult<QueryMap>;

    /// Replace the query component in place, keeping path and fragment.
    ///
    /// Must not add a history entry. An empty map drops the `?`.
    fn replace(&self, query: &QueryMap) -> QueryResult<()>;
}

impl<L: LocationStore + ?Sized> LocationStore for &L {
    fn read(&self) -> QueryResult<QueryMap> {
        (**self).read()
    }

    fn replace(&self, query: &QueryMap) -> QueryResult<()> {
        (**self).replace(query)
    }
}

impl<L: LocationStore + ?Sized> LocationStore for Rc<L> {
    fn read(&self) -> QueryResult<QueryMap> {
        (**self).read()
    }

    fn replace(&self, query: &QueryMap) -> QueryResult<()> {
        (**self).replace(query)
    }
}
