//! Keep a piece of UI state in sync with one query-string parameter.
//!
//! A [`QueryBinding`] reads its initial value from the current URL and, on
//! every change, rewrites the query string in place without adding a
//! history entry. Empty values remove the parameter.
//!
//! With the `frontend` feature, [`hooks::use_url_query`] offers the same
//! behavior as a Leptos hook on top of the browser address bar.

pub mod binding;
pub mod config;
pub mod error;
#[cfg(feature = "frontend")]
pub mod hooks;
pub mod location;
pub mod query;

#[cfg(test)]
mod config_test;

pub use binding::{QueryBinding, SubscriptionId, initial_value, synchronize, synchronize_renamed};
pub use config::BindingConfig;
pub use error::{QueryError, QueryResult};
#[cfg(feature = "frontend")]
pub use location::BrowserLocation;
pub use location::{LocationStore, MemoryLocation};
pub use query::QueryMap;
