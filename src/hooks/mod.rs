//! Leptos hooks over the browser address bar

mod use_url_query;

pub use use_url_query::*;
