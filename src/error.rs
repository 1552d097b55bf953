//! Error types for query bindings.
//!
//! Parsing and serializing query strings never fail. Errors only come from
//! invalid binding names and from the location backends.

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised by bindings and location stores.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Query parameter name cannot be empty")]
    #[diagnostic(
        code(url_query::empty_name),
        help("Bind to a non-empty key such as \"q\" or \"page\"")
    )]
    EmptyName,

    #[error("Invalid URL '{href}': {message}")]
    #[diagnostic(code(url_query::location::invalid_url))]
    InvalidUrl { href: String, message: String },

    #[error("Browser error: {message}")]
    #[diagnostic(code(url_query::location::browser))]
    Browser { message: String },
}

/// Result type for query binding operations.
pub type QueryResult<T> = Result<T, QueryError>;
