//! Query-specific error types
//!
//! Invalid input to the query engine. All of these are reported to the
//! caller synchronously; nothing is retried.
//!
//! # Error Types
//!
//! - **`EmptyQuery`**: Blank tag-query input, distinct from a query
//!   with no matches
//! - **`MalformedQuery`**: Input that does not fit the documented
//!   grammar (bad term shape, or more than two terms)
//! - **`InvalidDateRange`**: Date-range search with the start date
//!   after the end date

use thiserror::Error;

/// Errors raised while parsing or evaluating a search
#[derive(Debug, Error)]
pub enum QueryError {
    /// Blank input string
    #[error("Empty query: enter Name=Value, optionally joined by AND/OR")]
    EmptyQuery,

    /// Input does not match the two-term grammar
    #[error("Malformed query '{0}': expected Name=Value, optionally joined by one AND/OR")]
    MalformedQuery(String),

    /// Start date is after the end date
    #[error("Invalid date range: start must not be after end")]
    InvalidDateRange,
}
