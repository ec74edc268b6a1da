//! Error type shared by every MealDB client operation.

use thiserror::Error;

/// Errors returned by [`MealDbClient`](crate::client::MealDbClient) operations.
///
/// The API answers "nothing matched" with either an empty body or a `null`
/// envelope value; both become [`MealDbError::NoResults`]. Parser and transport
/// failures keep the underlying message as their `Display` output.
#[derive(Error, Debug)]
pub enum MealDbError {
    /// Empty body, or the envelope key was missing or `null`
    #[error("no results found")]
    NoResults,

    /// Body was not valid JSON, or a payload element had an unexpected shape
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// DNS, connection, timeout or body read failure
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("unexpected HTTP status: {0}")]
    Status(reqwest::StatusCode),
}

impl MealDbError {
    /// True when the API reported no matching records.
    pub fn is_no_results(&self) -> bool {
        matches!(self, MealDbError::NoResults)
    }
}

pub type Result<T> = std::result::Result<T, MealDbError>;
