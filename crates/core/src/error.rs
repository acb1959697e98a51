//! Error types for the stock analyzer.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the stock analyzer.
#[derive(Error, Debug)]
pub enum Error {
    /// Transport failure talking to the data provider.
    #[error("Error fetching from API: {0}")]
    Fetch(String),

    /// The provider rejected the request credentials (HTTP 400).
    #[error("Unauthorized - check your API key")]
    Unauthorized,

    /// Any other non-200 response from the provider.
    #[error("Non-200 response: {0}")]
    Status(u16),

    /// A raw value could not be coerced to its column's field type.
    #[error("Malformed record at row {row}: column '{column}' expected {expected}")]
    MalformedRecord {
        row: usize,
        column: String,
        expected: &'static str,
    },

    /// A mean was requested over a ticker with no records.
    #[error("Empty series for ticker '{0}'")]
    EmptySeries(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a fetch error.
    pub fn fetch(msg: impl Into<String>) -> Self {
        Error::Fetch(msg.into())
    }

    /// Create a malformed record error.
    pub fn malformed(row: usize, column: impl Into<String>, expected: &'static str) -> Self {
        Error::MalformedRecord {
            row,
            column: column.into(),
            expected,
        }
    }

    /// Create an empty series error.
    pub fn empty_series(ticker: impl Into<String>) -> Self {
        Error::EmptySeries(ticker.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_messages() {
        assert_eq!(Error::Unauthorized.to_string(), "Unauthorized - check your API key");
        assert_eq!(Error::Status(422).to_string(), "Non-200 response: 422");
    }

    #[test]
    fn test_malformed_message() {
        let err = Error::malformed(3, "open", "number");
        assert_eq!(
            err.to_string(),
            "Malformed record at row 3: column 'open' expected number"
        );
    }
}
