//! Error types for sheet fetching.

use thiserror::Error;

/// Transport failure for a single sheet.
///
/// Never escapes [`fetch_sheet`](crate::fetch_sheet); it is rendered into the
/// sheet's `error` message instead.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum FetchError {
    /// Export endpoint answered with a non-success status.
    #[error("HTTP {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// Connection, TLS or body transfer failed.
    #[error("network error: {0}")]
    Network(String),

    /// Request exceeded the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// Export URL could not be built.
    #[error("invalid export URL: {0}")]
    InvalidUrl(String),

    /// Sheet is unknown to the source.
    #[error("sheet not found: {0}")]
    NotFound(String),

    /// The fetch task panicked or was aborted.
    #[error("fetch task failed: {0}")]
    Task(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if let Some(status) = err.status() {
            Self::Status {
                status: status.as_u16(),
            }
        } else {
            Self::Network(err.to_string())
        }
    }
}

/// Failure of a whole load cycle, before any sheet is fetched.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    /// No sheets were configured.
    #[error("no sheets configured")]
    NoSheets,

    /// Spreadsheet id is blank.
    #[error("spreadsheet id is empty")]
    MissingSpreadsheetId,

    /// Two sheets share an id.
    #[error("duplicate sheet id '{0}'")]
    DuplicateSheet(String),

    /// The HTTP client could not be created.
    #[error("failed to create HTTP client: {0}")]
    Client(String),
}

/// Result type for single-sheet transport calls.
pub type Result<T> = std::result::Result<T, FetchError>;

/// Result type for load-cycle setup.
pub type LoadResult<T> = std::result::Result<T, LoadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(FetchError::Status { status: 404 }.to_string(), "HTTP 404");
        assert_eq!(LoadError::NoSheets.to_string(), "no sheets configured");
        assert_eq!(
            LoadError::DuplicateSheet("0".to_string()).to_string(),
            "duplicate sheet id '0'"
        );
    }
}
