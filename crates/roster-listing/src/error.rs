//! Error types for member listings.
//!
//! Errors fall in two classes the transport must tell apart:
//! - [`ClientInputError`]: the request itself is wrong; report it, don't retry
//! - [`StoreError`]: the store failed; a server-side failure
//!
//! An empty match set is never an error.

use std::time::Duration;

use roster_seeker::SeekerError;
use serde::Serialize;
use thiserror::Error;

/// Top-level error returned by the listing service.
#[derive(Debug, Error)]
pub enum ListingError {
    /// The request was rejected before the store was touched.
    #[error("invalid request: {0}")]
    ClientInput(#[from] ClientInputError),

    /// The store failed or returned an unusable result.
    #[error("store failure: {0}")]
    Infrastructure(#[from] StoreError),
}

impl ListingError {
    /// Returns `true` if the caller sent a bad request.
    pub fn is_client_error(&self) -> bool {
        matches!(self, ListingError::ClientInput(_))
    }

    /// Returns the machine-readable code of a client error.
    pub fn code(&self) -> Option<ClientErrorCode> {
        match self {
            ListingError::ClientInput(err) => Some(err.code),
            ListingError::Infrastructure(_) => None,
        }
    }
}

/// Stable, machine-readable client error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClientErrorCode {
    /// A page size was given without a page number.
    MissingPaginationCursor,
    /// The page size is below 1.
    InvalidPageSize,
    /// The page number is negative.
    InvalidPageNumber,
    /// A filter entry could not be turned into a predicate.
    InvalidFilter,
}

impl ClientErrorCode {
    /// Returns the code as sent to clients.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientErrorCode::MissingPaginationCursor => "MISSING_PAGINATION_CURSOR",
            ClientErrorCode::InvalidPageSize => "INVALID_PAGE_SIZE",
            ClientErrorCode::InvalidPageNumber => "INVALID_PAGE_NUMBER",
            ClientErrorCode::InvalidFilter => "INVALID_FILTER",
        }
    }
}

impl std::fmt::Display for ClientErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A request the caller must fix.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{code}: {message}")]
pub struct ClientInputError {
    pub code: ClientErrorCode,
    pub message: String,
}

impl ClientInputError {
    pub fn new(code: ClientErrorCode, message: impl Into<String>) -> Self {
        ClientInputError {
            code,
            message: message.into(),
        }
    }

    pub fn missing_pagination_cursor() -> Self {
        Self::new(
            ClientErrorCode::MissingPaginationCursor,
            "missing pagination cursor: `skip` is required when `first` is set",
        )
    }
}

impl From<SeekerError> for ClientInputError {
    fn from(err: SeekerError) -> Self {
        ClientInputError::new(ClientErrorCode::InvalidFilter, err.to_string())
    }
}

/// Failures reported by, or about, the member store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The store could not be reached or refused the query.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The store did not answer within the configured deadline.
    #[error("store call timed out after {0:?}")]
    Timeout(Duration),

    /// The store call was cancelled before it completed.
    #[error("store call cancelled")]
    Cancelled,

    /// The store answered with something the service cannot use.
    #[error("malformed store result: {0}")]
    Malformed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification() {
        let client = ListingError::from(ClientInputError::missing_pagination_cursor());
        assert!(client.is_client_error());
        assert_eq!(client.code(), Some(ClientErrorCode::MissingPaginationCursor));

        let infra = ListingError::from(StoreError::Cancelled);
        assert!(!infra.is_client_error());
        assert_eq!(infra.code(), None);
    }

    #[test]
    fn client_error_serializes_its_code() {
        let err = ClientInputError::missing_pagination_cursor();
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "MISSING_PAGINATION_CURSOR");
        assert!(err.to_string().starts_with("MISSING_PAGINATION_CURSOR: "));
    }

    #[test]
    fn code_strings_match_serde() {
        for code in [
            ClientErrorCode::MissingPaginationCursor,
            ClientErrorCode::InvalidPageSize,
            ClientErrorCode::InvalidPageNumber,
            ClientErrorCode::InvalidFilter,
        ] {
            assert_eq!(serde_json::to_value(code).unwrap(), code.as_str());
        }
    }
}
