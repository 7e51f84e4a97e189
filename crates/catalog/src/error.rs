//! Error types for the catalog crate.
//!
//! Every failure here is recoverable: a missing movie or a bad rating leaves
//! the catalog untouched and hands the caller one of these values.

use crate::types::MovieId;
use thiserror::Error;

/// Errors returned by mutating catalog operations
///
/// Rust concept: the `#[derive(Error)]` macro from thiserror implements
/// `std::error::Error` and `Display` from the `#[error(...)]` attributes
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No movie with this id exists in the catalog
    #[error("No movie found with id: {id}")]
    MovieNotFound { id: MovieId },

    /// Rating value outside the inclusive range 1..=5
    #[error("Invalid rating {rating}: must be between 1 and 5")]
    InvalidRating { rating: i32 },
}

impl CatalogError {
    pub fn not_found(id: impl Into<MovieId>) -> Self {
        Self::MovieNotFound { id: id.into() }
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CatalogError::not_found("abc123xyz");
        assert_eq!(err.to_string(), "No movie found with id: abc123xyz");

        let err = CatalogError::InvalidRating { rating: 7 };
        assert_eq!(err.to_string(), "Invalid rating 7: must be between 1 and 5");
    }
}
