//! Error types for U-Loading.

use thiserror::Error;

/// Result type alias for U-Loading operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during container loading.
///
/// Geometric outcomes (an item that does not fit, an empty layer) are never errors;
/// they only show up as fewer placed items in the result.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid input supplied to the engine.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid item dimensions.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Invalid container.
    #[error("Invalid boundary: {0}")]
    InvalidBoundary(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl Error {
    /// The error raised when an optimization call receives no pallet definition.
    pub fn no_pallets() -> Self {
        Error::InvalidInput("No pallets provided".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_pallets_message() {
        let err = Error::no_pallets();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert_eq!(err.to_string(), "Invalid input: No pallets provided");
    }

    #[test]
    fn test_display_prefixes() {
        assert_eq!(
            Error::InvalidGeometry("bad".into()).to_string(),
            "Invalid geometry: bad"
        );
        assert_eq!(
            Error::InvalidBoundary("bad".into()).to_string(),
            "Invalid boundary: bad"
        );
        assert_eq!(
            Error::ConfigError("bad".into()).to_string(),
            "Configuration error: bad"
        );
    }
}
