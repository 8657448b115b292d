//! Error types for coordinate construction, conversion and distance queries

use thiserror::Error;

/// Main error type for the orthodrome library
///
/// Every variant describes a programming or input error. None of them is
/// transient, so callers should not retry the failing call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordinateError {
    /// A value violated a range or presence requirement
    ///
    /// Raised for out-of-range latitude, longitude or radius, non-finite
    /// components, absent coordinates and mismatched radii.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A conversion has no unique result
    ///
    /// Raised when the cartesian origin is converted to spheric form, where
    /// latitude and longitude are undefined.
    #[error("Degenerate conversion: {0}")]
    DegenerateConversion(String),
}

impl CoordinateError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        CoordinateError::InvalidArgument(message.into())
    }

    pub(crate) fn degenerate(message: impl Into<String>) -> Self {
        CoordinateError::DegenerateConversion(message.into())
    }

    /// Returns true for [`CoordinateError::InvalidArgument`]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, CoordinateError::InvalidArgument(_))
    }

    /// Returns true for [`CoordinateError::DegenerateConversion`]
    pub fn is_degenerate_conversion(&self) -> bool {
        matches!(self, CoordinateError::DegenerateConversion(_))
    }
}

/// Result type for orthodrome operations
pub type Result<T> = std::result::Result<T, CoordinateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoordinateError::invalid("latitude 91 is out of range");
        assert_eq!(
            err.to_string(),
            "Invalid argument: latitude 91 is out of range"
        );
        assert!(err.is_invalid_argument());
        assert!(!err.is_degenerate_conversion());

        let err = CoordinateError::degenerate("origin has no direction");
        assert_eq!(
            err.to_string(),
            "Degenerate conversion: origin has no direction"
        );
        assert!(err.is_degenerate_conversion());
    }
}
