//! Pure functions for mapping store errors to HTTP status codes.

use super::StoreError;

/// Maps a [`StoreError`] to an HTTP status code.
///
/// - `Conversion` -> 400 (Bad Request)
/// - `Validation` -> 400 (Bad Request)
/// - `NotFound` -> 404 (Not Found)
/// - `ConnectionFailed` -> 503 (Service Unavailable)
/// - `Timeout` -> 504 (Gateway Timeout)
/// - `RequestFailed` -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use kvapi_core::storage::{store_error_to_status_code, StoreError};
///
/// let error = StoreError::NotFound {
///     table: "example-items".to_string(),
///     key: "id=1".to_string(),
/// };
/// assert_eq!(store_error_to_status_code(&error), 404);
/// ```
pub fn store_error_to_status_code(error: &StoreError) -> u16 {
    match error {
        StoreError::Conversion(_) | StoreError::Validation(_) => 400,
        StoreError::NotFound { .. } => 404,
        StoreError::ConnectionFailed(_) => 503,
        StoreError::Timeout(_) => 504,
        StoreError::RequestFailed(_) => 500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::ConversionError;

    #[test]
    fn test_conversion_maps_to_400() {
        let error = StoreError::Conversion(ConversionError::NotAnObject { kind: "string" });
        assert_eq!(store_error_to_status_code(&error), 400);
    }

    #[test]
    fn test_validation_maps_to_400() {
        let error = StoreError::Validation("Missing key attribute 'id'".to_string());
        assert_eq!(store_error_to_status_code(&error), 400);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let error = StoreError::NotFound {
            table: "t".to_string(),
            key: "id=1".to_string(),
        };
        assert_eq!(store_error_to_status_code(&error), 404);
    }

    #[test]
    fn test_connection_failed_maps_to_503() {
        let error = StoreError::ConnectionFailed("dns error".to_string());
        assert_eq!(store_error_to_status_code(&error), 503);
    }

    #[test]
    fn test_timeout_maps_to_504() {
        let error = StoreError::Timeout("scan".to_string());
        assert_eq!(store_error_to_status_code(&error), 504);
    }

    #[test]
    fn test_request_failed_maps_to_500() {
        let error = StoreError::RequestFailed("throughput exceeded".to_string());
        assert_eq!(store_error_to_status_code(&error), 500);
    }
}
