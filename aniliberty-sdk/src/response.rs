//! The uniform result envelope returned by every endpoint call

use crate::error::ApiError;

/// Outcome of one API call
///
/// Every endpoint method returns an `ApiResponse`; failures are never raised.
/// A `Success` always has a 2xx `status`. A `Failure` carries either the
/// non-2xx HTTP status or `0` when no classified HTTP response exists
/// (connection failure, timeout, unreadable body).
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub enum ApiResponse<T> {
    /// The server answered with a 2xx status
    Success {
        /// HTTP status code
        status: u16,
        /// Decoded body, `None` when the response carried no JSON body
        data: Option<T>,
    },

    /// The call failed
    Failure {
        /// HTTP status code, or 0 for transport-level failures
        status: u16,
        /// Structured error payload
        error: ApiError,
    },
}

impl<T> ApiResponse<T> {
    /// Build a transport-level failure (status 0)
    pub(crate) fn transport(error: ApiError) -> Self {
        ApiResponse::Failure { status: 0, error }
    }

    /// HTTP status code, 0 if the request never reached the server
    pub fn status(&self) -> u16 {
        match self {
            ApiResponse::Success { status, .. } | ApiResponse::Failure { status, .. } => *status,
        }
    }

    /// Returns true for any 2xx response, with or without a body
    pub fn is_success(&self) -> bool {
        matches!(self, ApiResponse::Success { .. })
    }

    /// Returns true for a 2xx response that carried a body
    pub fn has_data(&self) -> bool {
        matches!(self, ApiResponse::Success { data: Some(_), .. })
    }

    /// Returns true for any failure, including transport failures
    pub fn is_error(&self) -> bool {
        matches!(self, ApiResponse::Failure { .. })
    }

    /// Borrow the decoded body
    pub fn data(&self) -> Option<&T> {
        match self {
            ApiResponse::Success { data, .. } => data.as_ref(),
            ApiResponse::Failure { .. } => None,
        }
    }

    /// Take the decoded body
    pub fn into_data(self) -> Option<T> {
        match self {
            ApiResponse::Success { data, .. } => data,
            ApiResponse::Failure { .. } => None,
        }
    }

    /// Borrow the error payload
    pub fn error(&self) -> Option<&ApiError> {
        match self {
            ApiResponse::Success { .. } => None,
            ApiResponse::Failure { error, .. } => Some(error),
        }
    }

    /// Convert into a `Result` for use with `?`
    pub fn into_result(self) -> Result<Option<T>, ApiError> {
        match self {
            ApiResponse::Success { data, .. } => Ok(data),
            ApiResponse::Failure { error, .. } => Err(error),
        }
    }

    /// Transform the success payload, keeping the status
    pub fn map<U, F>(self, f: F) -> ApiResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            ApiResponse::Success { status, data } => ApiResponse::Success {
                status,
                data: data.map(f),
            },
            ApiResponse::Failure { status, error } => ApiResponse::Failure { status, error },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn success(data: Option<&'static str>) -> ApiResponse<&'static str> {
        ApiResponse::Success { status: 200, data }
    }

    fn failure(status: u16) -> ApiResponse<&'static str> {
        ApiResponse::Failure {
            status,
            error: ApiError::http_status(status),
        }
    }

    #[test]
    fn test_success_accessors() {
        let response = success(Some("payload"));
        assert_eq!(response.status(), 200);
        assert!(response.is_success());
        assert!(response.has_data());
        assert!(!response.is_error());
        assert_eq!(response.data(), Some(&"payload"));
        assert!(response.error().is_none());
    }

    #[test]
    fn test_success_without_body() {
        let response = success(None);
        assert!(response.is_success());
        assert!(!response.has_data());
        assert!(!response.is_error());
        assert_eq!(response.into_result(), Ok(None));
    }

    #[test]
    fn test_failure_accessors() {
        let response = failure(404);
        assert_eq!(response.status(), 404);
        assert!(response.is_error());
        assert!(response.data().is_none());
        assert_eq!(
            response.error().and_then(|e| e.message.as_deref()),
            Some("HTTP Error 404")
        );
    }

    #[test]
    fn test_transport_failure_has_zero_status() {
        let response: ApiResponse<()> = ApiResponse::transport(ApiError::new("Connection failed"));
        assert_eq!(response.status(), 0);
        assert!(response.is_error());
    }

    #[test]
    fn test_into_result_failure() {
        let err = failure(500).into_result().unwrap_err();
        assert_eq!(err.message.as_deref(), Some("HTTP Error 500"));
    }

    #[test]
    fn test_map_preserves_status() {
        let mapped = ApiResponse::Success {
            status: 201,
            data: Some(21),
        }
        .map(|n| n * 2);
        assert_eq!(mapped.status(), 201);
        assert_eq!(mapped.into_data(), Some(42));

        let mapped_failure = failure(422).map(|s| s.len());
        assert_eq!(mapped_failure.status(), 422);
        assert!(mapped_failure.is_error());
    }
}
