//! API error taxonomy.
//!
//! Every failure surfaced to a client maps to a stable numeric code, an error
//! name, and an HTTP status. Persistence details are logged server-side and
//! never echoed back.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::gateway::types::{ApiResponse, error_codes};

#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or missing required field.
    #[error("{0}")]
    InvalidArgument(String),

    /// Password policy violation; no hash was produced.
    #[error("{0}")]
    WeakCredential(String),

    /// Email is already registered.
    #[error("Email already exists")]
    DuplicateIdentity,

    /// Missing/invalid/expired token, or bad login credentials.
    /// The message never reveals which half of a credential pair was wrong.
    #[error("{0}")]
    Unauthenticated(&'static str),

    /// Valid token, insufficient role.
    #[error("Insufficient privileges")]
    Forbidden,

    /// Referenced user/feedback/log subject is absent.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Storage I/O failure during a primary operation.
    #[error("storage failure: {0}")]
    Persistence(#[from] sqlx::Error),
}

impl ApiError {
    /// Stable numeric error code.
    pub fn code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) => error_codes::INVALID_PARAMETER,
            Self::WeakCredential(_) => error_codes::WEAK_CREDENTIAL,
            Self::DuplicateIdentity => error_codes::DUPLICATE_IDENTITY,
            Self::Unauthenticated(_) => error_codes::UNAUTHENTICATED,
            Self::Forbidden => error_codes::FORBIDDEN,
            Self::NotFound(_) => error_codes::NOT_FOUND,
            Self::Persistence(_) => error_codes::INTERNAL_ERROR,
        }
    }

    /// Error name string.
    pub fn name(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::WeakCredential(_) => "WEAK_CREDENTIAL",
            Self::DuplicateIdentity => "DUPLICATE_IDENTITY",
            Self::Unauthenticated(_) => "UNAUTHENTICATED",
            Self::Forbidden => "FORBIDDEN",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Persistence(_) => "PERSISTENCE_FAILURE",
        }
    }

    /// HTTP status code.
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::InvalidArgument(_) | Self::WeakCredential(_) | Self::DuplicateIdentity => {
                StatusCode::BAD_REQUEST
            }
            Self::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to expose to untrusted clients.
    fn client_message(&self) -> String {
        match self {
            // Storage detail stays in the server log only.
            Self::Persistence(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Persistence(ref e) = self {
            tracing::error!("persistence failure: {}", e);
        }
        let body = ApiResponse::<()>::error(self.code(), self.client_message());
        (self.http_status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            ApiError::InvalidArgument("x".into()).code(),
            error_codes::INVALID_PARAMETER
        );
        assert_eq!(ApiError::Forbidden.code(), error_codes::FORBIDDEN);
        // Any authentication failure, bearer or credential, reports 2001.
        assert_eq!(ApiError::Unauthenticated("x").code(), 2001);
        assert_eq!(
            ApiError::Unauthenticated("x").code(),
            error_codes::UNAUTHENTICATED
        );
    }

    #[test]
    fn test_http_status() {
        assert_eq!(
            ApiError::WeakCredential("weak".into()).http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Unauthenticated("no token").http_status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ApiError::Forbidden.http_status(), StatusCode::FORBIDDEN);
        assert_eq!(
            ApiError::NotFound("Feedback").http_status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_persistence_message_is_generic() {
        let err = ApiError::Persistence(sqlx::Error::PoolTimedOut);
        assert_eq!(err.client_message(), "Internal server error");
        assert_eq!(err.name(), "PERSISTENCE_FAILURE");
    }
}
