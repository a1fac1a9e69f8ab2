//! Rejections and their HTTP responses.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use ecverify::VerifyError;
use serde::Serialize;

/// Why a request was rejected.
///
/// Malformed input maps to `400 Bad Request`, missing or wrong credentials to
/// `401 Unauthorized`.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// A required header is absent.
    #[error("missing header {0}")]
    MissingHeader(String),
    /// A header is present but is not valid hex of the expected size.
    #[error("malformed header {0}")]
    MalformedHeader(String),
    /// The body could not be read or exceeds the configured limit.
    #[error("unreadable request body: {0}")]
    Body(#[source] axum::Error),
    /// Verification did not return `Valid`.
    #[error(transparent)]
    Verification(#[from] VerifyError),
    /// A handler asked for a [`VerifiedSigner`](crate::VerifiedSigner) on a
    /// route without the middleware.
    #[error("request is not authenticated")]
    NotAuthenticated,
}

impl AuthError {
    /// HTTP status of the rejection.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MalformedHeader(_) | Self::Body(_) => StatusCode::BAD_REQUEST,
            Self::Verification(e) if e.is_malformed() => StatusCode::BAD_REQUEST,
            Self::MissingHeader(_) | Self::Verification(_) | Self::NotAuthenticated => {
                StatusCode::UNAUTHORIZED
            }
        }
    }

    /// Machine readable code placed in the response body.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingHeader(_) => "MISSING_CREDENTIALS",
            Self::MalformedHeader(_) => "MALFORMED_HEADER",
            Self::Body(_) => "INVALID_BODY",
            Self::Verification(VerifyError::InvalidSignatureEncoding(_)) => "MALFORMED_SIGNATURE",
            Self::Verification(_) | Self::NotAuthenticated => "UNAUTHORIZED",
        }
    }
}

/// JSON error envelope.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Error details.
    pub error: ErrorDetail,
}

/// Code and human readable message.
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    /// See [`AuthError::code`].
    pub code: &'static str,
    /// `Display` of the error.
    pub message: String,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: ErrorDetail {
                code: self.code(),
                message: self.to_string(),
            },
        };
        (self.status(), Json(body)).into_response()
    }
}
