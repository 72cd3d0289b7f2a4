use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use refsift_core::CoreError;
use refsift_ingest::IngestError;
use refsift_session::SessionError;
use thiserror::Error;

/// HTTP-facing error: the core's distinct error kinds mapped to user-facing
/// messages and status codes. User mistakes (wrong file, wrong column,
/// stale session) are 400s; everything else is a 500.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("session expired")]
    SessionExpired,

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::SessionExpired => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "rejected request");
        }
        (status, self.to_string()).into_response()
    }
}

impl From<IngestError> for ApiError {
    fn from(error: IngestError) -> Self {
        // All ingest failures are correctable by the user.
        Self::BadRequest(error.to_string())
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        Self::BadRequest(error.to_string())
    }
}

impl From<SessionError> for ApiError {
    fn from(error: SessionError) -> Self {
        match error {
            SessionError::InvalidSessionId { .. }
            | SessionError::UnknownSession { .. }
            | SessionError::ColumnsNotChosen { .. } => Self::SessionExpired,
            other => Self::Internal(other.to_string()),
        }
    }
}

impl From<refsift_output::OutputError> for ApiError {
    fn from(error: refsift_output::OutputError) -> Self {
        Self::Internal(error.to_string())
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(error: tokio::task::JoinError) -> Self {
        Self::Internal(format!("worker task failed: {error}"))
    }
}

impl From<axum::extract::multipart::MultipartError> for ApiError {
    fn from(error: axum::extract::multipart::MultipartError) -> Self {
        Self::BadRequest(format!("invalid upload: {error}"))
    }
}
