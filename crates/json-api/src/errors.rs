//! HTTP error envelope.

use salvo::{Scribe, http::StatusCode, prelude::Json};
use serde::{Deserialize, Serialize};

/// Body shared by every error response.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ErrorBody {
    /// Always `false` for errors
    pub success: bool,

    /// Human-readable description of what went wrong
    pub message: String,
}

/// An HTTP error carrying a status code and an envelope body.
///
/// Rendered as `{"success": false, "message": "..."}` so clients see the
/// same shape on every path, success or failure.
#[derive(Debug)]
pub(crate) struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub(crate) fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub(crate) fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub(crate) fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub(crate) fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub(crate) fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}

impl Scribe for ApiError {
    fn render(self, res: &mut salvo::Response) {
        res.status_code(self.status);

        Json(ErrorBody {
            success: false,
            message: self.message,
        })
        .render(res);
    }
}
