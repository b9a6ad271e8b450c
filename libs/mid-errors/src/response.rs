//! Axum integration: render a request's errors as the HTTP response.

use axum::response::{IntoResponse, Response};
use http::{HeaderValue, StatusCode, header};

use crate::config::ErrorResponseConfig;
use crate::error_msgs::{ErrorMsgs, ErrorsJson};

/// Content type of error bodies.
pub const APPLICATION_JSON: &str = "application/json";

/// Status plus the JSON of the exposed errors.
#[derive(Debug, Clone)]
#[must_use]
pub struct ErrorsResponse {
    pub status: StatusCode,
    pub body: ErrorsJson,
}

impl ErrorsResponse {
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }
}

impl ErrorMsgs {
    /// Logs the configured types, then keeps the exposed ones for the body.
    pub fn to_response(&self, config: &ErrorResponseConfig) -> ErrorsResponse {
        if config.log_private {
            self.log_by_type(config.log);
        }
        ErrorsResponse {
            status: config.status_code(),
            body: self.by_type(config.expose).json(),
        }
    }
}

impl IntoResponse for ErrorsResponse {
    fn into_response(self) -> Response {
        if self.body.is_empty() {
            return self.status.into_response();
        }

        let mut resp = axum::Json(self.body).into_response();
        *resp.status_mut() = self.status;
        resp.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(APPLICATION_JSON),
        );
        resp
    }
}
