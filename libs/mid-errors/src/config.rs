//! Settings for turning a request's errors into a client response.
//!
//! Hosts load this from their own configuration section; every field has a
//! default so an absent section behaves like `ErrorResponseConfig::default()`.

use http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::error_type::ErrorType;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ErrorResponseConfig {
    /// Types rendered into the response body.
    pub expose: ErrorType,
    /// Types written to the log before rendering.
    pub log: ErrorType,
    pub log_private: bool,
    /// Response status code.
    pub status: u16,
}

impl Default for ErrorResponseConfig {
    fn default() -> Self {
        Self {
            expose: ErrorType::PUBLIC,
            log: ErrorType::PRIVATE,
            log_private: true,
            status: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
        }
    }
}

impl ErrorResponseConfig {
    /// Configured status, or 500 when the configured code is not a valid HTTP status.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}
