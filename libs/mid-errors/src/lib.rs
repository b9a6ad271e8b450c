//! Per-request error aggregation for web middleware
//!
//! Handlers record failures into an [`ErrorMsgs`] list while a request is
//! processed; middleware later filters them by [`ErrorType`], logs the private
//! ones and renders the public ones as JSON. It includes:
//! - [`ErrorMsg`], a cause plus classification and optional [`Meta`]
//! - [`ErrorMsgs`], the ordered list with its [`ErrorsJson`] rendering
//! - [`ErrorResponseConfig`] and, with the `axum` feature, `ErrorsResponse`
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod error_msg;
pub mod error_msgs;
pub mod error_type;
pub mod meta;
#[cfg(feature = "axum")]
pub mod response;

pub use config::ErrorResponseConfig;
pub use error_msg::{BoxError, ErrorMsg};
pub use error_msgs::{ErrorMsgs, ErrorsJson};
pub use error_type::{ErrorType, UnknownErrorType};
pub use meta::Meta;
#[cfg(feature = "axum")]
pub use response::{APPLICATION_JSON, ErrorsResponse};
