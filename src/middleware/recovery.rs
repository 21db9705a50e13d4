//! # Recovery Boundary
//!
//! Converts a panicking handler into a generic `500 Internal Server Error`
//! instead of tearing down the connection. Used with
//! [`tower_http::catch_panic::CatchPanicLayer::custom`].

use std::any::Any;

use axum::response::{IntoResponse, Response};
use tracing::error;

use crate::error::AppError;

/// Logs the panic payload and answers with [`AppError::Internal`].
///
/// The payload only goes to the log; the client sees the generic body.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<&str>() {
        *s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "unknown panic payload"
    };
    error!(detail, "Handler panicked");

    AppError::Internal.into_response()
}
