//! # Centralized Error Handling
//!
//! This module provides the error types of the service. [`AppError`] covers the
//! failures a request can end in and knows how to turn itself into an HTTP
//! response; [`ServeError`] covers failures of the server process itself.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Errors a request can end in.
///
/// Handlers themselves never fail; these are produced by the router fallback
/// and by the recovery boundary around the handlers.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("not found")]
    NotFound,

    #[error("internal server error")]
    Internal,
}

#[derive(Serialize)]
struct ErrorBody {
    message: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // Same shape as the router's own 404: status only, empty body
            AppError::NotFound => StatusCode::NOT_FOUND.into_response(),
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    message: "Internal server error",
                }),
            )
                .into_response(),
        }
    }
}

/// Failures while starting or running the HTTP server.
#[derive(Error, Debug)]
pub enum ServeError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}
