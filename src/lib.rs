//! # hello-agent - Greeting Service
//!
//! A small HTTP service with two JSON endpoints:
//!
//! - `GET /api/hello?name=<name>` - `{"message": "Hello, <name>! — <tag>"}`
//! - `GET /health` - `{"status": "ok"}`
//!
//! Anything else is answered with `404`. A panicking handler is answered with
//! `500` and does not take the process down.
//!
//! ## Modules
//!
//! - [`handlers`] - HTTP request handlers for the endpoints
//! - [`middleware`] - Request logging and the panic recovery boundary
//! - [`models`] - Response payloads
//! - [`error`] - Request and server error types
//! - [`shutdown`] - Signal handling for graceful shutdown
//! - [`telemetry`] - Tracing subscriber setup
//! - [`utils`] - Fixed configuration constants

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod shutdown;
pub mod telemetry;
pub mod utils;

use axum::{Router, middleware::from_fn, routing::get};
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tracing::info;

use crate::error::ServeError;
use crate::handlers::{health_check, hello, not_found};
use crate::middleware::{handle_panic, request_id_middleware};
use crate::shutdown::shutdown_signal;
use crate::utils::constant::BIND_ADDR;

/// Creates the route table without any layers.
///
/// Routes only answer `GET` (and the `HEAD` axum derives from it); other
/// methods on these paths fall through to [`not_found`], as do unknown paths.
pub fn routes() -> Router {
    Router::new()
        .route("/api/hello", get(hello).fallback(not_found))
        .route("/health", get(health_check).fallback(not_found))
        .fallback(not_found)
}

/// Wraps `router` in the recovery boundary and request logging.
///
/// Layers apply to every route present in `router` at the time of the call,
/// so extra routes must be added before wrapping.
pub fn with_recovery(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(from_fn(request_id_middleware))
}

/// Creates the complete application router.
#[inline]
pub fn app() -> Router {
    with_recovery(routes())
}

/// Serves [`app`] on `listener` until SIGINT or SIGTERM arrives.
pub async fn serve(listener: TcpListener) -> Result<(), ServeError> {
    serve_with_shutdown(listener, app(), shutdown_signal()).await
}

/// Serves `router` on `listener` until `signal` resolves.
///
/// Each connection is handled on its own task. Once `signal` resolves no new
/// connections are accepted, and this returns after in-flight requests finish.
pub async fn serve_with_shutdown<F>(
    listener: TcpListener,
    router: Router,
    signal: F,
) -> Result<(), ServeError>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "Server listening");
    }

    axum::serve(listener, router)
        .with_graceful_shutdown(signal)
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Binds [`BIND_ADDR`] and serves until shutdown.
pub async fn run() -> Result<(), ServeError> {
    let listener = TcpListener::bind(BIND_ADDR)
        .await
        .map_err(|source| ServeError::Bind {
            addr: BIND_ADDR,
            source,
        })?;

    serve(listener).await
}
