//! # Middleware Components
//!
//! Cross-cutting layers wrapped around every route: request logging and the
//! panic recovery boundary.

pub mod recovery;
pub mod request_id;

pub use recovery::handle_panic;
pub use request_id::request_id_middleware;
