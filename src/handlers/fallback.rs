use tracing::debug;

use crate::error::AppError;

/// Answers every request no route claims, including known paths hit with a
/// method other than `GET`.
pub async fn not_found() -> AppError {
    debug!("No route matched");
    AppError::NotFound
}
