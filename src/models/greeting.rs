use serde::Serialize;

/// Response body of `GET /api/hello`.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
