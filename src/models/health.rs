use serde::Serialize;

/// Response body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    /// The only status this service ever reports.
    pub const fn ok() -> Self {
        Self { status: "ok" }
    }
}
