mod greeting;
mod health;

pub use greeting::MessageResponse;
pub use health::HealthResponse;
