//! # HTTP Request Handlers
//!
//! ## Available Handlers
//!
//! - **Greeting** (`hello`) - Echoes a name into a greeting
//! - **Health Check** (`health_check`) - Application health monitoring
//! - **Fallback** (`fallback`) - 404 for anything unrouted

mod fallback;
mod health_check;
mod hello;

pub use fallback::*;
pub use health_check::*;
pub use hello::*;
