//! # Utility Modules
//!
//! - **Constants** (`constant`) - Fixed service configuration

pub mod constant;
