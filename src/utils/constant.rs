//! # Application Constants
//!
//! This module defines the fixed configuration of the service. There are no
//! config files or CLI flags; the values here are the whole configuration.

/// Address the HTTP listener binds to: all interfaces, port 5001.
pub const BIND_ADDR: &str = "0.0.0.0:5001";

/// Name greeted when the `name` query parameter is absent or empty.
pub const DEFAULT_NAME: &str = "world";

/// Tag appended to every greeting.
///
/// Resolved at compile time to `<crate name>@<crate version>`.
pub const VERSION_TAG: &str = concat!(env!("CARGO_PKG_NAME"), "@", env!("CARGO_PKG_VERSION"));

/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "hello_agent=info";
