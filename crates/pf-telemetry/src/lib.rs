//! # PF Telemetry
//!
//! Structured logging for the particle-flow workspace.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pf_telemetry::{init_logging, TelemetryConfig};
//!
//! fn main() {
//!     let config = TelemetryConfig::from_env();
//!     let _logger = init_logging(&config).expect("Failed to init logging");
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `OTEL_SERVICE_NAME` | `particle-flow` | Service name in logs |
//! | `PF_LOG_LEVEL` | `info` | Log level filter (falls back to `RUST_LOG`) |
//! | `PF_CONSOLE_OUTPUT` | `true` | Emit log lines at all |
//! | `PF_JSON_LOGS` | `false` | JSON instead of pretty output |

#![warn(missing_docs)]

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::{env_filter, init_logging, StructuredLogger};

#[doc(hidden)]
pub use tracing;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// The configured level is not a valid filter directive.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A global subscriber was already installed.
    #[error("Logging already initialized: {0}")]
    AlreadyInitialized(String),
}
