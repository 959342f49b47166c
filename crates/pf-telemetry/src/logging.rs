//! Structured logging setup.
//!
//! Installs a global `tracing` subscriber: an `EnvFilter` built from the
//! configured level, plus either a pretty or a JSON fmt layer.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{TelemetryConfig, TelemetryError};

/// Handle returned once the global subscriber is installed.
#[derive(Debug)]
pub struct StructuredLogger {
    service_name: String,
}

impl StructuredLogger {
    /// Service name the logger was installed for.
    pub fn service_name(&self) -> &str {
        &self.service_name
    }
}

/// Builds the level filter for `config`.
///
/// `RUST_LOG` directives, when present in the environment, take precedence.
pub fn env_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| TelemetryError::Config(e.to_string()))
}

/// Install the global subscriber.
///
/// # Errors
/// - `Config` if the log level is not a valid filter directive
/// - `AlreadyInitialized` if another subscriber is already installed
pub fn init_logging(config: &TelemetryConfig) -> Result<StructuredLogger, TelemetryError> {
    let filter = env_filter(config)?;

    if !config.console_output {
        tracing_subscriber::registry()
            .with(filter)
            .try_init()
            .map_err(|e| TelemetryError::AlreadyInitialized(e.to_string()))?;
    } else if config.json_logs {
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true);

        tracing_subscriber::registry()
            .with(filter)
            .with(json_layer)
            .try_init()
            .map_err(|e| TelemetryError::AlreadyInitialized(e.to_string()))?;
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .with_ansi(true);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| TelemetryError::AlreadyInitialized(e.to_string()))?;
    }

    tracing::info!(
        service = %config.service_name,
        level = %config.log_level,
        json_logs = config.json_logs,
        "Structured logging initialized"
    );

    Ok(StructuredLogger {
        service_name: config.service_name.clone(),
    })
}

/// Log a list-related event with standard fields.
///
/// ```rust,ignore
/// log_list_event!(debug, "CaloHit", "Saved list", "Clusters", count = 12);
/// ```
#[macro_export]
macro_rules! log_list_event {
    ($level:ident, $kind:expr, $msg:expr, $list:expr $(, $($field:tt)*)?) => {
        $crate::tracing::$level!(
            object_kind = $kind,
            list = %$list,
            $($($field)*,)?
            $msg
        )
    };
}

/// Create a span covering one algorithm's execution.
///
/// ```rust,ignore
/// let _span = algorithm_span!(algorithm).entered();
/// ```
#[macro_export]
macro_rules! algorithm_span {
    ($algorithm:expr $(, $($field:tt)*)?) => {
        $crate::tracing::info_span!("algorithm", algorithm = %$algorithm $(, $($field)*)?)
    };
}
