//! # Logging
//!
//! Global subscriber installation. Kept to a single test because the
//! subscriber is process-wide.

#[cfg(test)]
mod tests {
    use pf_01_object_management::{EventObjectService, InMemoryObjectSource};
    use pf_telemetry::{init_logging, TelemetryConfig, TelemetryError};
    use shared_types::{AlgorithmId, ReconstructionSettings};

    use crate::fixtures::hit;

    #[test]
    fn test_init_logging_once_then_rejected() {
        let config = TelemetryConfig {
            console_output: false,
            ..TelemetryConfig::for_testing()
        };

        let logger = init_logging(&config).unwrap();
        assert_eq!(logger.service_name(), "particle-flow-tests");

        // Logging paths run with a live subscriber.
        let mut service = EventObjectService::new(ReconstructionSettings::for_testing()).unwrap();
        service
            .ingest(&InMemoryObjectSource::new().with_calo_hit(hit(1, 0)))
            .unwrap();
        service
            .run_algorithm(&AlgorithmId::new("Logged"), |_| Ok(()))
            .unwrap();

        let err = init_logging(&config).unwrap_err();
        assert!(matches!(err, TelemetryError::AlreadyInitialized(_)));
    }
}
