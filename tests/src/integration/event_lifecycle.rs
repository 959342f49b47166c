//! # Event Lifecycle
//!
//! Ingestion, reuse across events, and settings handling.

#[cfg(test)]
mod tests {
    use pf_01_object_management::{
        EventDriverApi, EventObjectService, InMemoryObjectSource, ListManagementApi, ObjectError,
        StatusKind, INPUT_LIST_NAME,
    };
    use proptest::prelude::*;
    use shared_types::{ListCollisionPolicy, ReconstructionSettings, Uid};

    use crate::fixtures::{hit, random_event, track, EventShape, TRACK_UID_OFFSET};

    fn service() -> EventObjectService {
        EventObjectService::new(ReconstructionSettings::for_testing()).unwrap()
    }

    const SHAPE: EventShape = EventShape {
        calo_hits: 200,
        tracks: 12,
        max_layer: 40,
    };

    #[test]
    fn test_random_event_ingestion() {
        let mut service = service();
        let summary = service.ingest(&random_event(7, SHAPE)).unwrap();

        assert_eq!(summary.calo_hits, 200);
        assert_eq!(summary.tracks, 12);
        // 11 parent/daughter edges plus one dangling sibling
        assert_eq!(summary.relationships, 12);
        assert_eq!(summary.associations.applied, 11);
        assert_eq!(summary.associations.skipped, 1);

        let (hits, name) = service.calo_hits().current_list().unwrap();
        assert_eq!(name, INPUT_LIST_NAME);
        assert_eq!(hits.len(), 200);
        assert_eq!(service.tracks().list(INPUT_LIST_NAME).unwrap().len(), 12);
    }

    #[test]
    fn test_many_events_reuse_the_service() {
        let mut service = service();

        for seed in 0..5 {
            service.ingest(&random_event(seed, SHAPE)).unwrap();
            service
                .calo_hits_mut()
                .save_list(&[Uid(1), Uid(2)], "Seeds")
                .unwrap();
            service.reset_for_next_event().unwrap();

            assert!(service.calo_hits().registry().is_empty());
            assert!(service.tracks().registry().is_empty());
            assert!(service.tracks().relationships().is_empty());
            assert_eq!(
                service.calo_hits().current_list_name(),
                Err(ObjectError::NotInitialized)
            );
        }
    }

    #[test]
    fn test_duplicate_uid_in_source() {
        let mut service = service();
        let source = InMemoryObjectSource::new()
            .with_calo_hit(hit(1, 0))
            .with_calo_hit(hit(1, 3));

        let err = service.ingest(&source).unwrap_err();
        assert_eq!(err.kind(), StatusKind::AlreadyPresent);

        // Partial state is recoverable through the event reset.
        service.reset_for_next_event().unwrap();
        service.ingest(&InMemoryObjectSource::new().with_calo_hit(hit(1, 0))).unwrap();
    }

    #[test]
    fn test_hit_above_max_layer_rejected() {
        let mut service = service();
        let max = service.settings().max_pseudo_layer;
        let source = InMemoryObjectSource::new().with_calo_hit(hit(1, max + 1));

        let err = service.ingest(&source).unwrap_err();
        assert_eq!(err.kind(), StatusKind::InvalidParameter);
    }

    #[test]
    fn test_object_limit_from_settings() {
        let settings = ReconstructionSettings {
            max_objects_per_kind: 2,
            ..ReconstructionSettings::for_testing()
        };
        let mut service = EventObjectService::new(settings).unwrap();
        let source = InMemoryObjectSource::new()
            .with_track(track(TRACK_UID_OFFSET))
            .with_track(track(TRACK_UID_OFFSET + 1))
            .with_track(track(TRACK_UID_OFFSET + 2));

        let err = service.ingest(&source).unwrap_err();
        assert_eq!(err.kind(), StatusKind::InvalidParameter);
        assert_eq!(service.tracks().registry().len(), 2);
    }

    #[test]
    fn test_event_record_json_replay() {
        let original = random_event(3, SHAPE);
        let json = serde_json::to_string(original.record()).unwrap();
        let replayed = InMemoryObjectSource::from_json(&json).unwrap();

        let mut first = service();
        let mut second = service();
        assert_eq!(
            first.ingest(&original).unwrap(),
            second.ingest(&replayed).unwrap()
        );
    }

    #[test]
    fn test_settings_from_json() {
        let json = r#"{ "list_collision_policy": "merge_in_place", "max_pseudo_layer": 80 }"#;
        let settings: ReconstructionSettings = serde_json::from_str(json).unwrap();

        assert_eq!(settings.list_collision_policy, ListCollisionPolicy::MergeInPlace);
        assert_eq!(settings.max_pseudo_layer, 80);
        assert_eq!(
            settings.max_objects_per_kind,
            ReconstructionSettings::default().max_objects_per_kind
        );
        assert!(EventObjectService::new(settings).is_ok());
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let settings = ReconstructionSettings {
            min_hit_energy: -1.0,
            ..ReconstructionSettings::default()
        };
        let err = EventObjectService::new(settings).unwrap_err();
        assert_eq!(err.kind(), StatusKind::InvalidParameter);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_input_list_mirrors_source(
            seed in any::<u64>(),
            calo_hits in 0u64..150,
            tracks in 0u64..20,
        ) {
            let shape = EventShape { calo_hits, tracks, max_layer: 30 };
            let mut service = service();
            service.ingest(&random_event(seed, shape)).unwrap();

            let hits = service.calo_hits().list(INPUT_LIST_NAME).unwrap();
            let expected: Vec<Uid> = (1..=calo_hits).map(Uid).collect();
            prop_assert_eq!(hits.iter().copied().collect::<Vec<_>>(), expected);
            prop_assert_eq!(
                service.tracks().list(INPUT_LIST_NAME).unwrap().len() as u64,
                tracks
            );
        }
    }
}
