//! # Track Relationships
//!
//! Id-based relationships resolved after ingestion, and Monte-Carlo target
//! matching.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pf_01_object_management::{
        EventDriverApi, EventObjectService, InMemoryObjectSource, ManagedObject,
    };
    use shared_types::{ReconstructionSettings, RelationshipDescriptor, Uid};

    use crate::fixtures::{random_event, track, EventShape, TRACK_UID_OFFSET};

    fn service() -> EventObjectService {
        EventObjectService::new(ReconstructionSettings::for_testing()).unwrap()
    }

    #[test]
    fn test_daughter_declared_before_it_exists() {
        // The relationship arrives before either track in the record.
        let json = r#"{
            "track_relationships": [
                { "kind": "parent_daughter", "from": 10, "to": 20 }
            ]
        }"#;
        let source = InMemoryObjectSource::from_json(json)
            .unwrap()
            .with_track(track(10))
            .with_track(track(20));

        let mut service = service();
        let summary = service.ingest(&source).unwrap();
        assert_eq!(summary.associations.applied, 1);

        let daughter = service.tracks().object(Uid(20)).unwrap();
        let parents: Vec<Uid> = daughter.parent_tracks().iter().copied().collect();
        assert_eq!(parents, vec![Uid(10)]);
        assert!(service
            .tracks()
            .object(Uid(10))
            .unwrap()
            .daughter_tracks()
            .contains(&Uid(20)));
    }

    #[test]
    fn test_sibling_links_are_symmetric_and_idempotent() {
        let source = InMemoryObjectSource::new()
            .with_track(track(1))
            .with_track(track(2))
            .with_relationship(RelationshipDescriptor::sibling(Uid(1), Uid(2)))
            .with_relationship(RelationshipDescriptor::sibling(Uid(2), Uid(1)));

        let mut service = service();
        service.ingest(&source).unwrap();

        for (uid, other) in [(1, 2), (2, 1)] {
            let siblings = service.tracks().object(Uid(uid)).unwrap().sibling_tracks();
            assert_eq!(siblings.len(), 1);
            assert!(siblings.contains(&Uid(other)));
        }
    }

    #[test]
    fn test_random_decay_tree_is_consistent() {
        let shape = EventShape {
            calo_hits: 0,
            tracks: 30,
            max_layer: 0,
        };
        let mut service = service();
        service.ingest(&random_event(11, shape)).unwrap();

        let tracks = service.tracks();
        for parent in tracks.registry().iter() {
            for daughter in parent.daughter_tracks() {
                let parents = tracks.object(*daughter).unwrap().parent_tracks();
                assert!(parents.contains(&parent.uid()));
            }
        }

        let roots = tracks
            .registry()
            .iter()
            .filter(|candidate| candidate.parent_tracks().is_empty())
            .count();
        assert_eq!(roots, 1);
    }

    #[test]
    fn test_mc_pfo_targets_matched_after_ingestion() {
        let mut service = service();
        service
            .ingest(
                &InMemoryObjectSource::new()
                    .with_track(track(TRACK_UID_OFFSET))
                    .with_track(track(TRACK_UID_OFFSET + 1)),
            )
            .unwrap();

        let targets = HashMap::from([
            (Uid(TRACK_UID_OFFSET), Uid(7)),
            (Uid(TRACK_UID_OFFSET + 1), Uid(8)),
            (Uid(42), Uid(9)),
        ]);
        assert_eq!(service.tracks_mut().match_tracks_to_mc_pfo_targets(&targets), 2);
        assert_eq!(
            service.tracks().object(Uid(TRACK_UID_OFFSET + 1)).unwrap().mc_pfo_target(),
            Some(Uid(8))
        );
    }

    #[test]
    fn test_relationships_do_not_leak_into_next_event() {
        let mut service = service();
        let source = InMemoryObjectSource::new()
            .with_track(track(1))
            .with_track(track(2))
            .with_relationship(RelationshipDescriptor::parent_daughter(Uid(1), Uid(2)));
        service.ingest(&source).unwrap();
        service.reset_for_next_event().unwrap();

        let next = InMemoryObjectSource::new().with_track(track(1)).with_track(track(2));
        let summary = service.ingest(&next).unwrap();

        assert_eq!(summary.associations.applied, 0);
        assert!(service.tracks().object(Uid(2)).unwrap().parent_tracks().is_empty());
    }
}
