//! # Layer Ordering
//!
//! Layer-ordered views of hit lists built by the calo hit manager.

#[cfg(test)]
mod tests {
    use pf_01_object_management::{
        EventObjectService, InMemoryObjectSource, ListManagementApi, OrderedCaloHitList,
        StatusKind,
    };
    use shared_types::{ReconstructionSettings, Uid};

    use crate::fixtures::{hit, random_event, EventShape};

    fn service_with(hits: &[(u64, u32)]) -> EventObjectService {
        let mut service = EventObjectService::new(ReconstructionSettings::for_testing()).unwrap();
        let source = hits
            .iter()
            .fold(InMemoryObjectSource::new(), |source, (uid, layer)| {
                source.with_calo_hit(hit(*uid, *layer))
            });
        service.ingest(&source).unwrap();
        service
    }

    #[test]
    fn test_flatten_by_layer_then_insertion() {
        let service = service_with(&[(1, 5), (2, 5), (3, 7)]);
        let ordered = service.calo_hits().current_ordered_hits().unwrap();

        assert_eq!(ordered.flatten_ordered(), vec![Uid(1), Uid(2), Uid(3)]);
        assert_eq!(ordered.objects_in_layer(5).unwrap().len(), 2);
        assert!(ordered.objects_in_layer(6).unwrap_err().is_not_found());
    }

    #[test]
    fn test_removing_last_hit_drops_layer() {
        let service = service_with(&[(1, 5), (2, 5), (3, 7)]);
        let mut ordered = service.calo_hits().current_ordered_hits().unwrap();

        ordered.remove_object_from_layer(&Uid(3), 7).unwrap();
        assert!(ordered.objects_in_layer(7).unwrap_err().is_not_found());
        assert_eq!(ordered.outer_layer(), Some(5));
    }

    #[test]
    fn test_merge_and_subtract_saved_lists() {
        let mut service = service_with(&[(1, 1), (2, 2), (3, 3), (4, 3)]);
        let hits = service.calo_hits_mut();
        hits.save_list(&[Uid(1), Uid(3)], "core").unwrap();
        hits.save_list(&[Uid(2), Uid(4)], "halo").unwrap();

        let mut cluster = hits.ordered_hits("core").unwrap();
        cluster.merge(&hits.ordered_hits("halo").unwrap()).unwrap();
        assert_eq!(cluster, hits.ordered_hits(pf_01_object_management::INPUT_LIST_NAME).unwrap());

        cluster.subtract(&hits.ordered_hits("halo").unwrap()).unwrap();
        assert_eq!(cluster.flatten_ordered(), vec![Uid(1), Uid(3)]);
    }

    #[test]
    fn test_merge_overlap_fails() {
        let mut service = service_with(&[(1, 1), (2, 2)]);
        let hits = service.calo_hits_mut();
        hits.save_list(&[Uid(1), Uid(2)], "all").unwrap();

        let mut ordered = hits.ordered_hits("all").unwrap();
        let err = ordered
            .merge(&hits.ordered_hits("all").unwrap())
            .unwrap_err();
        assert_eq!(err.kind(), StatusKind::AlreadyPresent);
    }

    #[test]
    fn test_random_event_flatten_is_layer_sorted() {
        let shape = EventShape {
            calo_hits: 500,
            tracks: 0,
            max_layer: 60,
        };
        let mut service = EventObjectService::new(ReconstructionSettings::for_testing()).unwrap();
        service.ingest(&random_event(99, shape)).unwrap();

        let hits = service.calo_hits();
        let ordered: OrderedCaloHitList = hits.current_ordered_hits().unwrap();
        let layers: Vec<u32> = ordered
            .flatten_ordered()
            .into_iter()
            .map(|uid| hits.object(uid).unwrap().pseudo_layer())
            .collect();

        assert_eq!(layers.len(), 500);
        assert!(layers.windows(2).all(|pair| pair[0] <= pair[1]));

        let range: usize = ordered.layers_in_range(10, 20).unwrap().map(|(_, set)| set.len()).sum();
        assert!(range <= 500);
    }
}
