//! # Object Management Benchmarks
//!
//! | Operation | Scale |
//! |-----------|-------|
//! | Event ingestion | 10k hits, 200 tracks |
//! | Layer ordering of the input list | 10k hits |
//! | Merge of two ordered lists | 2 x 5k hits |
//! | Flatten | 10k hits |
//! | Algorithm scope open/close | 1 temporary list |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pf_01_object_management::{
    EventDriverApi, EventObjectService, ListManagementApi, OrderedCaloHitList, INPUT_LIST_NAME,
};
use pf_tests::fixtures::{random_event, EventShape};
use rand::seq::SliceRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use shared_types::{AlgorithmId, ReconstructionSettings, Uid};
use std::time::Duration;

const SHAPE: EventShape = EventShape {
    calo_hits: 10_000,
    tracks: 200,
    max_layer: 100,
};

fn ingested_service() -> EventObjectService {
    let mut service = EventObjectService::new(ReconstructionSettings::default())
        .expect("default settings are valid");
    service
        .ingest(&random_event(1, SHAPE))
        .expect("ingestion succeeds");
    service
}

fn bench_ingestion(c: &mut Criterion) {
    let mut group = c.benchmark_group("pf-01-ingestion");
    group.measurement_time(Duration::from_secs(10));
    group.throughput(Throughput::Elements(SHAPE.calo_hits + SHAPE.tracks));

    let source = random_event(1, SHAPE);
    let mut service = EventObjectService::new(ReconstructionSettings::default())
        .expect("default settings are valid");

    group.bench_function("ingest_and_reset", |b| {
        b.iter(|| {
            let summary = service.ingest(black_box(&source)).expect("ingestion succeeds");
            service.reset_for_next_event().expect("reset succeeds");
            black_box(summary)
        })
    });

    group.finish();
}

fn bench_ordered_layers(c: &mut Criterion) {
    let mut group = c.benchmark_group("pf-01-ordered-layers");
    let mut service = ingested_service();

    let mut uids: Vec<Uid> = service
        .calo_hits()
        .list(INPUT_LIST_NAME)
        .expect("input list exists")
        .iter()
        .copied()
        .collect();
    uids.shuffle(&mut StdRng::seed_from_u64(5));
    let (left, right) = uids.split_at(uids.len() / 2);

    let hits = service.calo_hits_mut();
    hits.save_list(left, "left").expect("save succeeds");
    hits.save_list(right, "right").expect("save succeeds");
    let left: OrderedCaloHitList = hits.ordered_hits("left").expect("list exists");
    let right: OrderedCaloHitList = hits.ordered_hits("right").expect("list exists");

    group.throughput(Throughput::Elements(SHAPE.calo_hits));
    group.bench_function("order_input_list", |b| {
        b.iter(|| black_box(service.calo_hits().current_ordered_hits().expect("ordering succeeds")))
    });

    group.bench_function("merge_halves", |b| {
        b.iter(|| {
            let mut merged = left.clone();
            merged.merge(black_box(&right)).expect("halves are disjoint");
            black_box(merged)
        })
    });

    let full = service
        .calo_hits()
        .current_ordered_hits()
        .expect("ordering succeeds");
    group.bench_function("flatten", |b| b.iter(|| black_box(full.flatten_ordered())));

    group.finish();
}

fn bench_algorithm_scope(c: &mut Criterion) {
    let mut group = c.benchmark_group("pf-01-algorithm-scope");
    let mut service = ingested_service();
    let alg = AlgorithmId::new("Bench");

    for size in [10usize, 1_000] {
        let subset: Vec<Uid> = service
            .calo_hits()
            .list(INPUT_LIST_NAME)
            .expect("input list exists")
            .iter()
            .copied()
            .take(size)
            .collect();

        group.bench_with_input(BenchmarkId::new("temporary_list", size), &subset, |b, subset| {
            b.iter(|| {
                service
                    .run_algorithm(&alg, |svc| {
                        svc.calo_hits_mut()
                            .create_temporary_list_and_set_current(&alg, subset)
                    })
                    .expect("scope succeeds")
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_ingestion,
    bench_ordered_layers,
    bench_algorithm_scope
);
criterion_main!(benches);
