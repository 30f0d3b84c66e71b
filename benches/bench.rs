// Criterion benchmarks for Ember Match

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ember_match::core::{DiscoveryEngine, DiscoveryRequest, UserRegistry};
use ember_match::models::{NewUser, Position, UserId};
use ember_match::services::MemoryStore;
use ember_match::euclidean_distance;
use std::sync::Arc;

async fn seed_population(store: &MemoryStore, count: usize) -> UserId {
    let requester = store
        .create_user(NewUser {
            email: "requester@example.com".to_string(),
            name: "Requester".to_string(),
            password: "password123".to_string(),
            gender: "f".to_string(),
            age: 25,
            position: Position::new(0.0, 0.0),
        })
        .await
        .unwrap()
        .id;

    for i in 0..count {
        let angle = (i as f64) * 0.37;
        store
            .create_user(NewUser {
                email: format!("user{}@example.com", i),
                name: format!("User {}", i),
                password: "password123".to_string(),
                gender: if i % 2 == 0 { "m" } else { "f" }.to_string(),
                age: 20 + (i % 40) as i32,
                position: Position::new(angle.cos() * (i as f64), angle.sin() * (i as f64)),
            })
            .await
            .unwrap();
    }

    requester
}

fn bench_euclidean_distance(c: &mut Criterion) {
    c.bench_function("euclidean_distance", |b| {
        b.iter(|| {
            euclidean_distance(
                black_box(Position::new(0.0, 0.0)),
                black_box(Position::new(3.0, 4.0)),
            )
        });
    });
}

fn bench_discovery(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    let mut group = c.benchmark_group("discovery");

    for population in [10usize, 100, 1000, 5000].iter() {
        let store = Arc::new(MemoryStore::new());
        let requester = rt.block_on(seed_population(&store, *population));
        let engine = DiscoveryEngine::new(Arc::clone(&store));

        group.bench_with_input(
            BenchmarkId::from_parameter(population),
            population,
            |b, _| {
                b.iter(|| {
                    let results = rt
                        .block_on(engine.discover(
                            requester,
                            DiscoveryRequest {
                                genders: Some(vec!["m".to_string()]),
                                min_age: Some(0),
                                max_age: Some(999),
                            },
                        ))
                        .unwrap();
                    black_box(results)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_euclidean_distance, bench_discovery);
criterion_main!(benches);
