use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use rand::rngs::StdRng;
use rand::SeedableRng;

use mural::background::{
    css_url, resolve_background, BackgroundKind, BackgroundState, CatalogBackground,
};
use mural::Store;

fn store_snapshot_benchmark(c: &mut Criterion) {
    let store = Store::new(42i32);

    c.bench_function("store_snapshot", |b| {
        b.iter(|| {
            black_box(store.snapshot());
        });
    });
}

fn store_update_benchmark(c: &mut Criterion) {
    #[derive(Clone)]
    struct State {
        counter: usize,
        name: String,
    }

    let store = Store::new(State {
        counter: 0,
        name: "test".to_string(),
    });

    c.bench_function("store_update", |b| {
        let mut i = 0;
        b.iter(|| {
            store.update(|state| {
                state.counter = black_box(i);
            });
            i += 1;
        });
    });
}

fn store_subscribe_benchmark(c: &mut Criterion) {
    #[derive(Clone)]
    struct State {
        value: usize,
    }

    let mut group = c.benchmark_group("store_subscribe");

    for subscriber_count in [1, 10, 100].iter() {
        let store = Store::new(State { value: 0 });

        for _ in 0..*subscriber_count {
            store.subscribe(|_| {
                // Empty subscriber
            });
        }

        group.bench_with_input(
            BenchmarkId::from_parameter(subscriber_count),
            subscriber_count,
            |b, _| {
                let mut i = 0;
                b.iter(|| {
                    store.update(|state| state.value = black_box(i));
                    i += 1;
                });
            },
        );
    }
    group.finish();
}

fn resolver_benchmark(c: &mut Criterion) {
    let state = BackgroundState {
        catalog_backgrounds: (0..64)
            .map(|i| CatalogBackground {
                image_url: format!("https://example.com/photo-{i}.jpg"),
                author: "Photographer".to_string(),
                link: "https://example.com".to_string(),
            })
            .collect(),
        selected_kind: BackgroundKind::Catalog,
        ..BackgroundState::default()
    };
    let mut rng = StdRng::seed_from_u64(0);

    c.bench_function("resolve_background", |b| {
        b.iter(|| {
            black_box(resolve_background(black_box(&state), &mut rng));
        });
    });
}

fn css_url_benchmark(c: &mut Criterion) {
    let locator = "https://example.com/some \"quoted\" photo.jpg";

    c.bench_function("css_url", |b| {
        b.iter(|| {
            black_box(css_url(black_box(locator)));
        });
    });
}

criterion_group!(
    benches,
    store_snapshot_benchmark,
    store_update_benchmark,
    store_subscribe_benchmark,
    resolver_benchmark,
    css_url_benchmark,
);
criterion_main!(benches);
