use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use catalog_core::ProductId;
use catalog_infra::{CatalogConfig, build_product_service};
use catalog_products::ProductRequest;

/// Save `count` distinct products through the service.
fn bench_save(c: &mut Criterion) {
    let mut group = c.benchmark_group("product_save");

    for count in [10usize, 100, 1_000] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                let (service, _repo) = build_product_service(&CatalogConfig::default());
                for i in 0..count {
                    let request = ProductRequest::new(format!("product-{i}"), 1.5, (i % 20) as i32);
                    black_box(service.save(&request).ok());
                }
            });
        });
    }

    group.finish();
}

/// Look up ids in a pre-filled catalog.
fn bench_find_by_id(c: &mut Criterion) {
    let mut group = c.benchmark_group("product_find_by_id");

    for size in [100usize, 1_000] {
        let (service, _repo) = build_product_service(&CatalogConfig::default());
        for i in 0..size {
            let _ = service.save(&ProductRequest::new(format!("product-{i}"), 1.5, 1));
        }
        let ids: Vec<ProductId> = (1..=size as u64).filter_map(|raw| ProductId::new(raw).ok()).collect();

        group.throughput(Throughput::Elements(ids.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &ids, |b, ids| {
            b.iter(|| {
                for id in ids {
                    black_box(service.find_by_id(*id).ok());
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_save, bench_find_by_id);
criterion_main!(benches);
