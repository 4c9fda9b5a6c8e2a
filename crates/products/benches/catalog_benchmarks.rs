use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use distributor_products::{Catalog, ProductField};

/// Build a tab-separated source with `n` records.
fn source_text(n: usize) -> String {
    let mut out = String::with_capacity(n * 80);
    for i in 0..n {
        let status = if i % 7 == 0 { "Restricted" } else { "Active" };
        out.push_str(&format!(
            "{status}\t{}\tProduct {i} 24/12oz\tSupplier {}\tBrand {}\t24/12oz\tB\t{}\t{}\t20240101\n",
            100_000 + i,
            i % 13,
            i % 29,
            i % 500,
            i * 3
        ));
    }
    out
}

fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_load");
    for size in [300usize, 3_000, 30_000] {
        let text = source_text(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| {
                let mut catalog = Catalog::new();
                catalog.load_from_reader(black_box(text.as_bytes())).unwrap();
                catalog
            })
        });
    }
    group.finish();
}

fn bench_list_field(c: &mut Criterion) {
    let mut catalog = Catalog::new();
    catalog.load_from_reader(source_text(30_000).as_bytes()).unwrap();

    let mut group = c.benchmark_group("catalog_list_field");
    for count in [10usize, 300, 30_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| catalog.list_field(black_box(ProductField::Name), black_box(count)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_load, bench_list_field);
criterion_main!(benches);
