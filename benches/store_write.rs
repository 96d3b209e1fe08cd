use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hexastore::core::{Term, Triple};
use hexastore::storage::hexastore::HexaStore;

fn synthetic_triple(i: u64) -> Triple {
    Triple::new(
        Term::constant(&format!("http://example.org/subject/{}", i % 1000)),
        Term::constant(&format!("http://example.org/predicate/{}", i % 50)),
        Term::constant(&format!("http://example.org/object/{}", i % 2000)),
    )
}

fn bench_store_write(c: &mut Criterion) {
    c.bench_function("add_10k_facts", |b| {
        let triples: Vec<Triple> = (0..10_000).map(synthetic_triple).collect();
        b.iter(|| {
            let mut store = HexaStore::new();
            for triple in &triples {
                store.add(black_box(triple)).unwrap();
            }
            store.size()
        });
    });

    c.bench_function("add_10k_facts_with_duplicates", |b| {
        // Half the inserts re-add existing facts
        let triples: Vec<Triple> = (0..10_000).map(|i| synthetic_triple(i % 5000)).collect();
        b.iter(|| {
            let mut store = HexaStore::new();
            for triple in &triples {
                store.add(black_box(triple)).unwrap();
            }
            store.size()
        });
    });
}

criterion_group!(benches, bench_store_write);
criterion_main!(benches);
