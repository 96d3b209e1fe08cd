use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hexastore::core::{StarQuery, Term, Triple};
use hexastore::storage::hexastore::HexaStore;

fn populated_store(n: u64) -> HexaStore {
    let mut store = HexaStore::new();
    for i in 0..n {
        let triple = Triple::new(
            Term::constant(&format!("http://example.org/subject/{}", i % 1000)),
            Term::constant(&format!("http://example.org/predicate/{}", i % 50)),
            Term::constant(&format!("http://example.org/object/{}", i % 2000)),
        );
        store.add(&triple).unwrap();
    }
    store
}

fn bench_pattern_match(c: &mut Criterion) {
    let store = populated_store(100_000);

    c.bench_function("match_bound_subject", |b| {
        let pattern = Triple::new(
            Term::constant("http://example.org/subject/42"),
            Term::variable("p"),
            Term::variable("o"),
        );
        b.iter(|| store.match_pattern(black_box(&pattern)));
    });

    c.bench_function("match_bound_object", |b| {
        let pattern = Triple::new(
            Term::variable("s"),
            Term::variable("p"),
            Term::constant("http://example.org/object/42"),
        );
        b.iter(|| store.match_pattern(black_box(&pattern)));
    });

    c.bench_function("star_query_two_patterns", |b| {
        let query = StarQuery::new(
            "bench",
            vec![
                Triple::new(
                    Term::constant("http://example.org/subject/42"),
                    Term::variable("p"),
                    Term::variable("o"),
                ),
                Triple::new(
                    Term::variable("s"),
                    Term::variable("p"),
                    Term::constant("http://example.org/object/42"),
                ),
            ],
            Vec::new(),
        );
        b.iter(|| store.match_query(black_box(&query)));
    });
}

criterion_group!(benches, bench_pattern_match);
criterion_main!(benches);
