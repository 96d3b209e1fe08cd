use hexastore::storage::indexing::hexa_index::TripleIndex;

#[test]
fn test_add_and_find_fully_bound() {
    let mut index = TripleIndex::new();
    index.add_triple(0, 1, 2);

    let results = index.find_matches(Some(0), Some(1), Some(2));
    assert_eq!(results, vec![(0, 1, 2)]);
}

#[test]
fn test_find_non_existing_triple() {
    let index = TripleIndex::new();
    assert!(index.find_matches(Some(0), Some(1), Some(2)).is_empty());
}

#[test]
fn test_prefix_lookup_subject_predicate() {
    let mut index = TripleIndex::new();
    index.add_triple(0, 1, 2);
    index.add_triple(0, 1, 3);
    index.add_triple(1, 2, 3);

    let results = index.find_matches(Some(0), Some(1), None);
    assert_eq!(results.len(), 2);

    let results = index.find_matches(Some(1), Some(2), None);
    assert_eq!(results, vec![(1, 2, 3)]);
}

#[test]
fn test_every_bound_combination_finds_the_triple() {
    let mut index = TripleIndex::new();
    index.add_triple(5, 6, 7);
    index.add_triple(8, 6, 7);
    index.add_triple(5, 9, 7);

    // Each pattern exercises a different ordering's prefix
    assert_eq!(index.find_matches(Some(5), None, None).len(), 2); // spo
    assert_eq!(index.find_matches(None, Some(6), None).len(), 2); // pso
    assert_eq!(index.find_matches(None, None, Some(7)).len(), 3); // osp
    assert_eq!(index.find_matches(Some(5), Some(6), None).len(), 1); // spo
    assert_eq!(index.find_matches(Some(5), None, Some(7)).len(), 2); // sop
    assert_eq!(index.find_matches(None, Some(6), Some(7)).len(), 2); // pos
}

#[test]
fn test_matches_come_back_in_canonical_shape() {
    let mut index = TripleIndex::new();
    index.add_triple(10, 20, 30);

    for results in [
        index.find_matches(None, None, Some(30)),
        index.find_matches(None, Some(20), None),
        index.find_matches(Some(10), None, Some(30)),
        index.find_matches(None, Some(20), Some(30)),
    ] {
        assert_eq!(results, vec![(10, 20, 30)]);
    }
}

#[test]
fn test_all_wildcard_on_empty_index_is_empty() {
    let index = TripleIndex::new();
    assert!(index.find_matches(None, None, None).is_empty());
    assert!(index.get_all_triples().is_empty());
    assert!(index.is_empty());
}

#[test]
fn test_get_all_triples_each_exactly_once() {
    let mut index = TripleIndex::new();
    index.add_triple(0, 1, 2);
    index.add_triple(0, 1, 3);
    index.add_triple(1, 2, 3);

    let mut all = index.get_all_triples();
    all.sort_unstable();
    assert_eq!(all, vec![(0, 1, 2), (0, 1, 3), (1, 2, 3)]);
}

#[test]
fn test_reinsertion_is_a_set_level_no_op() {
    let mut index = TripleIndex::new();

    assert!(index.add_triple(0, 1, 2));
    assert!(!index.add_triple(0, 1, 2));

    assert_eq!(index.len(), 1);
    assert_eq!(index.find_matches(Some(0), None, None).len(), 1);
}
