use hexastore::storage::indexing::dictionary::Dictionary;

#[test]
fn test_encode_decode_round_trip() {
    let mut dict = Dictionary::new();

    let subject_id = dict.encode("http://example.org/person/Alice");
    let predicate_id = dict.encode("http://example.org/knows");
    let object_id = dict.encode("http://example.org/person/Bob");

    assert_eq!(dict.decode(subject_id), Some("http://example.org/person/Alice"));
    assert_eq!(dict.decode(predicate_id), Some("http://example.org/knows"));
    assert_eq!(dict.decode(object_id), Some("http://example.org/person/Bob"));
}

#[test]
fn test_encode_is_idempotent() {
    let mut dict = Dictionary::new();

    let first = dict.encode("http://example.org/person/Alice");
    let second = dict.encode("http://example.org/person/Alice");

    assert_eq!(first, second);
    assert_eq!(dict.len(), 1);
}

#[test]
fn test_codes_are_dense_from_zero() {
    let mut dict = Dictionary::new();

    let values = ["a", "b", "c", "d", "e"];
    let ids: Vec<u32> = values.iter().map(|v| dict.encode(v)).collect();

    // First-seen order, no gaps, no duplicates
    assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    assert_eq!(dict.len(), values.len());
}

#[test]
fn test_decode_unassigned_code_is_absent() {
    let mut dict = Dictionary::new();
    dict.encode("http://example.org/only");

    assert_eq!(dict.decode(999), None);
}

#[test]
fn test_lookup_does_not_allocate() {
    let mut dict = Dictionary::new();
    dict.encode("http://example.org/seen");

    assert_eq!(dict.lookup("http://example.org/seen"), Some(0));
    assert_eq!(dict.lookup("http://example.org/unseen"), None);
    assert_eq!(dict.len(), 1);
}

#[test]
fn test_encode_triple_and_decode_triple() {
    let mut dict = Dictionary::new();

    let triple = dict.encode_triple(
        "http://example.org#Alice",
        "http://example.org#knows",
        "http://example.org#Bob",
    );
    assert_eq!(triple, [0, 1, 2]);

    let decoded = dict.decode_triple(triple);
    assert_eq!(
        decoded,
        [
            Some("http://example.org#Alice"),
            Some("http://example.org#knows"),
            Some("http://example.org#Bob"),
        ]
    );

    // Shared constants reuse their codes across triples
    let second = dict.encode_triple(
        "http://example.org#Bob",
        "http://example.org#knows",
        "http://example.org#Alice",
    );
    assert_eq!(second, [2, 1, 0]);
}

#[test]
fn test_decode_triple_with_unassigned_position() {
    let mut dict = Dictionary::new();
    dict.encode("only-one");

    let decoded = dict.decode_triple([0, 7, 8]);
    assert_eq!(decoded, [Some("only-one"), None, None]);
}
