//! End-to-end tests: snapshot in, artifacts out, model read back.

use std::fs;

use rx_vectorizer::{
    train, DrugRecord, JsonSnapshotStore, MemoryStore, TfidfModel, TrainError,
};

fn record(name: &str, description: &str) -> DrugRecord {
    DrugRecord {
        name: Some(name.to_string()),
        description: Some(description.to_string()),
        ..Default::default()
    }
}

// Numeric names tokenize to nothing, so only the descriptions contribute
// terms and the corpus statistics are exact.
fn symptom_snapshot() -> Vec<DrugRecord> {
    vec![
        record("101", "fever pain"),
        record("102", "fever cough"),
        record("103", "cough pain"),
    ]
}

#[test]
fn three_document_scenario_matches_the_closed_form() {
    let tmp = tempfile::tempdir().unwrap();
    let store = MemoryStore::new(symptom_snapshot());

    let report = train(&store, tmp.path(), "unit snapshot").unwrap();
    assert_eq!(report.num_docs, 3);
    assert_eq!(report.num_terms, 3);
    assert_eq!(report.dropped_duplicates, 0);

    let model = TfidfModel::load(tmp.path()).unwrap();

    // every term is in 2 of 3 documents: idf = 1 + ln(4/3)
    let expected_idf = 1.0 + (4.0f64 / 3.0).ln();
    for term in ["fever", "pain", "cough"] {
        let idf = model.vocabulary().idf(term).unwrap();
        assert!((idf - expected_idf).abs() < 1e-9, "idf({term}) = {idf}");
    }
    assert_eq!(model.vocabulary().term_num(), 3);

    // both terms of each document carry identical raw weight, so after L2
    // normalization each component is 1/sqrt(2)
    let expected_weight = 1.0 / 2.0f64.sqrt();
    for vector in model.vectors() {
        assert_eq!(vector.weights.len(), 2);
        for (_, weight) in vector.weights.iter() {
            assert!((weight - expected_weight).abs() < 1e-9);
        }
        assert!((vector.norm() - 1.0).abs() < 1e-9);
    }
}

#[test]
fn reruns_are_byte_identical_apart_from_metadata() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    let store = MemoryStore::new(symptom_snapshot());

    let a = train(&store, first.path(), "run a").unwrap();
    let b = train(&store, second.path(), "run b").unwrap();

    assert_eq!(
        fs::read(&a.artifacts.vocabulary).unwrap(),
        fs::read(&b.artifacts.vocabulary).unwrap()
    );
    assert_eq!(
        fs::read(&a.artifacts.vectors).unwrap(),
        fs::read(&b.artifacts.vectors).unwrap()
    );
}

#[test]
fn duplicate_names_keep_the_first_record_only() {
    let tmp = tempfile::tempdir().unwrap();
    let store = MemoryStore::new(vec![
        record("Aspirin", "original entry fever pain"),
        record("aspirin ", "case variant that must be dropped"),
        record("Codeine", "cough suppressant"),
    ]);

    let report = train(&store, tmp.path(), "dup snapshot").unwrap();
    assert_eq!(report.num_docs, 2);
    assert_eq!(report.dropped_duplicates, 1);

    let model = TfidfModel::load(tmp.path()).unwrap();
    assert_eq!(model.vectors()[0].name, "Aspirin");
    assert!(model.vectors()[0].weights.contains_key("original"));
    assert!(!model.vocabulary().contains("variant"));
}

#[test]
fn empty_corpus_fails_before_anything_is_written() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("artifacts");
    let store = MemoryStore::new(vec![DrugRecord::default(), DrugRecord::default()]);

    let err = train(&store, &dir, "empty snapshot").unwrap_err();
    assert!(matches!(err, TrainError::EmptyCorpus { .. }));
    assert!(!dir.exists());
}

#[test]
fn json_snapshot_end_to_end_with_recommendation() {
    let tmp = tempfile::tempdir().unwrap();
    let snapshot = tmp.path().join("drugs.json");
    fs::write(
        &snapshot,
        serde_json::to_vec(&vec![
            record("Aspirin", "fever pain headache relief"),
            record("Ibuprofen", "fever pain inflammation relief"),
            record("Codeine", "dry cough suppressant"),
        ])
        .unwrap(),
    )
    .unwrap();

    let artifact_dir = tmp.path().join("artifacts");
    let store = JsonSnapshotStore::new(&snapshot);
    let report = train(&store, &artifact_dir, "drugs.json").unwrap();
    assert_eq!(report.num_docs, 3);

    let model = TfidfModel::load(&artifact_dir).unwrap();
    assert_eq!(model.meta().num_docs, 3);
    assert_eq!(model.meta().num_terms, model.vocabulary().term_num());
    assert_eq!(model.meta().source, "drugs.json");
    assert!(model.meta().built_at.ends_with('Z'));

    let hits = model.recommend("aspirin", 2).unwrap();
    assert_eq!(hits[0].name, "Ibuprofen");
    assert!(hits[0].score > hits[1].score);
}

#[test]
fn missing_snapshot_is_a_record_load_error() {
    let tmp = tempfile::tempdir().unwrap();
    let store = JsonSnapshotStore::new(tmp.path().join("nope.json"));
    let err = train(&store, tmp.path(), "missing").unwrap_err();
    assert!(matches!(err, TrainError::RecordLoad { .. }));
}
