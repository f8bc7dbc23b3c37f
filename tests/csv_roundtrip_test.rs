//! CSV handoff-format tests
//!
//! The CSV file is the only contract between the analysis pipeline and
//! the word-cloud pipeline; these tests pin its shape and the reload
//! behavior on both good and bad input.

use jpwordfreq::freq::{load_csv, CsvError, FrequencyTable};
use tempfile::TempDir;

#[test]
fn round_trip_preserves_pairs_and_rank_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("freq.csv");

    let mut table = FrequencyTable::new();
    for _ in 0..10 {
        table.add("青書");
    }
    for _ in 0..5 {
        table.add("外交");
    }
    table.add("平和");
    table.save_csv(&path).unwrap();

    let loaded = load_csv(&path).unwrap();
    assert_eq!(
        loaded,
        vec![
            ("青書".to_string(), 10),
            ("外交".to_string(), 5),
            ("平和".to_string(), 1),
        ]
    );
}

#[test]
fn handwritten_csv_loads_into_expected_mapping() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("freq.csv");
    std::fs::write(&path, "rank,word,count\n1,青書,10\n2,外交,5\n").unwrap();

    let loaded = load_csv(&path).unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0], ("青書".to_string(), 10));
    assert_eq!(loaded[1], ("外交".to_string(), 5));

    // The top listing reports 青書 first
    let top: Vec<&str> = loaded.iter().take(10).map(|(w, _)| w.as_str()).collect();
    assert_eq!(top[0], "青書");
}

#[test]
fn empty_table_round_trips_to_header_only_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("freq.csv");

    FrequencyTable::new().save_csv(&path).unwrap();
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "rank,word,count\n"
    );
    assert!(load_csv(&path).unwrap().is_empty());
}

#[test]
fn malformed_row_is_a_typed_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("freq.csv");
    std::fs::write(&path, "rank,word,count\n1,外交,5\nbroken\n").unwrap();

    match load_csv(&path) {
        Err(CsvError::MalformedRow { line, row }) => {
            assert_eq!(line, 3);
            assert_eq!(row, "broken");
        }
        other => panic!("expected MalformedRow, got {:?}", other.map(|v| v.len())),
    }
}

#[test]
fn non_integer_count_is_a_typed_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("freq.csv");
    std::fs::write(&path, "rank,word,count\n1,外交,5.5\n").unwrap();

    assert!(matches!(
        load_csv(&path),
        Err(CsvError::BadCount { line: 2, .. })
    ));
}

#[test]
fn unwritable_path_is_an_error() {
    let table = FrequencyTable::from_words(["外交"]);
    let result = table.save_csv(std::path::Path::new("/no/such/dir/freq.csv"));
    assert!(result.is_err());
}
