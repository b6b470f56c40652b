//! Tests for the line-encoded file store
//!
//! These tests verify:
//! - The office fixture scenario
//! - Exact on-disk layout and ordering
//! - Persistence across store instances (disk is authoritative)
//! - Missing, malformed and undecodable files
//! - Custom delimiters and suffixes

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use fieldstore::{
    Config, DataStore, Delimiters, DiskBackend, LineFileBackend, LineFileStore, StoreError,
};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_config() -> (TempDir, Config) {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder().data_dir(temp_dir.path()).build();
    (temp_dir, config)
}

fn read_file(config: &Config, name: &str) -> String {
    fs::read_to_string(config.line_path(name)).unwrap()
}

// =============================================================================
// Scenario Tests
// =============================================================================

#[test]
fn test_office_scenario() {
    let (_temp, config) = setup_temp_config();
    let store = LineFileStore::line_file("office", &config);

    store.set_data("jobs", "mark", "sales").unwrap();
    store.set_data("jobs", "kenneth", "sales").unwrap();
    store.set_data("jobs", "jane", "marketing").unwrap();

    assert_eq!(store.get_data("jobs", "mark").unwrap(), "sales");
    assert_eq!(store.get_data("jobs", "jane").unwrap(), "marketing");
    assert!(store.get_data("salary", "mark").unwrap_err().is_entry_not_found());
    assert!(store.get_data("jobs", "unknown").unwrap_err().is_field_not_found());

    assert_eq!(
        read_file(&config, "office"),
        "jobs-mark:sales,kenneth:sales,jane:marketing,\n"
    );
}

#[test]
fn test_two_entries() {
    let (_temp, config) = setup_temp_config();
    let store = LineFileStore::line_file("TextFileTest", &config);

    store.set_data("office jobs", "mark", "sales").unwrap();
    store.set_data("office jobs", "kenneth", "sales").unwrap();
    store.set_data("office jobs", "jane", "marketing").unwrap();
    store.set_data("office jobs", "leroy", "storming").unwrap();
    store.set_data("salary", "mark", "$3000").unwrap();
    store.set_data("salary", "kenneth", "$2000").unwrap();
    store.set_data("salary", "billy", "$50000").unwrap();

    for _ in 0..2 {
        assert_eq!(store.get_data("office jobs", "mark").unwrap(), "sales");
        assert_eq!(store.get_data("office jobs", "jane").unwrap(), "marketing");
        assert_eq!(store.get_data("salary", "mark").unwrap(), "$3000");
        assert_eq!(store.get_data("salary", "kenneth").unwrap(), "$2000");
        assert_eq!(store.get_data("salary", "billy").unwrap(), "$50000");
    }

    assert!(store.get_data("location", "mark").unwrap_err().is_not_found());
    assert!(store.get_data("office jobs", "ken").unwrap_err().is_not_found());

    assert_eq!(
        read_file(&config, "TextFileTest"),
        "office jobs-mark:sales,kenneth:sales,jane:marketing,leroy:storming,\n\
         salary-mark:$3000,kenneth:$2000,billy:$50000,\n"
    );
}

// =============================================================================
// Ordering Tests
// =============================================================================

#[test]
fn test_update_keeps_line_and_field_order() {
    let (_temp, config) = setup_temp_config();
    let store = LineFileStore::line_file("order", &config);

    store.set_data("a", "x", "1").unwrap();
    store.set_data("b", "x", "2").unwrap();
    store.set_data("c", "x", "3").unwrap();
    store.set_data("b", "y", "4").unwrap();
    store.set_data("b", "x", "5").unwrap();
    store.set_data("a", "z", "6").unwrap();

    assert_eq!(
        read_file(&config, "order"),
        "a-x:1,z:6,\nb-x:5,y:4,\nc-x:3,\n"
    );
}

#[test]
fn test_repeated_write_leaves_file_unchanged() {
    let (_temp, config) = setup_temp_config();
    let store = LineFileStore::line_file("idem", &config);

    store.set_data("e", "f", "v").unwrap();
    let before = read_file(&config, "idem");
    store.set_data("e", "f", "v").unwrap();

    assert_eq!(read_file(&config, "idem"), before);
}

#[test]
fn test_empty_value_round_trip() {
    let (_temp, config) = setup_temp_config();
    let store = LineFileStore::line_file("empty", &config);

    store.set_data("e", "f", "").unwrap();
    store.set_data("e", "g", "x").unwrap();

    assert_eq!(store.get_data("e", "f").unwrap(), "");
    assert_eq!(store.get_data("e", "g").unwrap(), "x");
}

// =============================================================================
// Persistence Tests
// =============================================================================

#[test]
fn test_fresh_instance_reads_from_disk() {
    let (_temp, config) = setup_temp_config();

    {
        let store = LineFileStore::line_file("persist", &config);
        store.set_data("jobs", "mark", "sales").unwrap();
        store.set_data("jobs", "jane", "marketing").unwrap();
    }

    let reopened = LineFileStore::line_file("persist", &config);
    assert!(reopened.cache().is_empty());
    assert_eq!(reopened.get_data("jobs", "jane").unwrap(), "marketing");
    assert_eq!(reopened.cache().get("jobs", "jane").unwrap(), "marketing");
}

#[test]
fn test_other_instance_writes_are_seen_by_deep_read() {
    let (_temp, config) = setup_temp_config();
    let first = LineFileStore::line_file("shared", &config);
    let second = LineFileStore::line_file("shared", &config);

    first.set_data("jobs", "mark", "sales").unwrap();
    assert_eq!(second.get_data("jobs", "mark").unwrap(), "sales");

    first.set_data("jobs", "mark", "support").unwrap();
    assert_eq!(second.get_shallow("jobs", "mark").unwrap(), "sales");
    assert_eq!(second.get_data("jobs", "mark").unwrap(), "support");
}

// =============================================================================
// Missing / Malformed File Tests
// =============================================================================

#[test]
fn test_missing_file_is_not_found() {
    let (_temp, config) = setup_temp_config();
    let store = LineFileStore::line_file("bad_file", &config);

    let err = store.get_data("entry0", "data5").unwrap_err();

    assert!(err.is_not_found());
    assert!(matches!(err.root(), StoreError::StorageUnavailable { .. }));
    assert!(!config.line_path("bad_file").exists());
}

#[test]
fn test_first_write_creates_file() {
    let (_temp, config) = setup_temp_config();
    let store = LineFileStore::line_file("fresh", &config);

    store.set_data("e", "f", "v").unwrap();

    assert_eq!(read_file(&config, "fresh"), "e-f:v,\n");
}

#[test]
fn test_malformed_line_hides_rest_of_file() {
    let (temp, _config) = setup_temp_config();
    let path: PathBuf = temp.path().join("broken.txt");
    fs::write(&path, "a-x:1,\nnot a record\nb-x:2,\n").unwrap();

    let backend = LineFileBackend::at_path(&path, Delimiters::default());

    assert_eq!(backend.read_from_disk("a", "x").unwrap(), "1");
    assert!(matches!(
        backend.read_from_disk("b", "x"),
        Err(StoreError::EntryNotFound { .. })
    ));
    assert_eq!(backend.entries().unwrap().len(), 1);
}

#[test]
fn test_write_preserves_malformed_tail() {
    let (temp, _config) = setup_temp_config();
    let path = temp.path().join("broken.txt");
    fs::write(&path, "a-x:1,\nnot a record\nb-x:2,\n").unwrap();

    let backend = LineFileBackend::at_path(&path, Delimiters::default());
    backend.write_to_disk("b", "x", "3").unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "a-x:1,\nb-x:3,\nnot a record\nb-x:2,\n"
    );
    assert_eq!(backend.read_from_disk("b", "x").unwrap(), "3");
}

#[test]
fn test_write_refuses_to_replace_undecodable_file() {
    let (_temp, config) = setup_temp_config();
    let path = config.line_path("office");
    let original: &[u8] = b"jobs-mark:sales,\nsalary-mark:caf\xE9,\n";
    fs::write(&path, original).unwrap();

    let store = LineFileStore::line_file("office", &config);

    assert!(store.get_data("jobs", "mark").unwrap_err().is_not_found());

    let err = store.set_data("other", "f", "v").unwrap_err();
    assert!(matches!(err, StoreError::Io(ref e) if e.kind() == ErrorKind::InvalidData));
    assert!(!err.is_not_found());
    assert_eq!(fs::read(&path).unwrap(), original);
}

#[test]
fn test_write_error_surfaces_immediately() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder()
        .data_dir(temp_dir.path().join("missing_dir"))
        .build();
    let store = LineFileStore::line_file("office", &config);

    let err = store.set_data("jobs", "mark", "sales").unwrap_err();

    assert!(matches!(err, StoreError::Io(_)));
    assert!(!config.line_path("office").exists());
    assert_eq!(store.cache().get("jobs", "mark").unwrap(), "sales");
}

#[test]
fn test_entries_of_missing_file_is_empty() {
    let (_temp, config) = setup_temp_config();
    let backend = LineFileBackend::open("nothing", &config);
    assert!(backend.entries().unwrap().is_empty());
}

// =============================================================================
// Configuration Tests
// =============================================================================

#[test]
fn test_custom_suffix_and_delimiters() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder()
        .data_dir(temp_dir.path())
        .line_suffix(".db")
        .delimiters(Delimiters::new('|', ';', '=').unwrap())
        .build();
    let store = LineFileStore::line_file("custom", &config);

    store.set_data("jobs", "mark", "sales-lead").unwrap();
    assert!(store.set_data("jobs", "mark", "a=b").is_err());

    let path = temp_dir.path().join("custom.db");
    assert_eq!(fs::read_to_string(path).unwrap(), "jobs|mark=sales-lead;\n");
    assert_eq!(store.get_data("jobs", "mark").unwrap(), "sales-lead");
}

#[test]
fn test_backend_path_from_config() {
    let (_temp, config) = setup_temp_config();
    let store = LineFileStore::line_file("office", &config);
    assert_eq!(store.backend().path(), config.line_path("office"));
    assert!(store.backend().path().ends_with("office.txt"));
}
