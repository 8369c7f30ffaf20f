//! Catalog loading from disk.

use greencity::catalog::{load_catalog, CatalogError};
use greencity::CatalogConfig;
use greencity_test::{SAMPLE_CSV, SAMPLE_CSV_DEVICES};

#[test]
fn loads_sample_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("devices.csv");
    std::fs::write(&path, SAMPLE_CSV).unwrap();

    let devices = load_catalog(&path, &CatalogConfig::default()).unwrap();
    assert_eq!(devices.len(), SAMPLE_CSV_DEVICES);
    assert_eq!(devices[1].name(), "Heat Pump");
    assert_eq!(devices[1].objective_value(), 15_500.0);
}

#[test]
fn empty_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("devices.csv");
    std::fs::write(&path, "").unwrap();

    let err = load_catalog(&path, &CatalogConfig::default()).unwrap_err();
    assert!(matches!(err, CatalogError::Empty(ref p) if *p == path));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.csv");

    let err = load_catalog(&path, &CatalogConfig::default()).unwrap_err();
    match err {
        CatalogError::Io { path: p, source } => {
            assert_eq!(p, path);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("unexpected error: {other}"),
    }
}
