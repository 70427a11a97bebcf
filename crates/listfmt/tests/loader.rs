//! Tests for the directory and in-memory locale data loaders.

use std::collections::BTreeMap;
use std::fs;

use listfmt::{
    DirectoryLoader, FormatLoader, ListMode, ListPatterns, ListStyle, LoadError, LocaleIndex,
    MemoryLoader,
};

const DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/cldr");

fn standard(end: &str) -> ListPatterns {
    let group = BTreeMap::from([
        ("start".to_string(), "{0}, {1}".to_string()),
        ("middle".to_string(), "{0}, {1}".to_string()),
        ("end".to_string(), end.to_string()),
    ]);
    BTreeMap::from([("standard".to_string(), group)])
}

// =========================================================================
// DirectoryLoader
// =========================================================================

#[test]
fn loads_fixture_index_and_format() {
    let loader = DirectoryLoader::new(DATA_DIR);
    let index = loader.load_locale_index().unwrap();
    assert!(index.contains("zh_Hant_HK"));

    let format = loader.load_format("fr").unwrap();
    assert_eq!(format.locale_identifier(), "fr");
    assert_eq!(format.list_patterns().len(), 9);
    let raw = format
        .raw_patterns(ListMode::Standard, ListStyle::Default)
        .unwrap();
    assert_eq!(raw["end"], "{0} et {1}");
}

#[test]
fn every_fixture_has_valid_pattern_sets() {
    let loader = DirectoryLoader::new(DATA_DIR);
    let index = loader.load_locale_index().unwrap();
    for identifier in index.identifiers() {
        let format = loader.load_format(identifier).unwrap();
        for mode in ListMode::ALL {
            for style in ListStyle::ALL {
                assert!(
                    format.try_pattern_set(mode, style).unwrap().is_some(),
                    "{identifier} {mode} {style}"
                );
            }
        }
    }
}

#[test]
fn missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let loader = DirectoryLoader::new(dir.path());
    match loader.load_format("de") {
        Err(LoadError::NotFound { identifier }) => assert_eq!(identifier, "de"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn malformed_json_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("de.json"), "{ \"localeIdentifier\": ").unwrap();

    let loader = DirectoryLoader::new(dir.path());
    match loader.load_format("de") {
        Err(error @ LoadError::Json { .. }) => {
            assert!(error.to_string().contains("de.json"));
        }
        other => panic!("expected Json error, got {other:?}"),
    }
}

#[test]
fn schema_mismatch_is_a_json_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("localeInformation.json"),
        r#"{ "localeIdentifiers": "en" }"#,
    )
    .unwrap();

    let loader = DirectoryLoader::new(dir.path());
    assert!(matches!(
        loader.load_locale_index(),
        Err(LoadError::Json { .. })
    ));
}

#[test]
fn identifiers_that_are_not_file_names_are_rejected() {
    let loader = DirectoryLoader::new(DATA_DIR);
    for identifier in ["", "../en", "en/fr", "en.json", "en-US", "zh Hant"] {
        assert!(
            matches!(
                loader.load_format(identifier),
                Err(LoadError::InvalidIdentifier { .. })
            ),
            "{identifier:?} should be rejected"
        );
    }
}

#[test]
fn directory_with_written_data() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("localeInformation.json"),
        r#"{ "localeIdentifiers": ["root", "nl"], "parentLocale": {} }"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("nl.json"),
        r#"{
            "localeIdentifier": "nl",
            "listPatterns": {
                "standard": { "start": "{0}, {1}", "middle": "{0}, {1}", "end": "{0} en {1}" }
            }
        }"#,
    )
    .unwrap();

    let loader = DirectoryLoader::new(dir.path());
    assert_eq!(loader.root(), dir.path());
    assert_eq!(
        loader.load_locale_index().unwrap().resolve("nl_BE").as_deref(),
        Some("nl")
    );
    let format = loader.load_format("nl").unwrap();
    let patterns = format
        .pattern_set(ListMode::Standard, ListStyle::Default)
        .unwrap();
    assert_eq!(patterns.end().source(), "{0} en {1}");
    assert!(format.pattern_set(ListMode::Or, ListStyle::Default).is_none());
}

// =========================================================================
// MemoryLoader
// =========================================================================

#[test]
fn memory_loader_serves_inserted_data() {
    let index = LocaleIndex::from_identifiers(["root", "sv"]);
    let mut loader = MemoryLoader::new(index.clone()).with_format("root", standard("{0}, {1}"));
    loader.insert_format("sv", standard("{0} och {1}"));

    assert_eq!(loader.load_locale_index().unwrap(), index);
    let format = loader.load_format("sv").unwrap();
    assert_eq!(format.locale_identifier(), "sv");
    assert_eq!(
        format
            .pattern_set(ListMode::Standard, ListStyle::Default)
            .unwrap()
            .end()
            .source(),
        "{0} och {1}"
    );
}

#[test]
fn memory_loader_normalizes_identifiers() {
    let loader = MemoryLoader::default().with_format("sr-Latn", standard("{0} i {1}"));
    assert!(loader.load_format("sr_Latn").is_ok());
}

#[test]
fn memory_loader_reports_missing_data() {
    let loader = MemoryLoader::default();
    assert!(matches!(
        loader.load_format("en"),
        Err(LoadError::NotFound { .. })
    ));
}

#[test]
fn invalid_patterns_yield_no_pattern_set() {
    let loader = MemoryLoader::default().with_format("xx", standard("{0} and {0}"));
    let format = loader.load_format("xx").unwrap();
    assert!(
        format
            .try_pattern_set(ListMode::Standard, ListStyle::Default)
            .is_err()
    );
    assert!(
        format
            .pattern_set(ListMode::Standard, ListStyle::Default)
            .is_none()
    );
}
