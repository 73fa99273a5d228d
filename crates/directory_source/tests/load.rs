use std::fs;

use directory_core::MalformedDataError;
use directory_source::{load_records, SourceError};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn init_logging() {
    directory_logging::initialize_for_tests();
}

#[test]
fn loads_records_in_document_order() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("team.json");
    fs::write(
        &path,
        r#"[
            {"id": 10, "name": "Zed", "jobTitle": "Engineer"},
            {"id": 2, "name": "Amy", "jobTitle": "Designer", "skills": ["Figma"]}
        ]"#,
    )
    .unwrap();

    let store = load_records(&path).unwrap();
    let names: Vec<_> = store.all().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Zed", "Amy"]);
}

#[test]
fn missing_file_is_io_error() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let result = load_records(&temp.path().join("absent.json"));
    assert!(matches!(result, Err(SourceError::Io { .. })));
}

#[test]
fn duplicate_ids_reject_whole_document() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("team.json");
    fs::write(
        &path,
        r#"[
            {"id": 1, "name": "A", "jobTitle": "Engineer"},
            {"id": 1, "name": "B", "jobTitle": "Engineer"}
        ]"#,
    )
    .unwrap();

    match load_records(&path) {
        Err(SourceError::Malformed { source, .. }) => assert_eq!(
            source,
            MalformedDataError::DuplicateId {
                id: 1,
                first_index: 0,
                second_index: 1,
            }
        ),
        other => panic!("expected malformed data error, got {other:?}"),
    }
}

#[test]
fn truncated_document_is_syntax_error() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("team.json");
    fs::write(&path, r#"[{"id": 1, "name": "A""#).unwrap();

    assert!(matches!(
        load_records(&path),
        Err(SourceError::Malformed {
            source: MalformedDataError::Syntax { .. },
            ..
        })
    ));
}

#[test]
fn bundled_team_data_is_valid() {
    init_logging();
    let path =
        std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data/team-data.json");
    let store = load_records(&path).unwrap();
    assert_eq!(store.len(), 8);
}
