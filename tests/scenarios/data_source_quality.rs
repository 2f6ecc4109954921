//! Scenario: Adding a data source to a 1.1 file
//!
//! Journey: an analyst opens an enterprise data source file (version 1.1)
//! whose only data source lacks `available_for_data_analytics`, adds a data
//! source, names it and saves.
//!
//! Success Criteria:
//! - The file is edited in version 1.1, not upgraded
//! - The added record carries the default `data_quality` with all five
//!   dimensions present and zero

use dettect_editor::domain::ports::DocumentCodec;
use dettect_editor::domain::schema::templates::DATA_QUALITY_DIMENSIONS;
use dettect_editor::infrastructure::MemoryFileSaver;
use dettect_editor::{DocumentKind, SchemaVersion, YamlDocumentCodec};
use serde_yaml_ng::Value;

use crate::common::*;

#[test]
fn scenario_added_data_source_has_zeroed_data_quality() {
    let recorder = Recorder::new();
    let saver = MemoryFileSaver::new();
    let mut page = opened(
        DocumentKind::DataSources,
        "data-sources.yaml",
        DATA_SOURCES_V11,
        &recorder,
        &saver,
    );
    assert_eq!(page.document().unwrap().version(), SchemaVersion::new(1, 1));

    page.add_record().unwrap();
    page.edit_selected(|r| r.set("data_source_name", "Network Traffic Flow"));
    page.save().unwrap();

    let text = saver.last().unwrap().text();
    let doc = YamlDocumentCodec
        .load(&text, Some(DocumentKind::DataSources))
        .unwrap();
    assert_eq!(doc.version(), SchemaVersion::new(1, 1));
    assert_eq!(doc.records().len(), 2);

    let added = &doc.records()[1];
    assert_eq!(added.get_str("data_source_name"), Some("Network Traffic Flow"));
    let rows = added.details("data_source");
    assert_eq!(rows.len(), 1);
    let quality = rows[0].get("data_quality").and_then(Value::as_mapping).unwrap();
    for dimension in DATA_QUALITY_DIMENSIONS {
        assert_eq!(
            quality.get(dimension),
            Some(&Value::from(0)),
            "dimension {} in:\n{}",
            dimension,
            text
        );
    }

    // the existing record is written back as it was
    let existing = doc.records()[0].details("data_source");
    assert!(!existing[0].contains("available_for_data_analytics"));
}

#[test]
fn scenario_health_flags_missing_analytics_flag() {
    let recorder = Recorder::new();
    let saver = MemoryFileSaver::new();
    let page = opened(
        DocumentKind::DataSources,
        "data-sources.yaml",
        DATA_SOURCES_V11,
        &recorder,
        &saver,
    );

    let messages: Vec<String> = page
        .health()
        .issues()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert!(
        messages
            .iter()
            .any(|m| m.contains("available_for_data_analytics")),
        "{:?}",
        messages
    );
}

#[test]
fn scenario_version_10_records_are_flat() {
    let recorder = Recorder::new();
    let saver = MemoryFileSaver::new();
    let mut page = opened(
        DocumentKind::DataSources,
        "data-sources.yaml",
        DATA_SOURCES_V10,
        &recorder,
        &saver,
    );

    page.add_record().unwrap();
    let record = page.selected_record().unwrap();
    assert!(record.contains("data_quality"));
    assert!(!record.contains("data_source"));
    assert!(page.add_detail("data_source").is_none());
}
