//! Scenario: Maintaining detections of a technique
//!
//! Journey: an analyst removes the `all` detection of T1059 while the
//! `servers` detection stays, logs a new score, and saves.

use dettect_editor::domain::ports::DocumentCodec;
use dettect_editor::domain::services::UndoOutcome;
use dettect_editor::infrastructure::MemoryFileSaver;
use dettect_editor::{DocumentKind, IdentityKey, YamlDocumentCodec};
use serde_yaml_ng::Value;

use crate::common::*;

fn key(s: &str) -> IdentityKey {
    IdentityKey::from(s)
}

fn applicable_to(row: &dettect_editor::Record) -> String {
    dettect_editor::domain::value_objects::key_fragment(row.get("applicable_to"))
}

#[test]
fn scenario_composite_key_delete_removes_exactly_one_entry() {
    let recorder = Recorder::new();
    let saver = MemoryFileSaver::new();
    let mut page = opened(
        DocumentKind::Techniques,
        "techniques.yaml",
        TECHNIQUES,
        &recorder,
        &saver,
    );
    page.select_record(&key("T1059")).unwrap();

    let outcome = page.delete_detail("detection", &key("T1059-all")).unwrap();
    assert_eq!(outcome.index, 0);

    let left = page.details("detection");
    assert_eq!(left.len(), 1);
    assert_eq!(applicable_to(&left[0]), "servers");
    // visibility shares the key but is another collection
    assert_eq!(page.details("visibility").len(), 1);
    // the other technique is untouched
    page.select_record(&key("T1003.001")).unwrap();
    assert_eq!(page.details("detection").len(), 1);
}

#[test]
fn scenario_detail_undo_appends_row() {
    let recorder = Recorder::new();
    let saver = MemoryFileSaver::new();
    let mut page = opened(
        DocumentKind::Techniques,
        "techniques.yaml",
        TECHNIQUES,
        &recorder,
        &saver,
    );
    page.select_record(&key("T1059"));
    let before = page.details("detection");

    page.delete_detail("detection", &key("T1059-all"));
    let undo = page.undo_detail_delete("detection", &key("T1059-all"));

    assert_eq!(undo, UndoOutcome::Restored { index: 1 });
    let after = page.details("detection");
    assert_eq!(after.len(), before.len());
    assert_eq!(after[1], before[0]);
    assert_eq!(after[0], before[1]);
}

#[test]
fn scenario_score_entry_is_saved_on_top() {
    let recorder = Recorder::new();
    let saver = MemoryFileSaver::new();
    let mut page = opened(
        DocumentKind::Techniques,
        "techniques.yaml",
        TECHNIQUES,
        &recorder,
        &saver,
    );
    page.select_record(&key("T1059"));
    assert!(page.add_score_entry("visibility", &key("T1059-all")));
    page.save().unwrap();

    let doc = YamlDocumentCodec
        .load(&saver.last().unwrap().text(), None)
        .unwrap();
    let visibility = doc.records()[0].details("visibility");
    let logbook = visibility[0].details("score_logbook");
    assert_eq!(logbook.len(), 2);
    assert_eq!(logbook[0].get("score"), Some(&Value::from(0)));
    assert_eq!(logbook[0].get("auto_generated"), Some(&Value::from(false)));
    assert_eq!(logbook[1].get("score"), Some(&Value::from(2)));
}

#[test]
fn scenario_new_technique_gets_detail_rows() {
    let recorder = Recorder::new();
    let saver = MemoryFileSaver::new();
    let mut page = opened(
        DocumentKind::Techniques,
        "techniques.yaml",
        TECHNIQUES,
        &recorder,
        &saver,
    );
    page.add_record();
    page.edit_selected(|r| r.set("technique_id", "T1105"));

    assert_eq!(page.details("detection").len(), 1);
    assert_eq!(page.details("visibility").len(), 1);
    page.delete_detail("visibility", &key("T1105-all")).unwrap();
    assert!(page.details("visibility").is_empty());
    page.add_detail("visibility").unwrap();
    assert_eq!(page.details("visibility").len(), 1);
}
