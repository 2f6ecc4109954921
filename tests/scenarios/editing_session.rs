//! Scenario: Editing a group file
//!
//! Journey: an analyst opens a group file, adds a group, removes one,
//! changes their mind, and saves.
//!
//! Success Criteria:
//! - Only one unnamed group exists at any time
//! - Undo brings the removed group back, but never twice
//! - The dirty flag follows the edits and is cleared by a save only

use dettect_editor::domain::ports::NotificationLevel;
use dettect_editor::domain::services::{AddOutcome, UndoOutcome};
use dettect_editor::infrastructure::MemoryFileSaver;
use dettect_editor::{DocumentKind, IdentityKey, OpenOutcome, YamlDocumentCodec};
use dettect_editor::domain::ports::DocumentCodec;

use crate::common::*;

fn key(s: &str) -> IdentityKey {
    IdentityKey::from(s)
}

#[test]
fn scenario_add_delete_undo_save() {
    let recorder = Recorder::new();
    let saver = MemoryFileSaver::new();
    let mut page = opened(DocumentKind::Groups, "groups.yaml", GROUPS, &recorder, &saver);

    // Step 1: add a group twice; the second add only reselects
    assert_eq!(page.add_record(), Some(AddOutcome::Added { index: 2 }));
    assert_eq!(page.add_record(), Some(AddOutcome::PendingEmpty { index: 2 }));
    assert_eq!(recorder.last_note().unwrap().level, NotificationLevel::Warning);

    // Step 2: name it
    page.edit_selected(|r| r.set("group_name", "APT29"));
    assert_eq!(page.selected_key(), Some(key("APT29")));

    // Step 3: remove FIN7 and undo
    page.delete_record(&key("FIN7")).unwrap();
    assert_eq!(page.undo_delete(&key("FIN7")), UndoOutcome::Restored { index: 2 });
    assert_eq!(page.undo_delete(&key("FIN7")), UndoOutcome::Conflict);
    assert_eq!(page.records().len(), 3);

    // Step 4: save
    assert!(page.is_dirty());
    page.save().unwrap();
    assert!(!page.is_dirty());

    let saved = saver.last().unwrap();
    assert_eq!(saved.filename, "groups.yaml");
    let reloaded = YamlDocumentCodec
        .load(&saved.text(), Some(DocumentKind::Groups))
        .unwrap();
    let names: Vec<&str> = reloaded
        .records()
        .iter()
        .filter_map(|r| r.get_str("group_name"))
        .collect();
    assert_eq!(names, ["APT3", "APT29", "FIN7"]);
}

/// Deleting a key, adding a new record with the same key, then undoing must
/// not bring the old record back next to the new one.
#[test]
fn scenario_undo_is_a_no_op_on_conflict() {
    let recorder = Recorder::new();
    let saver = MemoryFileSaver::new();
    let mut page = opened(DocumentKind::Groups, "groups.yaml", GROUPS, &recorder, &saver);

    page.delete_record(&key("APT3")).unwrap();
    let before = page.records().len();
    page.add_record().unwrap();
    page.edit_selected(|r| r.set("group_name", "APT3"));

    assert_eq!(page.undo_delete(&key("APT3")), UndoOutcome::Conflict);
    assert_eq!(page.records().len(), before + 1);
    let apt3 = page
        .records()
        .iter()
        .filter(|r| r.get_str("group_name") == Some("APT3"))
        .count();
    assert_eq!(apt3, 1);
}

#[test]
fn scenario_save_on_clean_document_stays_clean_even_when_invalid() {
    let recorder = Recorder::new();
    let saver = MemoryFileSaver::new();
    let text = GROUPS.replace("platform: [all]", "platform: []");
    let mut page = opened(DocumentKind::Groups, "groups.yaml", &text, &recorder, &saver);
    assert!(!page.is_dirty());

    assert!(page.save().is_err());
    assert!(!page.is_dirty());
    assert!(saver.saved().is_empty());

    // tracker is armed again
    page.delete_record(&key("FIN7"));
    assert!(page.is_dirty());
}

#[test]
fn scenario_discarding_unsaved_work_needs_consent() {
    let recorder = Recorder::new();
    let saver = MemoryFileSaver::new();
    let mut page = opened(DocumentKind::Groups, "groups.yaml", GROUPS, &recorder, &saver);
    page.delete_record(&key("APT3"));

    recorder.answer.set(false);
    assert_eq!(
        page.open_file("other.yaml", GROUPS).unwrap(),
        OpenOutcome::Cancelled
    );
    assert_eq!(page.filename(), Some("groups.yaml"));
    assert_eq!(page.records().len(), 1);

    recorder.answer.set(true);
    assert_eq!(
        page.open_file("other.yaml", GROUPS).unwrap(),
        OpenOutcome::Opened
    );
    assert_eq!(page.records().len(), 2);
    assert_eq!(recorder.questions.get(), 2);
}

#[test]
fn scenario_selection_drives_navigation() {
    let recorder = Recorder::new();
    let saver = MemoryFileSaver::new();
    let mut page = opened(DocumentKind::Groups, "groups.yaml", GROUPS, &recorder, &saver);

    page.select_record(&key("APT3"));
    page.select_record(&key("APT3"));
    page.select_record(&key("FIN7"));
    assert_eq!(recorder.navigations.get(), 2);

    page.select_previous();
    assert_eq!(page.selected_key(), Some(key("APT3")));
    // keyboard navigation does not scroll
    assert_eq!(recorder.navigations.get(), 2);
}
