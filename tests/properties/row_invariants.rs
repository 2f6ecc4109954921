//! Property tests for record add/delete/undo through the page controller.

use std::collections::BTreeSet;

use proptest::prelude::*;

use dettect_editor::domain::ports::NoopNotifier;
use dettect_editor::domain::services::UndoOutcome;
use dettect_editor::infrastructure::{FixedAnswer, MemoryFileSaver, NoopNavigator};
use dettect_editor::{AttackDomain, IdentityKey, PageController, PagePorts, YamlDocumentCodec};

type Page = PageController<NoopNotifier, FixedAnswer, NoopNavigator, MemoryFileSaver, YamlDocumentCodec>;

fn groups_page() -> Page {
    let mut page = PageController::groups(PagePorts {
        notifier: NoopNotifier,
        confirm: FixedAnswer::YES,
        navigator: NoopNavigator,
        saver: MemoryFileSaver::new(),
    });
    page.new_file(AttackDomain::Enterprise);
    page
}

#[derive(Debug, Clone)]
enum Op {
    Add,
    Delete(usize),
    Name(usize, String),
    Undo(usize),
}

fn group_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Z][A-Za-z0-9]{0,6}").unwrap()
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => Just(Op::Add),
        2 => (0..8usize).prop_map(Op::Delete),
        3 => (0..8usize, group_name()).prop_map(|(i, n)| Op::Name(i, n)),
        2 => (0..8usize).prop_map(Op::Undo),
    ]
}

fn key_at(page: &Page, i: usize) -> Option<IdentityKey> {
    let records = page.records();
    if records.is_empty() {
        return None;
    }
    let name = records[i % records.len()].get_str("group_name").unwrap_or("");
    Some(IdentityKey::from(name))
}

fn apply(page: &mut Page, op: &Op) {
    match op {
        Op::Add => {
            page.add_record();
        }
        Op::Delete(i) => {
            if let Some(key) = key_at(page, *i) {
                page.delete_record(&key);
            }
        }
        Op::Name(i, name) => {
            if let Some(key) = key_at(page, *i) {
                page.select_record(&key);
                page.edit_selected(|r| r.set("group_name", name.as_str()));
            }
        }
        Op::Undo(i) => {
            let keys: Vec<IdentityKey> = page
                .deleted_records()
                .iter()
                .map(|d| d.key().clone())
                .collect();
            if !keys.is_empty() {
                page.undo_delete(&keys[i % keys.len()]);
            }
        }
    }
}

fn empty_count(page: &Page) -> usize {
    page.records()
        .iter()
        .filter(|r| r.get_str("group_name").unwrap_or("").is_empty())
        .count()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: no edit sequence leaves more than one unnamed record.
    #[test]
    fn property_at_most_one_empty_record(ops in proptest::collection::vec(op(), 0..40)) {
        let mut page = groups_page();
        for op in &ops {
            apply(&mut page, op);
            prop_assert!(empty_count(&page) <= 1, "after {:?}", op);
        }
    }

    /// PROPERTY: delete then undo gives back the same records, the restored
    /// one appended at the end.
    #[test]
    fn property_undo_restores_deleted_record(
        names in proptest::collection::btree_set(group_name(), 1..8),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut page = groups_page();
        for name in &names {
            page.add_record();
            page.edit_selected(|r| r.set("group_name", name.as_str()));
        }
        let before: Vec<_> = page.records().to_vec();
        let victim = pick.get(&before).clone();
        let key = IdentityKey::from(victim.get_str("group_name").unwrap_or(""));

        page.delete_record(&key).unwrap();
        let outcome = page.undo_delete(&key);

        prop_assert_eq!(outcome, UndoOutcome::Restored { index: before.len() - 1 });
        prop_assert_eq!(page.records().last(), Some(&victim));
        let as_set = |records: &[dettect_editor::Record]| -> BTreeSet<String> {
            records.iter().filter_map(|r| r.get_str("group_name")).map(String::from).collect()
        };
        prop_assert_eq!(as_set(page.records()), as_set(before.as_slice()));
        prop_assert_eq!(page.records().len(), before.len());
    }

    /// PROPERTY: after any edit sequence a save leaves the page clean.
    #[test]
    fn property_save_leaves_page_clean(ops in proptest::collection::vec(op(), 0..20)) {
        let mut page = groups_page();
        for op in &ops {
            apply(&mut page, op);
        }
        let _ = page.save();
        prop_assert!(!page.is_dirty());
        let _ = page.save();
        prop_assert!(!page.is_dirty());
    }
}
