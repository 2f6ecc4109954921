//! Property tests for the YAML save/load round trip.

use proptest::prelude::*;

use dettect_editor::domain::ports::{DocumentCodec, NoopNotifier};
use dettect_editor::domain::schema::SchemaRegistry;
use dettect_editor::infrastructure::{FixedAnswer, MemoryFileSaver, NoopNavigator};
use dettect_editor::{AttackDomain, DocumentKind, PageController, PagePorts, YamlDocumentCodec};

fn name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z][A-Za-z0-9_.-]{0,12}").unwrap()
}

fn kind() -> impl Strategy<Value = DocumentKind> {
    prop::sample::select(DocumentKind::ALL.to_vec())
}

fn domain() -> impl Strategy<Value = AttackDomain> {
    prop::sample::select(AttackDomain::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `load(save(D)) == D` for new files of every kind and domain.
    #[test]
    fn property_new_files_round_trip(
        kind in kind(),
        domain in domain(),
        names in proptest::collection::btree_set(name(), 0..6),
    ) {
        let saver = MemoryFileSaver::new();
        let mut page = PageController::new(
            kind,
            PagePorts {
                notifier: NoopNotifier,
                confirm: FixedAnswer::YES,
                navigator: NoopNavigator,
                saver: saver.clone(),
            },
            YamlDocumentCodec,
        );
        page.new_file(domain);
        for n in &names {
            page.add_record();
            page.edit_selected(|r| r.set(kind.identity_field(), n.as_str()));
        }
        page.save().unwrap();

        let text = saver.last().unwrap().text();
        let reloaded = YamlDocumentCodec.load(&text, Some(kind)).unwrap();
        prop_assert_eq!(Some(&reloaded), page.document(), "{}", text);
    }

    /// PROPERTY: older generations round trip without being upgraded.
    #[test]
    fn property_every_version_round_trips(kind in kind(), domain in domain()) {
        for version in SchemaRegistry::versions(kind) {
            let entry = SchemaRegistry::lookup(kind, version).unwrap();
            let mut doc = SchemaRegistry::new_file(entry, domain);
            doc.records_mut().push(SchemaRegistry::new_record(entry));

            let bytes = YamlDocumentCodec.save(&doc).unwrap();
            let text = String::from_utf8(bytes).unwrap();
            let reloaded = YamlDocumentCodec.load(&text, Some(kind)).unwrap();
            prop_assert_eq!(reloaded.version(), version);
            prop_assert_eq!(&reloaded, &doc, "{}", text);
        }
    }
}
