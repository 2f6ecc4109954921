//! Property tests for identity keys of records and detail rows.

use proptest::prelude::*;

use dettect_editor::domain::value_objects::{KeyFields, KEY_SEPARATOR};
use dettect_editor::Record;

fn fragment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9.]{0,8}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a composite key joins its parts in field order.
    #[test]
    fn property_composite_key_joins_parts(id in fragment(), system in fragment()) {
        let keys = KeyFields::composite(["technique_id", "applicable_to"]);
        let mut row = Record::new();
        row.set("applicable_to", system.as_str());
        let mut parent = Record::new();
        parent.set("technique_id", id.as_str());

        let key = row.identity_key(&keys, Some(&parent));
        prop_assert_eq!(key.as_str(), format!("{}{}{}", id, KEY_SEPARATOR, system));
    }

    /// PROPERTY: fields on the row win over the parent's.
    #[test]
    fn property_row_fields_shadow_parent(own in fragment(), inherited in fragment()) {
        let keys = KeyFields::single("technique_id");
        let mut row = Record::new();
        row.set("technique_id", own.as_str());
        let mut parent = Record::new();
        parent.set("technique_id", inherited.as_str());

        let key = row.identity_key(&keys, Some(&parent));
        prop_assert_eq!(key.as_str(), own.as_str());
    }

    /// PROPERTY: a list value renders as its comma-joined items.
    #[test]
    fn property_list_values_join_with_commas(items in proptest::collection::vec(fragment(), 1..4)) {
        let keys = KeyFields::single("applicable_to");
        let mut row = Record::new();
        let list: Vec<serde_yaml_ng::Value> = items.iter().map(|s| s.as_str().into()).collect();
        row.set("applicable_to", serde_yaml_ng::Value::Sequence(list));

        let key = row.identity_key(&keys, None);
        prop_assert_eq!(key.as_str(), items.join(","));
    }
}
