//! Document entity - one loaded administration file
//!
//! The document keeps the whole root mapping (so unknown keys and key order
//! survive a save) and lifts the records of its collection out into typed
//! [`Record`]s. Only the loader and the schema registry build documents.

use serde_yaml_ng::{Mapping, Value};

use super::record::Record;
use crate::domain::value_objects::{AttackDomain, DocumentKind, SchemaVersion};

/// Root keys that describe the file itself and are not editable as plain fields
const RESERVED_KEYS: [&str; 3] = ["version", "file_type", "domain"];

/// In-memory administration file
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    kind: DocumentKind,
    version: SchemaVersion,
    domain: Option<AttackDomain>,
    /// Root mapping; the collection key holds a placeholder while records live in `records`
    root: Mapping,
    records: Vec<Record>,
}

impl Document {
    /// Assemble a document from an already validated root mapping.
    ///
    /// The collection value is taken out of `root`; callers normalise it to a
    /// sequence of mappings first. Non-mapping entries are dropped.
    pub fn from_root(
        kind: DocumentKind,
        version: SchemaVersion,
        domain: Option<AttackDomain>,
        mut root: Mapping,
    ) -> Self {
        let collection_key = Value::from(kind.collection_key());
        let records = match root.get_mut(&collection_key) {
            Some(slot) => match std::mem::replace(slot, Value::Null) {
                Value::Sequence(items) => items
                    .into_iter()
                    .filter_map(|v| Record::from_value(v).ok())
                    .collect(),
                _ => Vec::new(),
            },
            None => {
                root.insert(collection_key, Value::Null);
                Vec::new()
            }
        };

        Self {
            kind,
            version,
            domain,
            root,
            records,
        }
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn version(&self) -> SchemaVersion {
        self.version
    }

    /// Domain as declared in the file (absent in older versions)
    pub fn domain(&self) -> Option<AttackDomain> {
        self.domain
    }

    /// Domain used for platform tables: undeclared means enterprise
    pub fn effective_domain(&self) -> AttackDomain {
        self.domain.unwrap_or_default()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn records_mut(&mut self) -> &mut Vec<Record> {
        &mut self.records
    }

    /// Root-level field (never the collection)
    pub fn field(&self, key: &str) -> Option<&Value> {
        if key == self.kind.collection_key() {
            return None;
        }
        self.root.get(key)
    }

    /// Set a root-level field.
    ///
    /// Returns `false` (and changes nothing) for the file header keys and
    /// the collection key.
    pub fn set_field(&mut self, key: &str, value: impl Into<Value>) -> bool {
        if RESERVED_KEYS.contains(&key) || key == self.kind.collection_key() {
            return false;
        }
        self.root.insert(Value::from(key), value.into());
        true
    }

    pub fn name(&self) -> Option<&str> {
        self.field("name").and_then(Value::as_str)
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.root
            .insert(Value::from("name"), Value::from(name.into()));
    }

    /// Values of the root `platform` list (strings only)
    pub fn platforms(&self) -> Vec<String> {
        string_list(self.field("platform"))
    }

    pub fn set_platforms<I, S>(&mut self, platforms: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let list: Vec<Value> = platforms.into_iter().map(|p| Value::from(p.into())).collect();
        self.root
            .insert(Value::from("platform"), Value::Sequence(list));
    }

    /// Entries of the data-source 1.1 `systems` list
    pub fn systems(&self) -> Vec<Record> {
        match self.field("systems") {
            Some(Value::Sequence(items)) => items
                .iter()
                .filter_map(|v| Record::from_value(v.clone()).ok())
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Rebuild the full YAML tree, records back in place
    pub fn to_value(&self) -> Value {
        let mut root = self.root.clone();
        let items = self
            .records
            .iter()
            .cloned()
            .map(Record::into_value)
            .collect();
        root.insert(
            Value::from(self.kind.collection_key()),
            Value::Sequence(items),
        );
        Value::Mapping(root)
    }
}

/// Strings of a YAML list; a bare string counts as a one-element list
pub(crate) fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Sequence(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        Some(Value::String(s)) => vec![s.clone()],
        _ => Vec::new(),
    }
}
