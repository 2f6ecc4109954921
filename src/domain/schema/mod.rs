//! Schema Registry
//!
//! Versioned templates and enumerations for every administration file the
//! editor understands. Older generations stay registered next to the newest
//! one so files are edited in the version they were written in; nothing here
//! upgrades a file.

mod platforms;
pub mod templates;

use serde_yaml_ng::{Mapping, Value};

pub use platforms::{canonical_platform, platform_conversion, platforms, PLATFORM_ALL};

use crate::domain::entities::{Document, Record};
use crate::domain::value_objects::{AttackDomain, DocumentKind, KeyFields, SchemaVersion};

/// Whether a file version carries the `domain` key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainRule {
    /// May be present; absent means enterprise
    Optional,
    /// Must be present
    Required,
}

/// A nested collection inside each record (e.g. a technique's `detection[]`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailSpec {
    /// Field of the record holding the rows
    pub field: &'static str,
    /// Identity of a row; fields missing on the row come from the record
    pub key_fields: &'static [&'static str],
}

impl DetailSpec {
    pub fn keys(&self) -> KeyFields {
        KeyFields::composite(self.key_fields.iter().copied())
    }
}

/// One supported (kind, version) generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaEntry {
    pub kind: DocumentKind,
    pub version: SchemaVersion,
    pub domain_rule: DomainRule,
    pub details: &'static [DetailSpec],
    /// Whether the file lists its platforms per `systems` entry instead of a root `platform`
    pub uses_systems: bool,
}

impl SchemaEntry {
    pub fn detail(&self, field: &str) -> Option<&'static DetailSpec> {
        self.details.iter().find(|d| d.field == field)
    }

    /// Identity of a top-level record
    pub fn record_keys(&self) -> KeyFields {
        KeyFields::single(self.kind.identity_field())
    }
}

const TECHNIQUE_DETAILS: &[DetailSpec] = &[
    DetailSpec {
        field: "detection",
        key_fields: &["technique_id", "applicable_to"],
    },
    DetailSpec {
        field: "visibility",
        key_fields: &["technique_id", "applicable_to"],
    },
];

const DATA_SOURCE_V11_DETAILS: &[DetailSpec] = &[DetailSpec {
    field: "data_source",
    key_fields: &["data_source_name", "applicable_to"],
}];

const ENTRIES: &[SchemaEntry] = &[
    SchemaEntry {
        kind: DocumentKind::DataSources,
        version: SchemaVersion::new(1, 0),
        domain_rule: DomainRule::Optional,
        details: &[],
        uses_systems: false,
    },
    SchemaEntry {
        kind: DocumentKind::DataSources,
        version: SchemaVersion::new(1, 1),
        domain_rule: DomainRule::Required,
        details: DATA_SOURCE_V11_DETAILS,
        uses_systems: true,
    },
    SchemaEntry {
        kind: DocumentKind::Techniques,
        version: SchemaVersion::new(1, 2),
        domain_rule: DomainRule::Optional,
        details: TECHNIQUE_DETAILS,
        uses_systems: false,
    },
    SchemaEntry {
        kind: DocumentKind::Groups,
        version: SchemaVersion::new(1, 0),
        domain_rule: DomainRule::Optional,
        details: &[],
        uses_systems: false,
    },
];

/// Static lookup over the supported schema generations
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaRegistry;

impl SchemaRegistry {
    pub fn lookup(kind: DocumentKind, version: SchemaVersion) -> Option<&'static SchemaEntry> {
        ENTRIES
            .iter()
            .find(|e| e.kind == kind && e.version == version)
    }

    pub fn supports(kind: DocumentKind, version: SchemaVersion) -> bool {
        Self::lookup(kind, version).is_some()
    }

    /// Every supported version of a kind, oldest first
    pub fn versions(kind: DocumentKind) -> Vec<SchemaVersion> {
        let mut versions: Vec<SchemaVersion> = ENTRIES
            .iter()
            .filter(|e| e.kind == kind)
            .map(|e| e.version)
            .collect();
        versions.sort();
        versions
    }

    pub fn latest(kind: DocumentKind) -> &'static SchemaEntry {
        ENTRIES
            .iter()
            .filter(|e| e.kind == kind)
            .max_by_key(|e| e.version)
            .unwrap_or(&ENTRIES[0])
    }

    /// Skeleton of a brand-new file
    pub fn new_file(entry: &SchemaEntry, domain: AttackDomain) -> Document {
        let kind = entry.kind;
        let mut root = Mapping::new();
        root.insert(Value::from("version"), entry.version.to_value());
        root.insert(Value::from("file_type"), Value::from(kind.file_type()));
        if kind != DocumentKind::Groups {
            root.insert(Value::from("name"), Value::from("example"));
        }
        root.insert(Value::from("domain"), Value::from(domain.as_str()));
        if entry.uses_systems {
            root.insert(
                Value::from("systems"),
                Value::Sequence(vec![templates::system()]),
            );
        } else {
            root.insert(Value::from("platform"), templates::platform_all());
        }
        root.insert(
            Value::from(kind.collection_key()),
            Value::Sequence(Vec::new()),
        );

        Document::from_root(kind, entry.version, Some(domain), root)
    }

    /// Default record for the collection of `entry`
    pub fn new_record(entry: &SchemaEntry) -> Record {
        match (entry.kind, entry.uses_systems) {
            (DocumentKind::DataSources, false) => templates::data_source_v10(),
            (DocumentKind::DataSources, true) => templates::data_source_v11(),
            (DocumentKind::Techniques, _) => templates::technique(),
            (DocumentKind::Groups, _) => templates::group(),
        }
    }

    /// Default nested row for `field`, if `entry` has such a detail collection
    pub fn new_detail(entry: &SchemaEntry, field: &str) -> Option<Record> {
        entry.detail(field)?;
        match field {
            "detection" => Some(templates::detection()),
            "visibility" => Some(templates::visibility()),
            "data_source" => Some(templates::data_source_detail_v11()),
            _ => None,
        }
    }

    /// Default `score_logbook` entry for a detection or visibility row
    pub fn new_score_entry(field: &str) -> Option<Record> {
        match field {
            "detection" => Some(templates::detection_score()),
            "visibility" => Some(templates::visibility_score()),
            _ => None,
        }
    }
}
