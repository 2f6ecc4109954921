//! YAML text to [`Document`]

use serde_yaml_ng::{Mapping, Value};
use tracing::debug;

use crate::domain::entities::Document;
use crate::domain::schema::{DomainRule, SchemaEntry, SchemaRegistry};
use crate::domain::value_objects::{AttackDomain, DocumentKind, SchemaVersion};
use crate::error::{EditorError, EditorResult};

pub(super) fn load(text: &str, expected: Option<DocumentKind>) -> EditorResult<Document> {
    let value: Value = serde_yaml_ng::from_str(text).map_err(|e| EditorError::Parse {
        line: e.location().map(|l| l.line()),
        message: e.to_string(),
    })?;
    let mut root = match value {
        Value::Mapping(m) => m,
        Value::Null => {
            return Err(EditorError::Parse {
                line: None,
                message: "the file is empty".to_string(),
            })
        }
        _ => {
            return Err(EditorError::Parse {
                line: None,
                message: "the top level is not a mapping".to_string(),
            })
        }
    };

    let kind = read_kind(&root, expected)?;
    let version = read_version(&root, kind)?;
    let entry = SchemaRegistry::lookup(kind, version).ok_or_else(|| {
        EditorError::schema_mismatch(format!(
            "unsupported version {} for '{}' (supported: {})",
            version,
            kind.file_type(),
            SchemaRegistry::versions(kind)
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        ))
    })?;
    let domain = read_domain(&root, entry)?;

    normalize(&mut root, entry)?;
    debug!(%kind, %version, "loaded document");
    Ok(Document::from_root(kind, version, domain, root))
}

fn read_kind(root: &Mapping, expected: Option<DocumentKind>) -> EditorResult<DocumentKind> {
    let file_type = match root.get("file_type") {
        Some(Value::String(s)) => s.as_str(),
        Some(_) => return Err(EditorError::schema_mismatch("'file_type' is not a string")),
        None => return Err(EditorError::schema_mismatch("missing 'file_type'")),
    };
    let kind = DocumentKind::from_file_type(file_type).ok_or_else(|| {
        EditorError::schema_mismatch(format!("unknown file type '{}'", file_type))
    })?;
    match expected {
        Some(expected) if expected != kind => Err(EditorError::schema_mismatch(format!(
            "expected a '{}' file, got '{}'",
            expected.file_type(),
            file_type
        ))),
        _ => Ok(kind),
    }
}

fn read_version(root: &Mapping, kind: DocumentKind) -> EditorResult<SchemaVersion> {
    let value = root.get("version").ok_or_else(|| {
        EditorError::schema_mismatch(format!("missing 'version' in '{}' file", kind.file_type()))
    })?;
    SchemaVersion::from_value(value)
        .ok_or_else(|| EditorError::schema_mismatch("'version' is not a version number"))
}

fn read_domain(root: &Mapping, entry: &SchemaEntry) -> EditorResult<Option<AttackDomain>> {
    match root.get("domain") {
        None | Some(Value::Null) if entry.domain_rule == DomainRule::Required => Err(
            EditorError::schema_mismatch(format!(
                "missing 'domain' (required since version {})",
                entry.version
            )),
        ),
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => AttackDomain::parse(s)
            .map(Some)
            .ok_or_else(|| EditorError::schema_mismatch(format!("unknown domain '{}'", s))),
        Some(_) => Err(EditorError::schema_mismatch("'domain' is not a string")),
    }
}

/// Bring list-valued fields into list shape so the editing core can rely on it
fn normalize(root: &mut Mapping, entry: &SchemaEntry) -> EditorResult<()> {
    let collection = entry.kind.collection_key();
    match root.get_mut(collection) {
        Some(slot) => {
            let shaped = matches!(slot, Value::Sequence(_) | Value::Mapping(_) | Value::Null);
            if !shaped || !as_list(slot) {
                return Err(EditorError::schema_mismatch(format!(
                    "'{}' is not a list",
                    collection
                )));
            }
        }
        None => {
            root.insert(Value::from(collection), Value::Sequence(Vec::new()));
        }
    }
    if let Some(position) = root
        .get(collection)
        .and_then(Value::as_sequence)
        .and_then(|items| items.iter().position(|item| !item.is_mapping()))
    {
        return Err(EditorError::schema_mismatch(format!(
            "entry #{} of '{}' is not a mapping",
            position + 1,
            collection
        )));
    }

    if let Some(platform) = root.get_mut("platform") {
        as_list(platform);
    }
    if let Some(systems) = root.get_mut("systems") {
        as_list(systems);
        for system in mappings_mut(systems) {
            if let Some(platform) = system.get_mut("platform") {
                as_list(platform);
            }
        }
    }

    if let Some(records) = root.get_mut(collection) {
        for record in mappings_mut(records) {
            for detail in entry.details {
                let Some(rows) = record.get_mut(detail.field) else {
                    continue;
                };
                as_list(rows);
                for row in mappings_mut(rows) {
                    if let Some(logbook) = row.get_mut("score_logbook") {
                        as_list(logbook);
                    }
                }
            }
        }
    }
    Ok(())
}

/// Null becomes `[]`, a scalar or mapping becomes a one-element list.
///
/// Returns `false` for values that cannot stand for a list (tagged values).
fn as_list(value: &mut Value) -> bool {
    match value {
        Value::Sequence(_) => true,
        Value::Null => {
            *value = Value::Sequence(Vec::new());
            true
        }
        Value::Tagged(_) => false,
        other => {
            let single = std::mem::replace(other, Value::Null);
            *other = Value::Sequence(vec![single]);
            true
        }
    }
}

fn mappings_mut(value: &mut Value) -> impl Iterator<Item = &mut Mapping> {
    value
        .as_sequence_mut()
        .into_iter()
        .flat_map(|items| items.iter_mut())
        .filter_map(Value::as_mapping_mut)
}
