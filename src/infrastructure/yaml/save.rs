//! [`Document`] to YAML bytes

use serde_yaml_ng::{Mapping, Value};

use crate::domain::entities::Document;
use crate::domain::schema::canonical_platform;
use crate::domain::value_objects::AttackDomain;
use crate::error::{EditorError, EditorResult};

/// Prefix of editor-only keys that never reach the file
pub const TRANSIENT_PREFIX: &str = "_";

pub(super) fn save(doc: &Document) -> EditorResult<Vec<u8>> {
    let mut value = doc.to_value();
    let domain = doc.effective_domain();

    if let Value::Mapping(root) = &mut value {
        canonicalize_platforms(root, domain);
    }
    strip_transient(&mut value);

    serde_yaml_ng::to_string(&value)
        .map(String::into_bytes)
        .map_err(|e| EditorError::Serialize(e.to_string()))
}

/// Rewrite `platform` values to their canonical casing (`windows` => `Windows`)
fn canonicalize_platforms(root: &mut Mapping, domain: AttackDomain) {
    if let Some(platform) = root.get_mut("platform") {
        canonicalize_list(platform, domain);
    }
    if let Some(Value::Sequence(systems)) = root.get_mut("systems") {
        for system in systems.iter_mut().filter_map(Value::as_mapping_mut) {
            if let Some(platform) = system.get_mut("platform") {
                canonicalize_list(platform, domain);
            }
        }
    }
}

fn canonicalize_list(value: &mut Value, domain: AttackDomain) {
    let items: Vec<&mut Value> = match value {
        Value::Sequence(items) => items.iter_mut().collect(),
        single => vec![single],
    };
    for item in items {
        if let Value::String(s) = item {
            if let Some(canonical) = canonical_platform(domain, s) {
                *s = canonical.to_string();
            }
        }
    }
}

/// Remove every mapping key starting with [`TRANSIENT_PREFIX`], at any depth
fn strip_transient(value: &mut Value) {
    match value {
        Value::Mapping(map) => {
            map.retain(|k, _| !k.as_str().is_some_and(|k| k.starts_with(TRANSIENT_PREFIX)));
            for (_, v) in map.iter_mut() {
                strip_transient(v);
            }
        }
        Value::Sequence(items) => items.iter_mut().for_each(strip_transient),
        Value::Tagged(tagged) => strip_transient(&mut tagged.value),
        _ => {}
    }
}
