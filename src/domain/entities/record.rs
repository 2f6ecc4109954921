//! Record entity - one editable row of a collection
//!
//! A record is an ordered YAML mapping. Fields the editor does not know about
//! are carried along untouched so a save writes them back.

use serde::{Deserialize, Serialize};
use serde_yaml_ng::{Mapping, Value};

use crate::domain::value_objects::{key_fragment, IdentityKey, KeyFields};

/// One row: a data source, technique, group, or a nested detail entry
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Mapping);

impl Record {
    pub fn new() -> Self {
        Self(Mapping::new())
    }

    pub fn from_mapping(mapping: Mapping) -> Self {
        Self(mapping)
    }

    /// Wrap a YAML value; non-mappings are handed back unchanged
    pub fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Mapping(m) => Ok(Self(m)),
            other => Err(other),
        }
    }

    pub fn into_value(self) -> Value {
        Value::Mapping(self.0)
    }

    pub fn as_mapping(&self) -> &Mapping {
        &self.0
    }

    pub fn as_mapping_mut(&mut self) -> &mut Mapping {
        &mut self.0
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn get_mut(&mut self, field: &str) -> Option<&mut Value> {
        self.0.get_mut(field)
    }

    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }

    /// Set a field, keeping its position when it already exists
    pub fn set(&mut self, field: &str, value: impl Into<Value>) {
        self.0.insert(Value::from(field), value.into());
    }

    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.0.remove(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Identity of this record.
    ///
    /// Each key field is looked up on the record first and on `parent`
    /// second, so a detail row can borrow e.g. `technique_id` from the
    /// technique that contains it.
    pub fn identity_key(&self, keys: &KeyFields, parent: Option<&Record>) -> IdentityKey {
        let parts: Vec<String> = keys
            .fields()
            .iter()
            .map(|field| {
                let value = self
                    .get(field)
                    .or_else(|| parent.and_then(|p| p.get(field)));
                key_fragment(value)
            })
            .collect();
        KeyFields::join(&parts)
    }

    /// Copy of just the given key fields, used as the parent context of detail rows
    pub fn project(&self, keys: &KeyFields) -> Record {
        let mut out = Mapping::new();
        for field in keys.fields() {
            if let Some(v) = self.get(field) {
                out.insert(Value::from(field.as_str()), v.clone());
            }
        }
        Record(out)
    }

    /// A record is empty (the one being added) when every key field it
    /// carries itself renders as the empty string.
    pub fn is_blank(&self, keys: &KeyFields) -> bool {
        let own: Vec<&Value> = keys.fields().iter().filter_map(|f| self.get(f)).collect();
        !own.is_empty() && own.iter().all(|v| key_fragment(Some(v)).is_empty())
    }

    /// Run `f` over the nested rows stored under `field`.
    ///
    /// Returns `None` when the field is not a sequence of mappings.
    pub fn with_details<R>(&mut self, field: &str, f: impl FnOnce(&mut Vec<Record>) -> R) -> Option<R> {
        let slot = self.0.get_mut(field)?;
        let items = match slot {
            Value::Sequence(items) => items,
            _ => return None,
        };
        if !items.iter().all(Value::is_mapping) {
            return None;
        }

        let mut rows: Vec<Record> = std::mem::take(items)
            .into_iter()
            .filter_map(|v| Record::from_value(v).ok())
            .collect();
        let result = f(&mut rows);
        *items = rows.into_iter().map(Record::into_value).collect();
        Some(result)
    }

    /// Read-only view of the nested rows under `field`
    pub fn details(&self, field: &str) -> Vec<Record> {
        match self.get(field) {
            Some(Value::Sequence(items)) => items
                .iter()
                .filter_map(|v| Record::from_value(v.clone()).ok())
                .collect(),
            _ => Vec::new(),
        }
    }
}

impl From<Mapping> for Record {
    fn from(mapping: Mapping) -> Self {
        Self(mapping)
    }
}
