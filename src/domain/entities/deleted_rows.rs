//! DeletedRows entity - append-only undo log of removed records

use super::record::Record;
use crate::domain::value_objects::IdentityKey;

/// A removed record together with the key it had when it was removed
#[derive(Debug, Clone, PartialEq)]
pub struct DeletedRow {
    key: IdentityKey,
    record: Record,
}

impl DeletedRow {
    pub fn key(&self) -> &IdentityKey {
        &self.key
    }

    pub fn record(&self) -> &Record {
        &self.record
    }
}

/// Undo log for one collection.
///
/// Entries are never pruned, so the same key can appear several times; the
/// most recent entry wins on lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeletedRows {
    entries: Vec<DeletedRow>,
}

impl DeletedRows {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: IdentityKey, record: Record) {
        self.entries.push(DeletedRow { key, record });
    }

    /// Most recently deleted record with this key
    pub fn latest(&self, key: &IdentityKey) -> Option<&Record> {
        self.entries
            .iter()
            .rev()
            .find(|row| &row.key == key)
            .map(|row| &row.record)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DeletedRow> {
        self.entries.iter()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str, comment: &str) -> Record {
        let mut r = Record::new();
        r.set("group_name", name);
        r.set("campaign", comment);
        r
    }

    #[test]
    fn latest_entry_wins() {
        let mut log = DeletedRows::new();
        log.push(IdentityKey::from("APT3"), named("APT3", "first"));
        log.push(IdentityKey::from("APT28"), named("APT28", "other"));
        log.push(IdentityKey::from("APT3"), named("APT3", "second"));

        let found = log.latest(&IdentityKey::from("APT3")).unwrap();
        assert_eq!(found.get_str("campaign"), Some("second"));
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn lookup_is_exact() {
        let mut log = DeletedRows::new();
        log.push(IdentityKey::from("APT3"), named("APT3", ""));
        assert!(log.latest(&IdentityKey::from("apt3")).is_none());
        assert!(log.latest(&IdentityKey::from("APT3 ")).is_none());
    }
}
