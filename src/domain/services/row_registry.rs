//! Row Registry - add, select, delete and undo over one collection
//!
//! The registry owns the identity rule and the undo log of a collection;
//! the rows themselves and the selection are borrowed for each call so the
//! same logic serves top-level records and nested detail rows. Outcomes are
//! returned as values, the caller turns them into notifications.

use tracing::debug;

use crate::domain::entities::{DeletedRows, Record, Selection};
use crate::domain::services::ChangeTracker;
use crate::domain::value_objects::{IdentityKey, KeyFields};

/// Result of [`RowRegistry::add`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A fresh copy of the template was appended and selected
    Added { index: usize },
    /// An empty record already existed; it was selected instead
    PendingEmpty { index: usize },
}

impl AddOutcome {
    pub fn index(&self) -> usize {
        match self {
            AddOutcome::Added { index } | AddOutcome::PendingEmpty { index } => *index,
        }
    }
}

/// Result of a successful [`RowRegistry::select`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOutcome {
    pub index: usize,
    /// Whether the selection moved into this record (detail view should follow)
    pub transitioned: bool,
}

/// Result of a successful [`RowRegistry::delete`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub key: IdentityKey,
    pub index: usize,
    /// The removed record was the empty one being added
    pub was_empty: bool,
}

/// Result of [`RowRegistry::undo_delete`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoOutcome {
    /// The logged record was appended and selected
    Restored { index: usize },
    /// A live record already carries this key; nothing changed
    Conflict,
    /// Nothing with this key was ever deleted
    NotFound,
}

#[derive(Debug, Clone)]
pub struct RowRegistry {
    keys: KeyFields,
    deleted: DeletedRows,
}

impl RowRegistry {
    pub fn new(keys: KeyFields) -> Self {
        Self {
            keys,
            deleted: DeletedRows::new(),
        }
    }

    pub fn keys(&self) -> &KeyFields {
        &self.keys
    }

    pub fn deleted(&self) -> &DeletedRows {
        &self.deleted
    }

    /// Forget the undo log (a different document was loaded)
    pub fn reset(&mut self) {
        self.deleted.clear();
    }

    pub fn key_of(&self, record: &Record, parent: Option<&Record>) -> IdentityKey {
        record.identity_key(&self.keys, parent)
    }

    /// First row whose key equals `key`
    pub fn position(
        &self,
        rows: &[Record],
        key: &IdentityKey,
        parent: Option<&Record>,
    ) -> Option<usize> {
        rows.iter().position(|r| &self.key_of(r, parent) == key)
    }

    /// The empty record being added, if there is one
    pub fn empty_position(&self, rows: &[Record]) -> Option<usize> {
        rows.iter().rposition(|r| r.is_blank(&self.keys))
    }

    /// Append a copy of `template` and select it, unless an empty record is
    /// already pending; then that one is selected and nothing is added.
    pub fn add(
        &self,
        rows: &mut Vec<Record>,
        selection: &mut Selection,
        template: &Record,
        tracker: &mut ChangeTracker,
    ) -> AddOutcome {
        if let Some(index) = self.empty_position(rows) {
            selection.select(index);
            return AddOutcome::PendingEmpty { index };
        }

        rows.push(template.clone());
        tracker.note_mutation();
        let index = rows.len() - 1;
        selection.select(index);
        debug!(index, "added record");
        AddOutcome::Added { index }
    }

    /// Select the first row with `key`; unknown keys leave the selection alone
    pub fn select(
        &self,
        rows: &[Record],
        selection: &mut Selection,
        key: &IdentityKey,
        parent: Option<&Record>,
    ) -> Option<SelectOutcome> {
        let index = self.position(rows, key, parent)?;
        let transitioned = selection.select(index);
        Some(SelectOutcome {
            index,
            transitioned,
        })
    }

    pub fn selected<'a>(&self, rows: &'a [Record], selection: &Selection) -> Option<&'a Record> {
        selection.index().and_then(|i| rows.get(i))
    }

    /// Remove the first row with `key` and log it for undo.
    ///
    /// Deleting the empty record always clears the selection; deleting the
    /// selected record clears it too. Returns `None` when no row matches.
    pub fn delete(
        &mut self,
        rows: &mut Vec<Record>,
        selection: &mut Selection,
        key: &IdentityKey,
        parent: Option<&Record>,
        tracker: &mut ChangeTracker,
    ) -> Option<DeleteOutcome> {
        let index = self.position(rows, key, parent)?;
        let removed = rows.remove(index);
        let was_empty = key.is_empty() || removed.is_blank(&self.keys);

        self.deleted.push(key.clone(), removed);
        if was_empty {
            selection.clear();
        } else {
            selection.on_removed(index);
        }
        tracker.note_mutation();
        debug!(key = %key, index, "deleted record");

        Some(DeleteOutcome {
            key: key.clone(),
            index,
            was_empty,
        })
    }

    /// Bring back the most recently deleted record with `key`.
    ///
    /// Refused when a live row already has that key, so undo never creates
    /// a duplicate. The log entry is kept either way. A logged detail row is
    /// only found again under a parent giving it the same key.
    pub fn undo_delete(
        &self,
        rows: &mut Vec<Record>,
        selection: &mut Selection,
        key: &IdentityKey,
        parent: Option<&Record>,
        tracker: &mut ChangeTracker,
    ) -> UndoOutcome {
        let Some(record) = self.deleted.latest(key) else {
            return UndoOutcome::NotFound;
        };
        // Detail rows borrow key fields from their parent; under another parent
        // the logged row would come back with a different key.
        if &self.key_of(record, parent) != key {
            return UndoOutcome::NotFound;
        }
        if self.position(rows, key, parent).is_some() {
            debug!(key = %key, "undo skipped, key is live");
            return UndoOutcome::Conflict;
        }

        rows.push(record.clone());
        tracker.note_mutation();
        let index = rows.len() - 1;
        selection.select(index);
        UndoOutcome::Restored { index }
    }

    /// Drop the pending empty record, e.g. right before a save
    pub fn remove_empty(
        &self,
        rows: &mut Vec<Record>,
        selection: &mut Selection,
        tracker: &mut ChangeTracker,
    ) -> Option<Record> {
        let index = self.empty_position(rows)?;
        selection.clear();
        tracker.note_mutation();
        Some(rows.remove(index))
    }
}
