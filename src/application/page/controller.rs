//! Page Controller
//!
//! One editing page per document kind: open or create a file, add, select,
//! edit and delete records (and the detail rows of the selected record),
//! undo deletions, save.
//!
//! The controller owns its document exclusively. Every mutation goes through
//! a method here so the change tracker sees it; saves run inside a tracker
//! suspension that commits only when the bytes were delivered.

use std::collections::HashMap;

use serde_yaml_ng::Value;
use tracing::{debug, info, warn};

use crate::domain::entities::{DeletedRows, Document, Record, Selection};
use crate::domain::policies::validate_for_save;
use crate::domain::ports::{
    ConfirmDialog, DetailNavigator, DocumentCodec, FileSaver, Notification, Notifier, UndoAction,
};
use crate::domain::schema::{DetailSpec, SchemaEntry, SchemaRegistry};
use crate::domain::services::{
    check_health, AddOutcome, ChangeTracker, DeleteOutcome, HealthReport, RowRegistry,
    SelectOutcome, UndoOutcome,
};
use crate::domain::value_objects::{AttackDomain, DocumentKind, IdentityKey, KeyFields};
use crate::error::{EditorError, EditorResult};
use crate::infrastructure::YamlDocumentCodec;

use super::options::{PageOptions, PagePorts};

pub const UNSAVED_TITLE: &str = "Unsaved changes";
pub const UNSAVED_MESSAGE: &str =
    "You have unsaved changes that will be lost if you choose to continue.";
pub const UNDO_LABEL: &str = "Undo this action";
pub const REMOVAL_TITLE: &str = "Removal status";
pub const HEALTH_TITLE: &str = "File health";

/// Health issues spelled out in the after-load notification
const HEALTH_PREVIEW: usize = 5;

/// Result of [`PageController::open_file`] and [`PageController::new_file`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    Opened,
    /// The user chose to keep their unsaved changes
    Cancelled,
}

/// Undo log and selection of one detail collection (e.g. `detection`)
#[derive(Debug, Clone)]
struct DetailState {
    registry: RowRegistry,
    selection: Selection,
}

impl DetailState {
    fn new(spec: &DetailSpec) -> Self {
        Self {
            registry: RowRegistry::new(spec.keys()),
            selection: Selection::new(),
        }
    }
}

/// Editing page for one document kind
///
/// Generic over its ports so front ends (and tests) plug in their own
/// notification, confirmation, navigation and delivery.
pub struct PageController<N, C, D, S, K = YamlDocumentCodec>
where
    N: Notifier,
    C: ConfirmDialog,
    D: DetailNavigator,
    S: FileSaver,
    K: DocumentCodec,
{
    kind: DocumentKind,
    options: PageOptions,
    ports: PagePorts<N, C, D, S>,
    codec: K,
    filename: Option<String>,
    document: Option<Document>,
    entry: Option<&'static SchemaEntry>,
    selection: Selection,
    rows: RowRegistry,
    details: HashMap<&'static str, DetailState>,
    tracker: ChangeTracker,
    health: HealthReport,
}

impl<N, C, D, S> PageController<N, C, D, S, YamlDocumentCodec>
where
    N: Notifier,
    C: ConfirmDialog,
    D: DetailNavigator,
    S: FileSaver,
{
    pub fn data_sources(ports: PagePorts<N, C, D, S>) -> Self {
        Self::new(DocumentKind::DataSources, ports, YamlDocumentCodec)
    }

    pub fn techniques(ports: PagePorts<N, C, D, S>) -> Self {
        Self::new(DocumentKind::Techniques, ports, YamlDocumentCodec)
    }

    pub fn groups(ports: PagePorts<N, C, D, S>) -> Self {
        Self::new(DocumentKind::Groups, ports, YamlDocumentCodec)
    }
}

impl<N, C, D, S, K> PageController<N, C, D, S, K>
where
    N: Notifier,
    C: ConfirmDialog,
    D: DetailNavigator,
    S: FileSaver,
    K: DocumentCodec,
{
    pub fn new(kind: DocumentKind, ports: PagePorts<N, C, D, S>, codec: K) -> Self {
        Self {
            kind,
            options: PageOptions::default(),
            ports,
            codec,
            filename: None,
            document: None,
            entry: None,
            selection: Selection::new(),
            rows: RowRegistry::new(KeyFields::single(kind.identity_field())),
            details: HashMap::new(),
            tracker: ChangeTracker::new(),
            health: HealthReport::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: PageOptions) -> Self {
        self.options = options;
        self
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn options(&self) -> &PageOptions {
        &self.options
    }

    pub fn ports(&self) -> &PagePorts<N, C, D, S> {
        &self.ports
    }

    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    pub fn is_dirty(&self) -> bool {
        self.tracker.is_dirty()
    }

    /// Findings of the last health check (run on open and new when
    /// `health_on_load` is set, and by [`Self::run_health`])
    pub fn health(&self) -> &HealthReport {
        &self.health
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Undo log of top-level records
    pub fn deleted_records(&self) -> &DeletedRows {
        self.rows.deleted()
    }

    /// Undo log of a detail collection, once something was deleted from it
    pub fn deleted_details(&self, field: &str) -> Option<&DeletedRows> {
        self.details.get(field).map(|d| d.registry.deleted())
    }

    // ----- Files -----

    /// Replace the current document with the file `text`.
    ///
    /// Errors are notified and returned; the previous document stays loaded.
    pub fn open_file(&mut self, filename: &str, text: &str) -> EditorResult<OpenOutcome> {
        if !self.may_discard() {
            debug!(filename, "open cancelled, keeping unsaved changes");
            return Ok(OpenOutcome::Cancelled);
        }

        let doc = match self.codec.load(text, Some(self.kind)) {
            Ok(doc) => doc,
            Err(e) => {
                warn!(filename, error = %e, "open rejected");
                self.notify_error(&e);
                return Err(e);
            }
        };

        info!(
            filename,
            kind = %self.kind,
            version = %doc.version(),
            records = doc.records().len(),
            "opened file"
        );
        self.install(filename.to_string(), doc);
        if self.options.health_on_load {
            self.notify_health();
        }
        Ok(OpenOutcome::Opened)
    }

    /// Start a fresh file at the newest schema version
    pub fn new_file(&mut self, domain: AttackDomain) -> OpenOutcome {
        if !self.may_discard() {
            return OpenOutcome::Cancelled;
        }
        let entry = SchemaRegistry::latest(self.kind);
        let doc = SchemaRegistry::new_file(entry, domain);
        let filename = format!("{}-new.yaml", self.kind.collection_key());
        info!(%filename, %domain, version = %entry.version, "new file");
        self.install(filename, doc);
        OpenOutcome::Opened
    }

    /// Validate, serialize and hand the file to the saver.
    ///
    /// The written file never contains the pending empty record, which is
    /// dropped from the page after a successful write. On failure nothing on
    /// the page changes and it stays as dirty as it was.
    pub fn save(&mut self) -> EditorResult<()> {
        let result = self.save_inner();
        match &result {
            Ok(()) => info!(filename = ?self.filename, "saved document"),
            Err(e) => {
                warn!(error = %e, "save failed");
                self.notify_error(e);
            }
        }
        result
    }

    /// Save under a new filename, which later saves keep using
    pub fn save_as(&mut self, filename: &str) -> EditorResult<()> {
        if self.document.is_none() {
            return Err(EditorError::NoDocument);
        }
        self.filename = Some(filename.to_string());
        self.save()
    }

    fn save_inner(&mut self) -> EditorResult<()> {
        let doc = self.document.as_ref().ok_or(EditorError::NoDocument)?;
        let filename = self.filename.clone().ok_or(EditorError::NoDocument)?;

        validate_for_save(doc).map_err(EditorError::Validation)?;
        let bytes = match self.rows.empty_position(doc.records()) {
            Some(index) => {
                let mut written = doc.clone();
                written.records_mut().remove(index);
                self.codec.save(&written)?
            }
            None => self.codec.save(doc)?,
        };
        self.ports.saver.save_as(&filename, &bytes)?;

        // The pending empty record leaves the page only once the file is written
        let mut guard = self.tracker.suspend();
        if let Some(doc) = self.document.as_mut() {
            if self
                .rows
                .remove_empty(doc.records_mut(), &mut self.selection, &mut guard)
                .is_some()
            {
                debug!("dropped empty record after save");
                for state in self.details.values_mut() {
                    state.selection.clear();
                }
            }
        }
        guard.commit();
        Ok(())
    }

    /// Re-run the health checks on the current document
    pub fn run_health(&mut self) -> &HealthReport {
        self.health = self
            .document
            .as_ref()
            .map(check_health)
            .unwrap_or_default();
        &self.health
    }

    // ----- Records -----

    pub fn records(&self) -> &[Record] {
        self.document.as_ref().map(|d| d.records()).unwrap_or(&[])
    }

    /// Append a new record from the schema template and select it
    pub fn add_record(&mut self) -> Option<AddOutcome> {
        let entry = self.entry?;
        let doc = self.document.as_mut()?;
        let template = SchemaRegistry::new_record(entry);

        let outcome = self.rows.add(
            doc.records_mut(),
            &mut self.selection,
            &template,
            &mut self.tracker,
        );
        self.reset_detail_selection();

        if let AddOutcome::PendingEmpty { .. } = outcome {
            self.notify_pending_empty(self.kind.record_noun());
        }
        Some(outcome)
    }

    /// Select the record with `key`; the detail view follows on a transition
    pub fn select_record(&mut self, key: &IdentityKey) -> Option<SelectOutcome> {
        let doc = self.document.as_ref()?;
        let outcome = self
            .rows
            .select(doc.records(), &mut self.selection, key, None)?;
        if outcome.transitioned {
            self.reset_detail_selection();
            self.ports.navigator.show_detail();
        }
        Some(outcome)
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.reset_detail_selection();
    }

    /// Move the selection to the following record; `false` at the end
    pub fn select_next(&mut self) -> bool {
        self.step_selection(true)
    }

    /// Move the selection to the preceding record; `false` at the start
    pub fn select_previous(&mut self) -> bool {
        self.step_selection(false)
    }

    fn step_selection(&mut self, forward: bool) -> bool {
        let Some(current) = self.selection.index() else {
            return false;
        };
        let target = if forward {
            current + 1
        } else {
            match current.checked_sub(1) {
                Some(t) => t,
                None => return false,
            }
        };
        if target >= self.records().len() {
            return false;
        }
        self.selection.select(target);
        self.reset_detail_selection();
        true
    }

    pub fn selected_record(&self) -> Option<&Record> {
        self.rows.selected(self.records(), &self.selection)
    }

    pub fn selected_key(&self) -> Option<IdentityKey> {
        self.selected_record().map(|r| self.rows.key_of(r, None))
    }

    /// Edit the selected record in place
    pub fn edit_selected<R>(&mut self, f: impl FnOnce(&mut Record) -> R) -> Option<R> {
        let index = self.selection.index()?;
        let record = self.document.as_mut()?.records_mut().get_mut(index)?;
        let result = f(record);
        self.tracker.note_mutation();
        Some(result)
    }

    /// Edit file-level fields (name, platform, systems, ...)
    pub fn edit_header<R>(&mut self, f: impl FnOnce(&mut Document) -> R) -> Option<R> {
        let doc = self.document.as_mut()?;
        let result = f(doc);
        let len = doc.records().len();
        self.tracker.note_mutation();
        if self.selection.index().is_some_and(|i| i >= len) {
            self.clear_selection();
        }
        Some(result)
    }

    /// Remove the record with `key` and offer an undo
    pub fn delete_record(&mut self, key: &IdentityKey) -> Option<DeleteOutcome> {
        let doc = self.document.as_mut()?;
        let outcome = self.rows.delete(
            doc.records_mut(),
            &mut self.selection,
            key,
            None,
            &mut self.tracker,
        );
        let Some(outcome) = outcome else {
            warn!(key = %key, "delete of unknown record ignored");
            return None;
        };
        if self.selection.is_empty() {
            self.reset_detail_selection();
        }

        let kind = self.kind;
        self.notify_removal(
            kind.record_noun(),
            kind.record_title(),
            kind.collection_key(),
            &outcome,
        );
        Some(outcome)
    }

    /// Bring back the most recently deleted record with `key`
    pub fn undo_delete(&mut self, key: &IdentityKey) -> UndoOutcome {
        let Some(doc) = self.document.as_mut() else {
            return UndoOutcome::NotFound;
        };
        let outcome = self.rows.undo_delete(
            doc.records_mut(),
            &mut self.selection,
            key,
            None,
            &mut self.tracker,
        );
        self.log_undo(key, outcome);
        if let UndoOutcome::Restored { .. } = outcome {
            self.reset_detail_selection();
        }
        outcome
    }

    // ----- Detail rows of the selected record -----

    fn detail_spec(&self, field: &str) -> Option<&'static DetailSpec> {
        self.entry?.detail(field)
    }

    /// Rows of `field` in the selected record
    pub fn details(&self, field: &str) -> Vec<Record> {
        self.selected_record()
            .map(|r| r.details(field))
            .unwrap_or_default()
    }

    /// Selected row of `field`, if one was added or restored since the record was selected
    pub fn selected_detail(&self, field: &str) -> Option<Record> {
        let index = self.details.get(field)?.selection.index()?;
        self.details(field).into_iter().nth(index)
    }

    /// Append a detail row from the schema template to the selected record
    pub fn add_detail(&mut self, field: &str) -> Option<AddOutcome> {
        let entry = self.entry?;
        let spec = entry.detail(field)?;
        let template = SchemaRegistry::new_detail(entry, field)?;
        let index = self.selection.index()?;
        let record = self.document.as_mut()?.records_mut().get_mut(index)?;

        if !record.contains(spec.field) {
            record.set(spec.field, Value::Sequence(Vec::new()));
        }
        let state = self
            .details
            .entry(spec.field)
            .or_insert_with(|| DetailState::new(spec));
        let tracker = &mut self.tracker;
        let outcome = record.with_details(spec.field, |rows| {
            state
                .registry
                .add(rows, &mut state.selection, &template, tracker)
        })?;

        if let AddOutcome::PendingEmpty { .. } = outcome {
            self.notify_pending_empty(&detail_noun(spec.field));
        }
        Some(outcome)
    }

    /// Remove a detail row of the selected record and offer an undo
    pub fn delete_detail(&mut self, field: &str, key: &IdentityKey) -> Option<DeleteOutcome> {
        let spec = self.detail_spec(field)?;
        let index = self.selection.index()?;
        let record = self.document.as_mut()?.records_mut().get_mut(index)?;

        let context = record.project(&spec.keys());
        let state = self
            .details
            .entry(spec.field)
            .or_insert_with(|| DetailState::new(spec));
        let tracker = &mut self.tracker;
        let outcome = record
            .with_details(spec.field, |rows| {
                state
                    .registry
                    .delete(rows, &mut state.selection, key, Some(&context), tracker)
            })
            .flatten();
        let Some(outcome) = outcome else {
            warn!(field, key = %key, "delete of unknown detail row ignored");
            return None;
        };

        let noun = detail_noun(spec.field);
        self.notify_removal(&noun, &capitalize(&noun), spec.field, &outcome);
        Some(outcome)
    }

    /// Bring back a deleted detail row into the selected record
    pub fn undo_detail_delete(&mut self, field: &str, key: &IdentityKey) -> UndoOutcome {
        let Some(spec) = self.detail_spec(field) else {
            return UndoOutcome::NotFound;
        };
        let Some(index) = self.selection.index() else {
            return UndoOutcome::NotFound;
        };
        let Some(record) = self
            .document
            .as_mut()
            .and_then(|d| d.records_mut().get_mut(index))
        else {
            return UndoOutcome::NotFound;
        };
        let Some(state) = self.details.get_mut(spec.field) else {
            return UndoOutcome::NotFound;
        };

        let created = !record.contains(spec.field);
        if created {
            record.set(spec.field, Value::Sequence(Vec::new()));
        }
        let context = record.project(&spec.keys());
        let tracker = &mut self.tracker;
        let outcome = record
            .with_details(spec.field, |rows| {
                state
                    .registry
                    .undo_delete(rows, &mut state.selection, key, Some(&context), tracker)
            })
            .unwrap_or(UndoOutcome::NotFound);
        if created && !matches!(outcome, UndoOutcome::Restored { .. }) {
            record.remove(spec.field);
        }
        self.log_undo(key, outcome);
        outcome
    }

    /// Put a default score entry at the top of a detail row's `score_logbook`
    pub fn add_score_entry(&mut self, field: &str, detail_key: &IdentityKey) -> bool {
        let Some(spec) = self.detail_spec(field) else {
            return false;
        };
        let Some(score) = SchemaRegistry::new_score_entry(spec.field) else {
            return false;
        };
        let Some(index) = self.selection.index() else {
            return false;
        };
        let Some(record) = self
            .document
            .as_mut()
            .and_then(|d| d.records_mut().get_mut(index))
        else {
            return false;
        };

        let keys = spec.keys();
        let context = record.project(&keys);
        let registry = RowRegistry::new(keys);
        let added = record
            .with_details(spec.field, |rows| {
                let pos = registry.position(rows, detail_key, Some(&context))?;
                let row = &mut rows[pos];
                match row.get_mut("score_logbook") {
                    Some(Value::Sequence(entries)) => entries.insert(0, score.into_value()),
                    _ => row.set("score_logbook", Value::Sequence(vec![score.into_value()])),
                }
                Some(())
            })
            .flatten()
            .is_some();

        if added {
            self.tracker.note_mutation();
        }
        added
    }

    // ----- Internals -----

    /// Whether the current document may be replaced
    fn may_discard(&self) -> bool {
        if self.document.is_none() || !self.tracker.is_dirty() || !self.options.confirm_discard {
            return true;
        }
        self.ports.confirm.confirm(UNSAVED_TITLE, UNSAVED_MESSAGE)
    }

    fn install(&mut self, filename: String, doc: Document) {
        self.entry = SchemaRegistry::lookup(doc.kind(), doc.version());
        self.health = if self.options.health_on_load {
            check_health(&doc)
        } else {
            HealthReport::default()
        };
        self.document = Some(doc);
        self.filename = Some(filename);
        self.selection.clear();
        self.rows.reset();
        self.details.clear();
        self.tracker.arm_clean();
    }

    fn reset_detail_selection(&mut self) {
        for state in self.details.values_mut() {
            state.selection.clear();
        }
    }

    fn log_undo(&self, key: &IdentityKey, outcome: UndoOutcome) {
        match outcome {
            UndoOutcome::Restored { index } => debug!(key = %key, index, "restored record"),
            UndoOutcome::Conflict => warn!(key = %key, "undo skipped, a record with this key exists"),
            UndoOutcome::NotFound => debug!(key = %key, "nothing to undo"),
        }
    }

    fn notify_pending_empty(&self, noun: &str) {
        self.ports.notifier.notify(Notification::warning(
            format!("Add new {}", noun),
            format!("Only one {} can be added at a time.", noun),
        ));
    }

    fn notify_removal(&self, noun: &str, title: &str, collection: &str, outcome: &DeleteOutcome) {
        let message = if outcome.was_empty {
            format!("The empty {} is removed.", noun.to_lowercase())
        } else {
            format!("{} '{}' is removed.", title, outcome.key)
        };
        self.ports.notifier.notify(
            Notification::info(REMOVAL_TITLE, message).with_action(UndoAction {
                label: UNDO_LABEL.to_string(),
                key: outcome.key.clone(),
                collection: collection.to_string(),
            }),
        );
    }

    fn notify_error(&self, error: &EditorError) {
        self.ports
            .notifier
            .notify(Notification::danger(error.title(), error.to_string()));
    }

    fn notify_health(&self) {
        if self.health.is_empty() {
            return;
        }
        let mut message = format!(
            "{} error(s) and {} warning(s) found",
            self.health.error_count(),
            self.health.warning_count()
        );
        for issue in self.health.issues().iter().take(HEALTH_PREVIEW) {
            message.push('\n');
            message.push_str(&issue.to_string());
        }
        let hidden = self.health.issues().len().saturating_sub(HEALTH_PREVIEW);
        if hidden > 0 {
            message.push_str(&format!("\n... and {} more", hidden));
        }
        self.ports
            .notifier
            .notify(Notification::warning(HEALTH_TITLE, message));
    }
}

/// `data_source` => `data source`
fn detail_noun(field: &str) -> String {
    field.replace('_', " ")
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
