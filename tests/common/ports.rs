//! Port implementations that record what a page asked for.

use std::cell::{Cell, RefCell};

use dettect_editor::domain::ports::{ConfirmDialog, DetailNavigator, Notification, Notifier};
use dettect_editor::infrastructure::MemoryFileSaver;
use dettect_editor::{DocumentKind, PageController, PagePorts, YamlDocumentCodec};

pub struct Recorder {
    pub notes: RefCell<Vec<Notification>>,
    pub answer: Cell<bool>,
    pub questions: Cell<usize>,
    pub navigations: Cell<usize>,
}

impl Recorder {
    pub fn new() -> Self {
        Self {
            notes: RefCell::new(Vec::new()),
            answer: Cell::new(true),
            questions: Cell::new(0),
            navigations: Cell::new(0),
        }
    }

    pub fn last_note(&self) -> Option<Notification> {
        self.notes.borrow().last().cloned()
    }
}

impl Default for Recorder {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for Recorder {
    fn notify(&self, notification: Notification) {
        self.notes.borrow_mut().push(notification);
    }
}

impl ConfirmDialog for Recorder {
    fn confirm(&self, _title: &str, _message: &str) -> bool {
        self.questions.set(self.questions.get() + 1);
        self.answer.get()
    }
}

impl DetailNavigator for Recorder {
    fn show_detail(&self) {
        self.navigations.set(self.navigations.get() + 1);
    }
}

pub type RecordedPage<'a> =
    PageController<&'a Recorder, &'a Recorder, &'a Recorder, MemoryFileSaver, YamlDocumentCodec>;

/// Page of `kind` wired to `recorder`, saving into `saver`
pub fn page<'a>(kind: DocumentKind, recorder: &'a Recorder, saver: &MemoryFileSaver) -> RecordedPage<'a> {
    let ports = PagePorts {
        notifier: recorder,
        confirm: recorder,
        navigator: recorder,
        saver: saver.clone(),
    };
    PageController::new(kind, ports, YamlDocumentCodec)
}

/// Page with `text` opened as `filename`
pub fn opened<'a>(
    kind: DocumentKind,
    filename: &str,
    text: &str,
    recorder: &'a Recorder,
    saver: &MemoryFileSaver,
) -> RecordedPage<'a> {
    let mut page = page(kind, recorder, saver);
    page.open_file(filename, text).unwrap();
    page
}
