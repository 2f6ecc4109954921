//! In-memory File Saver
//!
//! Keeps every save in a list; used by the CLI's dry runs and by tests.

use std::sync::{Arc, Mutex};

use crate::domain::ports::FileSaver;
use crate::error::{EditorError, EditorResult};

/// One call to [`FileSaver::save_as`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl SavedFile {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }
}

/// Cloning shares the underlying list
#[derive(Debug, Clone, Default)]
pub struct MemoryFileSaver {
    saved: Arc<Mutex<Vec<SavedFile>>>,
}

impl MemoryFileSaver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn saved(&self) -> Vec<SavedFile> {
        self.saved.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn last(&self) -> Option<SavedFile> {
        self.saved.lock().ok().and_then(|s| s.last().cloned())
    }
}

impl FileSaver for MemoryFileSaver {
    fn save_as(&self, filename: &str, bytes: &[u8]) -> EditorResult<()> {
        let mut saved = self.saved.lock().map_err(|e| EditorError::Save {
            filename: filename.to_string(),
            message: e.to_string(),
        })?;
        saved.push(SavedFile {
            filename: filename.to_string(),
            bytes: bytes.to_vec(),
        });
        Ok(())
    }
}
