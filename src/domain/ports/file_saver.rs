//! File Saver Port
//!
//! Delivers the serialized document. A browser front end offers a download,
//! the CLI writes to disk.

use crate::error::EditorResult;

pub trait FileSaver {
    /// Store `bytes` under `filename`
    fn save_as(&self, filename: &str, bytes: &[u8]) -> EditorResult<()>;
}

impl<F: FileSaver + ?Sized> FileSaver for &F {
    fn save_as(&self, filename: &str, bytes: &[u8]) -> EditorResult<()> {
        (**self).save_as(filename, bytes)
    }
}
