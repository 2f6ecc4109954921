//! Local File Saver
//!
//! Implements the FileSaver port for a directory on local disk.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::domain::ports::FileSaver;
use crate::error::{EditorError, EditorResult};

/// Saves into one directory.
///
/// Only the final component of the requested filename is used, so a name
/// taken from an upload can never escape the directory. Writes are atomic.
#[derive(Debug, Clone)]
pub struct LocalFileSaver {
    dir: PathBuf,
}

impl LocalFileSaver {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Where `filename` ends up
    pub fn target(&self, filename: &str) -> EditorResult<PathBuf> {
        let name = Path::new(filename)
            .file_name()
            .ok_or_else(|| EditorError::Save {
                filename: filename.to_string(),
                message: "not a file name".to_string(),
            })?;
        Ok(self.dir.join(name))
    }
}

impl FileSaver for LocalFileSaver {
    fn save_as(&self, filename: &str, bytes: &[u8]) -> EditorResult<()> {
        let path = self.target(filename)?;
        atomic_write(&path, bytes).map_err(|e| EditorError::Save {
            filename: filename.to_string(),
            message: e.to_string(),
        })?;
        info!(path = %path.display(), bytes = bytes.len(), "saved file");
        Ok(())
    }
}

/// Write through a temp file in the same directory, then rename over `path`
pub fn atomic_write(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)?;

    let mut temp = tempfile::NamedTempFile::new_in(parent)?;
    temp.write_all(content)?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
