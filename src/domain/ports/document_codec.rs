//! Document Codec Port
//!
//! Text in, [`Document`] out, and back. The YAML implementation lives in
//! the infrastructure layer.

use crate::domain::entities::Document;
use crate::domain::value_objects::DocumentKind;
use crate::error::EditorResult;

pub trait DocumentCodec {
    /// Parse `text`; `expected` rejects files of another kind, `None` accepts any
    fn load(&self, text: &str, expected: Option<DocumentKind>) -> EditorResult<Document>;

    /// Render a save-ready copy of `doc`; the document itself is untouched
    fn save(&self, doc: &Document) -> EditorResult<Vec<u8>>;
}
