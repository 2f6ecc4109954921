//! YAML Document Codec
//!
//! Implements the [`DocumentCodec`] port with `serde_yaml_ng`.
//!
//! Loading validates the header (`file_type`, `version`, `domain`) against
//! the schema registry and brings list-valued fields into list shape.
//! Saving works on a deep copy: platform casing is canonicalised and
//! editor-only keys are dropped before rendering.

mod load;
mod save;


pub use save::TRANSIENT_PREFIX;

use crate::domain::entities::Document;
use crate::domain::ports::DocumentCodec;
use crate::domain::value_objects::DocumentKind;
use crate::error::EditorResult;

#[derive(Debug, Clone, Copy, Default)]
pub struct YamlDocumentCodec;

impl YamlDocumentCodec {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentCodec for YamlDocumentCodec {
    fn load(&self, text: &str, expected: Option<DocumentKind>) -> EditorResult<Document> {
        load::load(text, expected)
    }

    fn save(&self, doc: &Document) -> EditorResult<Vec<u8>> {
        save::save(doc)
    }
}
