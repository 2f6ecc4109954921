//! DeTT&CT Editor - editing core for DeTT&CT administration files
//!
//! Loads data source, technique and group administration YAML files,
//! edits their records through a page controller with undoable deletes and
//! dirty tracking, checks file health, and writes the files back.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

// Re-exports for convenience
pub use application::{OpenOutcome, PageController, PageOptions, PagePorts};
pub use config::EditorConfig;
pub use domain::entities::{Document, Record};
pub use domain::services::{check_health, HealthReport};
pub use domain::value_objects::{AttackDomain, DocumentKind, IdentityKey, SchemaVersion};
pub use error::{EditorError, EditorResult};
pub use infrastructure::YamlDocumentCodec;
