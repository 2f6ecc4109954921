//! Domain Entities
//!
//! Core domain entities that have identity and lifecycle.
//! - `Document` - One loaded administration file
//! - `Record` - A row of a collection (or a nested detail row)
//! - `Selection` - The record shown in the detail view
//! - `DeletedRows` - Undo log of removed records

mod deleted_rows;
mod document;
mod record;
mod selection;

pub use deleted_rows::{DeletedRow, DeletedRows};
pub(crate) use document::string_list;
pub use document::Document;
pub use record::Record;
pub use selection::Selection;
