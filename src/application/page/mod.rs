//! Page Use Case
//!
//! The editing page shared by the data source, technique and group editors.

mod controller;
mod options;


pub use controller::{
    OpenOutcome, PageController, HEALTH_TITLE, REMOVAL_TITLE, UNDO_LABEL, UNSAVED_MESSAGE,
    UNSAVED_TITLE,
};
pub use options::{PageOptions, PagePorts};
