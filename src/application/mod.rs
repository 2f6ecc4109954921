//! Application Layer
//!
//! Use cases that orchestrate the editing flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `PageController` - One editing page: open, add, select, delete, undo, save

pub mod page;

pub use page::{OpenOutcome, PageController, PageOptions, PagePorts};
