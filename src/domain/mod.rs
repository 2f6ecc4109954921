//! Domain Layer
//!
//! The editing core - pure logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Document, Record, Selection, DeletedRows
//! - `value_objects/` - Immutable value types (DocumentKind, SchemaVersion, IdentityKey)
//! - `schema/` - Versioned templates and platform tables
//! - `services/` - Row registry, change tracker, health checks
//! - `policies/` - Save validation
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Explicit mutation** - Every document change goes through an operation that reports it
//! 3. **Ports & Adapters** - Notifications, dialogs and file delivery go through trait-defined ports

pub mod entities;
pub mod policies;
pub mod ports;
pub mod schema;
pub mod services;
pub mod value_objects;
