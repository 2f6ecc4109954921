//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `yaml/` - YAML document codec (load, save)
//! - `fs/` - File savers (local directory, in-memory)
//! - `notify/` - Notifier backed by `tracing`
//! - `dialogs/` - Fixed-answer confirmations, no-op navigation

pub mod dialogs;
pub mod fs;
pub mod notify;
pub mod yaml;

// Re-export for convenience
pub use dialogs::{FixedAnswer, NoopNavigator};
pub use fs::{LocalFileSaver, MemoryFileSaver};
pub use notify::TracingNotifier;
pub use yaml::YamlDocumentCodec;
