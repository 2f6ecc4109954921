//! File Saver Implementations
//!
//! Concrete implementations of the FileSaver port.

mod local;
mod memory;

pub use local::{atomic_write, LocalFileSaver};
pub use memory::{MemoryFileSaver, SavedFile};
