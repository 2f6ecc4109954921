//! Configuration module
//!
//! Lookup order:
//! 1. Explicit `--config` path
//! 2. User config (`<config dir>/dettect-editor/config.toml`)
//! 3. Built-in defaults
//!
//! Environment variables (DETTECT_EDITOR_*) override whichever was loaded.

mod loader;
mod types;

pub use loader::{default_config_path, ConfigWarning, CONFIG_DIR_NAME};
pub use types::{EditorConfig, EditorSection, HealthSection};
