//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::AttackDomain;
use crate::error::EditorResult;

use super::loader::{self, ConfigWarning};

/// Editing behaviour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorSection {
    /// Ask before unsaved changes are discarded by opening another file
    #[serde(default = "default_true")]
    pub confirm_discard: bool,

    /// Domain of files created with `new`
    #[serde(default)]
    pub default_domain: AttackDomain,
}

impl Default for EditorSection {
    fn default() -> Self {
        Self {
            confirm_discard: true,
            default_domain: AttackDomain::default(),
        }
    }
}

/// Health check behaviour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthSection {
    /// Notify health issues right after a file is opened
    #[serde(default = "default_true")]
    pub on_load: bool,
}

impl Default for HealthSection {
    fn default() -> Self {
        Self { on_load: true }
    }
}

fn default_true() -> bool {
    true
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct EditorConfig {
    #[serde(default)]
    pub editor: EditorSection,

    #[serde(default)]
    pub health: HealthSection,
}

impl EditorConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> EditorResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> EditorResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Explicit path, then the user config file, then defaults
    pub fn discover(explicit: Option<&Path>) -> EditorResult<(Self, Vec<ConfigWarning>)> {
        loader::discover(explicit)
    }

    /// Apply environment variable overrides (DETTECT_EDITOR_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
