//! Page Options
//!
//! Behaviour switches and port bundle for a page controller.

use crate::config::EditorConfig;
use crate::domain::value_objects::AttackDomain;

/// Options for the page controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOptions {
    /// Ask the confirm dialog before unsaved changes are discarded
    pub confirm_discard: bool,
    /// Run health checks after a file is opened and notify the findings;
    /// when off, nothing is checked until `run_health`
    pub health_on_load: bool,
    /// Domain used by `new_file` when the caller does not pick one
    pub default_domain: AttackDomain,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            confirm_discard: true,
            health_on_load: true,
            default_domain: AttackDomain::default(),
        }
    }
}

impl PageOptions {
    pub fn from_config(config: &EditorConfig) -> Self {
        Self {
            confirm_discard: config.editor.confirm_discard,
            health_on_load: config.health.on_load,
            default_domain: config.editor.default_domain,
        }
    }
}

/// The ports a page talks to
#[derive(Debug, Clone)]
pub struct PagePorts<N, C, D, S> {
    pub notifier: N,
    pub confirm: C,
    pub navigator: D,
    pub saver: S,
}
