//! Save validation policy
//!
//! The minimum a document must satisfy before it is written out. Everything
//! else is reported by the health checks and never blocks a save.

use crate::domain::entities::{string_list, Document};
use crate::domain::schema::SchemaRegistry;

/// Reason a save is refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// The root `platform` selection is empty
    EmptyPlatform,
    /// A `systems` entry has no platform selected
    SystemWithoutPlatform { applicable_to: String },
    /// A `systems` entry has an empty `applicable_to`
    SystemWithoutName { index: usize },
    /// A 1.1 data source file without any `systems` entry
    NoSystems,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationIssue::EmptyPlatform => write!(f, "select at least one platform"),
            ValidationIssue::SystemWithoutPlatform { applicable_to } => write!(
                f,
                "select at least one platform for system '{}'",
                applicable_to
            ),
            ValidationIssue::SystemWithoutName { index } => {
                write!(f, "system #{} needs an 'applicable_to' value", index + 1)
            }
            ValidationIssue::NoSystems => write!(f, "add at least one system"),
        }
    }
}

/// Check `doc` against the save rules of its schema generation
pub fn validate_for_save(doc: &Document) -> Result<(), Vec<ValidationIssue>> {
    let uses_systems = SchemaRegistry::lookup(doc.kind(), doc.version())
        .map(|e| e.uses_systems)
        .unwrap_or(false);

    let mut issues = Vec::new();
    if uses_systems {
        let systems = doc.systems();
        if systems.is_empty() {
            issues.push(ValidationIssue::NoSystems);
        }
        for (index, system) in systems.iter().enumerate() {
            let applicable_to = system.get_str("applicable_to").unwrap_or("").to_string();
            if applicable_to.is_empty() {
                issues.push(ValidationIssue::SystemWithoutName { index });
            }
            if string_list(system.get("platform")).is_empty() {
                issues.push(ValidationIssue::SystemWithoutPlatform { applicable_to });
            }
        }
    } else if doc.platforms().is_empty() {
        issues.push(ValidationIssue::EmptyPlatform);
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}
