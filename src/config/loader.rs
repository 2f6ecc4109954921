//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::AttackDomain;
use crate::error::{EditorError, EditorResult};

use super::types::EditorConfig;

/// Directory (under the platform config dir) holding `config.toml`
pub const CONFIG_DIR_NAME: &str = "dettect-editor";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> EditorResult<(EditorConfig, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: EditorConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| EditorError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// `<config dir>/dettect-editor/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(CONFIG_DIR_NAME).join("config.toml"))
}

/// Explicit path (must exist), then the user config file, then defaults.
///
/// Environment overrides are applied on top in every case.
pub fn discover(explicit: Option<&Path>) -> EditorResult<(EditorConfig, Vec<ConfigWarning>)> {
    let (config, warnings) = match explicit {
        Some(path) => load_with_warnings(path)?,
        None => match default_config_path() {
            Some(path) if path.exists() => load_with_warnings(&path)?,
            _ => (EditorConfig::default(), Vec::new()),
        },
    };
    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (DETTECT_EDITOR_* prefix)
pub fn with_env_overrides(mut config: EditorConfig) -> EditorConfig {
    // DETTECT_EDITOR_DOMAIN
    if let Ok(domain) = std::env::var("DETTECT_EDITOR_DOMAIN") {
        if let Some(domain) = AttackDomain::parse(domain.trim()) {
            config.editor.default_domain = domain;
        }
    }

    // DETTECT_EDITOR_CONFIRM_DISCARD
    if let Ok(val) = std::env::var("DETTECT_EDITOR_CONFIRM_DISCARD") {
        config.editor.confirm_discard = val.to_lowercase() != "false" && val != "0";
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

/// Closest known key within an edit distance of 2
fn suggest_key(unknown: &str) -> Option<String> {
    const KNOWN_KEYS: &[&str] = &[
        "editor",
        "confirm_discard",
        "default_domain",
        "health",
        "on_load",
    ];

    KNOWN_KEYS
        .iter()
        .map(|key| (*key, levenshtein(unknown, key)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(key, _)| key.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
