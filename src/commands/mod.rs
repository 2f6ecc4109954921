//! Command implementations for the CLI

pub mod check;
pub mod new;
pub mod normalize;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dettect_editor::domain::ports::{DocumentCodec, FileSaver};
use dettect_editor::infrastructure::{FixedAnswer, NoopNavigator, TracingNotifier};
use dettect_editor::{EditorConfig, PageController, PageOptions, PagePorts, YamlDocumentCodec};

/// Page as the CLI drives it: notifications go to the log, nobody is asked anything
pub type CliPage<S> = PageController<TracingNotifier, FixedAnswer, NoopNavigator, S>;

pub fn cli_ports<S: FileSaver>(saver: S) -> PagePorts<TracingNotifier, FixedAnswer, NoopNavigator, S> {
    PagePorts {
        notifier: TracingNotifier,
        confirm: FixedAnswer::YES,
        navigator: NoopNavigator,
        saver,
    }
}

/// Split `path` into the directory a saver writes to and the file name
pub fn split_path(path: &Path) -> Result<(PathBuf, String)> {
    let name = path
        .file_name()
        .with_context(|| format!("'{}' does not name a file", path.display()))?
        .to_string_lossy()
        .into_owned();
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    Ok((dir, name))
}

/// Read `path` and open it in a page of the matching kind
pub fn open_page<S: FileSaver>(path: &Path, saver: S, config: &EditorConfig) -> Result<(CliPage<S>, String)> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let kind = YamlDocumentCodec
        .load(&text, None)
        .with_context(|| format!("failed to load {}", path.display()))?
        .kind();
    let (_, name) = split_path(path)?;

    let mut page = PageController::new(kind, cli_ports(saver), YamlDocumentCodec)
        .with_options(PageOptions::from_config(config));
    page.open_file(&name, &text)
        .with_context(|| format!("failed to load {}", path.display()))?;
    Ok((page, text))
}
