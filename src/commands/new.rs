//! `new` command: write a fresh administration file

use std::path::Path;

use anyhow::{Context, Result};
use dettect_editor::infrastructure::LocalFileSaver;
use dettect_editor::{AttackDomain, DocumentKind, EditorConfig, PageController, PageOptions, YamlDocumentCodec};

use super::{cli_ports, split_path};

pub fn cmd_new(
    kind: DocumentKind,
    domain: Option<AttackDomain>,
    output: Option<&Path>,
    config: &EditorConfig,
    json: bool,
) -> Result<()> {
    let options = PageOptions::from_config(config);
    let domain = domain.unwrap_or(options.default_domain);

    let (dir, name) = match output {
        Some(path) => {
            let (dir, name) = split_path(path)?;
            (dir, Some(name))
        }
        None => (std::env::current_dir()?, None),
    };

    let saver = LocalFileSaver::new(&dir);
    let mut page = PageController::new(kind, cli_ports(saver), YamlDocumentCodec).with_options(options);
    page.new_file(domain);
    let saved = match &name {
        Some(name) => page.save_as(name),
        None => page.save(),
    };
    saved.context("failed to write new file")?;

    let filename = page.filename().unwrap_or_default();
    let path = dir.join(filename);
    let version = page
        .document()
        .map(|d| d.version().to_string())
        .unwrap_or_default();

    if json {
        let output = serde_json::json!({
            "event": "new",
            "file": path.display().to_string(),
            "file_type": kind.file_type(),
            "version": version,
            "domain": domain.as_str(),
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("Created {} ({} {}, {})", path.display(), kind, version, domain);
    }
    Ok(())
}
