//! `normalize` command: round-trip a file through the editor

use std::path::Path;

use anyhow::{Context, Result};
use dettect_editor::infrastructure::{LocalFileSaver, MemoryFileSaver};
use dettect_editor::EditorConfig;
use similar::TextDiff;

use super::{open_page, split_path};

pub fn cmd_normalize(
    file: &Path,
    output: Option<&Path>,
    diff: bool,
    config: &EditorConfig,
    json: bool,
) -> Result<()> {
    if diff {
        let saver = MemoryFileSaver::new();
        let (mut page, original) = open_page(file, saver.clone(), config)?;
        page.save().context("failed to render file")?;
        let rendered = saver.last().map(|s| s.text()).unwrap_or_default();

        let name = file.display().to_string();
        let text_diff = TextDiff::from_lines(&original, &rendered);
        let unified = text_diff
            .unified_diff()
            .header(&name, &format!("{} (normalized)", name))
            .to_string();
        if json {
            let output = serde_json::json!({
                "event": "normalize",
                "file": name,
                "changed": !unified.is_empty(),
                "diff": unified,
            });
            println!("{}", serde_json::to_string(&output)?);
        } else {
            print!("{}", unified);
        }
        return Ok(());
    }

    let target = output.unwrap_or(file);
    let (dir, name) = split_path(target)?;
    let (mut page, _) = open_page(file, LocalFileSaver::new(&dir), config)?;
    page.save_as(&name)
        .with_context(|| format!("failed to write {}", target.display()))?;

    if json {
        let output = serde_json::json!({
            "event": "normalize",
            "file": target.display().to_string(),
            "records": page.records().len(),
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("Wrote {}", target.display());
    }
    Ok(())
}
