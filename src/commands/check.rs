//! `check` command: health checks plus save validation

use std::path::Path;

use anyhow::{Context, Result};
use dettect_editor::domain::policies::validate_for_save;
use dettect_editor::domain::ports::DocumentCodec;
use dettect_editor::domain::services::Severity;
use dettect_editor::{check_health, YamlDocumentCodec};

pub fn cmd_check(file: &Path, json: bool) -> Result<()> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let doc = YamlDocumentCodec
        .load(&text, None)
        .with_context(|| format!("failed to load {}", file.display()))?;

    let report = check_health(&doc);
    let blocking: Vec<String> = match validate_for_save(&doc) {
        Ok(()) => Vec::new(),
        Err(issues) => issues.iter().map(ToString::to_string).collect(),
    };
    let failed = report.has_errors() || !blocking.is_empty();

    if json {
        let output = serde_json::json!({
            "event": "check",
            "file": file.display().to_string(),
            "file_type": doc.kind().file_type(),
            "version": doc.version().to_string(),
            "errors": report.error_count(),
            "warnings": report.warning_count(),
            "issues": report.issues(),
            "save_blockers": blocking,
            "ok": !failed,
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{} ({} {})", file.display(), doc.kind(), doc.version());
        for issue in report.issues() {
            let mark = match issue.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
            };
            println!("  {}: {}", mark, issue);
        }
        for reason in &blocking {
            println!("  cannot save: {}", reason);
        }
        println!(
            "{} error(s), {} warning(s), {} save blocker(s)",
            report.error_count(),
            report.warning_count(),
            blocking.len()
        );
    }

    if failed {
        std::process::exit(1);
    }
    Ok(())
}
