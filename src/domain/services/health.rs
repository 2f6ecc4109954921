//! Health checks for administration files
//!
//! Advisory diagnostics: a report never blocks a save. Errors mark values
//! the DeTT&CT tooling will reject; warnings mark values that are probably
//! typos.

use chrono::NaiveDate;
use serde::Serialize;
use serde_yaml_ng::Value;

use crate::domain::entities::{string_list, Document, Record};
use crate::domain::schema::{
    canonical_platform, platforms, templates::DATA_QUALITY_DIMENSIONS, SchemaRegistry,
};
use crate::domain::value_objects::{AttackDomain, DocumentKind};

/// Similarity above which two `applicable_to` values are reported as near-duplicates
const SIMILARITY_THRESHOLD: f32 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthIssue {
    pub severity: Severity,
    /// What the issue is about, e.g. `technique 'T1059'` or `file`
    pub subject: String,
    pub message: String,
}

impl std::fmt::Display for HealthIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.subject, self.message)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HealthReport {
    issues: Vec<HealthIssue>,
}

impl HealthReport {
    pub fn issues(&self) -> &[HealthIssue] {
        &self.issues
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    fn count(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }

    fn error(&mut self, subject: impl Into<String>, message: impl Into<String>) {
        self.issues.push(HealthIssue {
            severity: Severity::Error,
            subject: subject.into(),
            message: message.into(),
        });
    }

    fn warning(&mut self, subject: impl Into<String>, message: impl Into<String>) {
        self.issues.push(HealthIssue {
            severity: Severity::Warning,
            subject: subject.into(),
            message: message.into(),
        });
    }
}

/// Run every check that applies to the document's kind
pub fn check_health(doc: &Document) -> HealthReport {
    let mut report = HealthReport::default();
    let domain = doc.effective_domain();

    match doc.kind() {
        DocumentKind::Techniques => {
            check_platform_field(&mut report, "file", doc.field("platform"), domain);
            check_techniques(&mut report, doc.records());
        }
        DocumentKind::DataSources => check_data_sources(&mut report, doc, domain),
        DocumentKind::Groups => {
            check_platform_field(&mut report, "file", doc.field("platform"), domain);
            check_groups(&mut report, doc.records());
        }
    }
    report
}

/// `T` followed by four digits, optionally `.` and three more
pub fn is_valid_technique_id(id: &str) -> bool {
    let Some(rest) = id.strip_prefix('T') else {
        return false;
    };
    let (main, sub) = match rest.split_once('.') {
        Some((main, sub)) => (main, Some(sub)),
        None => (rest, None),
    };
    let digits = |s: &str, n: usize| s.len() == n && s.bytes().all(|b| b.is_ascii_digit());
    digits(main, 4) && sub.map_or(true, |s| digits(s, 3))
}

/// Dates are plain `YYYY-MM-DD` without a time part
pub fn is_valid_date(value: &Value) -> bool {
    match value {
        Value::String(s) => s.len() == 10 && NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok(),
        Value::Tagged(tagged) => is_valid_date(&tagged.value),
        _ => false,
    }
}

fn check_platform_field(
    report: &mut HealthReport,
    subject: &str,
    value: Option<&Value>,
    domain: AttackDomain,
) {
    let values = string_list(value);
    if values.is_empty() {
        report.error(subject, "EMPTY value for 'platform'");
        return;
    }
    for p in values {
        if canonical_platform(domain, &p).is_none() {
            report.error(
                subject,
                format!(
                    "INVALID value for 'platform': {} (should be value(s) of: [{}] or all)",
                    p,
                    platforms(domain).join(", ")
                ),
            );
        }
    }
}

fn check_techniques(report: &mut HealthReport, techniques: &[Record]) {
    let mut seen: Vec<&str> = Vec::new();
    let mut all_applicable_to: Vec<String> = Vec::new();

    for technique in techniques {
        let id = technique.get_str("technique_id").unwrap_or("");
        let subject = format!("technique '{}'", id);

        if seen.contains(&id) {
            report.error(&subject, "duplicate technique ID");
        } else {
            seen.push(id);
        }
        if !is_valid_technique_id(id) {
            report.error(&subject, "invalid technique ID format");
        }

        for object_type in ["detection", "visibility"] {
            if !technique.contains(object_type) {
                report.error(&subject, format!("MISSING key-value pair: {}", object_type));
                continue;
            }
            let mut systems: Vec<String> = Vec::new();
            for object in technique.details(object_type) {
                check_score_object(report, &subject, object_type, &object);
                let list_keys: &[&str] = if object_type == "detection" {
                    &["applicable_to", "location"]
                } else {
                    &["applicable_to"]
                };
                for key in ["applicable_to", "comment", "score_logbook"]
                    .iter()
                    .chain(list_keys.iter().skip(1))
                {
                    if !object.contains(key) {
                        report.error(
                            &subject,
                            format!("MISSING key-value pair in '{}': {}", object_type, key),
                        );
                    }
                }
                for key in list_keys {
                    check_list_field(report, &subject, object_type, &object, key);
                }
                let applicable_to = string_list(object.get("applicable_to"));
                systems.extend(applicable_to.iter().cloned());
                all_applicable_to.extend(applicable_to);
            }
            if has_duplicates(&systems) {
                report.error(
                    &subject,
                    format!(
                        "'applicable_to' in '{}' has DUPLICATE system values (a system can only be part of one applicable_to key-value pair within the same technique)",
                        object_type
                    ),
                );
            }
        }
    }

    check_similar_values(report, &all_applicable_to);
}

fn check_score_object(report: &mut HealthReport, subject: &str, object_type: &str, object: &Record) {
    let (min, max) = if object_type == "detection" { (-1, 5) } else { (0, 4) };

    for entry in object.details("score_logbook") {
        for key in ["date", "score", "comment"] {
            if !entry.contains(key) {
                report.error(
                    subject,
                    format!(
                        "MISSING key-value pair in a {} score object: {}",
                        object_type, key
                    ),
                );
            }
        }

        let score = match entry.get("score") {
            Some(Value::Null) | None => {
                report.error(
                    subject,
                    format!("EMPTY score in a {} score object", object_type),
                );
                None
            }
            Some(Value::Number(n)) if n.is_i64() => n.as_i64(),
            Some(other) => {
                report.error(
                    subject,
                    format!(
                        "INVALID score format in a {} score object: {} (should be an integer)",
                        object_type,
                        render(other)
                    ),
                );
                None
            }
        };

        if let Some(auto) = entry.get("auto_generated") {
            if !auto.is_bool() {
                report.error(
                    subject,
                    format!(
                        "INVALID 'auto_generated' value in a {} score object: should be set to 'true' or 'false'",
                        object_type
                    ),
                );
            }
        }

        let Some(score) = score else { continue };
        let date = entry.get("date").unwrap_or(&Value::Null);
        if date.is_null() && score > min {
            report.error(
                subject,
                format!("EMPTY date in a {} score object", object_type),
            );
        }
        if !(min..=max).contains(&score) {
            report.error(
                subject,
                format!(
                    "INVALID {} score: {} (should be between {} and {})",
                    object_type, score, min, max
                ),
            );
        }
        if !date.is_null() && !is_valid_date(date) {
            report.error(
                subject,
                format!(
                    "INVALID date format in a {} score object: {} (should be YYYY-MM-DD)",
                    object_type,
                    render(date)
                ),
            );
        }
    }
}

fn check_list_field(report: &mut HealthReport, subject: &str, object_type: &str, object: &Record, key: &str) {
    match object.get(key) {
        Some(Value::Sequence(items)) => {
            let nulls = items.iter().filter(|v| v.is_null()).count();
            if nulls > 0 {
                report.error(
                    subject,
                    format!(
                        "'{}' in '{}' has an EMPTY value (an empty string is allowed: '')",
                        key, object_type
                    ),
                );
            }
        }
        Some(_) => report.error(
            subject,
            format!("'{}' in '{}' is NOT a list", key, object_type),
        ),
        None => {}
    }
}

fn check_data_sources(report: &mut HealthReport, doc: &Document, domain: AttackDomain) {
    let uses_systems = SchemaRegistry::lookup(doc.kind(), doc.version())
        .map_or(doc.field("systems").is_some(), |e| e.uses_systems);
    let mut system_names: Vec<String> = Vec::new();

    if uses_systems {
        if doc.field("systems").is_none() {
            report.error("file", "MISSING key-value pair 'systems'");
        }
        for system in doc.systems() {
            let name = system.get_str("applicable_to").unwrap_or("");
            let subject = format!("system '{}'", name);
            check_platform_field(report, &subject, system.get("platform"), domain);

            let lower = name.to_lowercase();
            if lower.is_empty() || lower == "all" {
                report.error(
                    &subject,
                    "EMPTY or INVALID 'applicable_to' (any value except an empty string and 'all')",
                );
            } else if system_names.contains(&lower) {
                report.error(&subject, "DUPLICATE 'applicable_to' value within 'systems'");
            } else {
                system_names.push(lower);
            }
        }
    } else {
        check_platform_field(report, "file", doc.field("platform"), domain);
    }

    let mut used_systems: Vec<String> = Vec::new();
    for data_source in doc.records() {
        let name = data_source.get_str("data_source_name").unwrap_or("");
        let subject = format!("data source '{}'", name);

        if !uses_systems {
            check_data_source_details(report, &subject, data_source, &[]);
            continue;
        }

        if !data_source.contains("data_source") {
            report.error(&subject, "MISSING key-value pair: data_source");
            continue;
        }
        let mut systems: Vec<String> = Vec::new();
        for details in data_source.details("data_source") {
            check_data_source_details(report, &subject, &details, &["applicable_to"]);
            let applicable_to = string_list(details.get("applicable_to"));
            if applicable_to.len() > 1 && applicable_to.iter().any(|a| a.eq_ignore_ascii_case("all")) {
                report.error(
                    &subject,
                    "'all' is combined with other systems in 'applicable_to'",
                );
            }
            systems.extend(applicable_to.iter().cloned());
            used_systems.extend(applicable_to);
        }
        if has_duplicates(&systems) {
            report.error(
                &subject,
                "DUPLICATE system values within 'applicable_to' (a system can only be part of one applicable_to key-value pair within the same data source)",
            );
        }
    }

    if uses_systems {
        let mut reported: Vec<String> = Vec::new();
        for system in used_systems {
            let lower = system.to_lowercase();
            if lower != "all" && !system_names.contains(&lower) && !reported.contains(&lower) {
                report.error(
                    "file",
                    format!(
                        "'applicable_to' value '{}' is used by a data source without being listed in 'systems'",
                        system
                    ),
                );
                reported.push(lower);
            }
        }
    }
}

fn check_data_source_details(
    report: &mut HealthReport,
    subject: &str,
    details: &Record,
    extra_keys: &[&str],
) {
    const KEYS: [&str; 6] = [
        "date_registered",
        "date_connected",
        "products",
        "available_for_data_analytics",
        "comment",
        "data_quality",
    ];
    for key in extra_keys.iter().chain(KEYS.iter()) {
        if !details.contains(key) {
            report.error(subject, format!("MISSING key-value pair: {}", key));
        }
    }
    for key in extra_keys.iter().chain(["products"].iter()) {
        check_list_field(report, subject, "data_source", details, key);
    }

    for key in ["date_registered", "date_connected"] {
        if let Some(date) = details.get(key) {
            if !date.is_null() && !is_valid_date(date) {
                report.error(
                    subject,
                    format!(
                        "INVALID date format for '{}': {} (should be YYYY-MM-DD)",
                        key,
                        render(date)
                    ),
                );
            }
        }
    }

    if let Some(v) = details.get("available_for_data_analytics") {
        if !v.is_bool() {
            report.error(
                subject,
                "INVALID 'available_for_data_analytics' value: should be set to 'true' or 'false'",
            );
        }
    }

    match details.get("data_quality") {
        Some(Value::Mapping(quality)) => {
            for dimension in DATA_QUALITY_DIMENSIONS {
                match quality.get(dimension) {
                    None => report.error(
                        subject,
                        format!("MISSING key-value pair in 'data_quality': {}", dimension),
                    ),
                    Some(Value::Number(n)) if n.is_i64() => {
                        let score = n.as_i64().unwrap_or(-1);
                        if !(0..=5).contains(&score) {
                            report.error(
                                subject,
                                format!(
                                    "INVALID data quality score for '{}': {} (should be between 0 and 5)",
                                    dimension, score
                                ),
                            );
                        }
                    }
                    Some(other) => report.error(
                        subject,
                        format!(
                            "INVALID data quality score for '{}': {} (should be an integer)",
                            dimension,
                            render(other)
                        ),
                    ),
                }
            }
        }
        Some(_) => report.error(subject, "'data_quality' is NOT a mapping of dimension scores"),
        None => {}
    }
}

fn check_groups(report: &mut HealthReport, groups: &[Record]) {
    for (index, group) in groups.iter().enumerate() {
        let name = group.get_str("group_name").unwrap_or("");
        let subject = if name.is_empty() {
            format!("group #{}", index + 1)
        } else {
            format!("group '{}'", name)
        };
        if name.is_empty() && group.as_mapping().len() > 1 {
            report.error(&subject, "EMPTY 'group_name'");
        }
        if let Some(v) = group.get("technique_id") {
            if !v.is_sequence() {
                report.error(&subject, "'technique_id' is NOT a list");
            } else {
                for id in string_list(Some(v)) {
                    if !is_valid_technique_id(&id) {
                        report.warning(&subject, format!("invalid technique ID: {}", id));
                    }
                }
            }
        }
    }
}

fn check_similar_values(report: &mut HealthReport, values: &[String]) {
    let mut unique: Vec<&str> = values.iter().map(String::as_str).collect();
    unique.sort_unstable();
    unique.dedup();

    let mut similar: Vec<&str> = Vec::new();
    for (i, a) in unique.iter().enumerate() {
        for b in &unique[i + 1..] {
            let ratio = similar::TextDiff::from_chars(*a, *b).ratio();
            if ratio > SIMILARITY_THRESHOLD {
                for v in [*a, *b] {
                    if !similar.contains(&v) {
                        similar.push(v);
                    }
                }
            }
        }
    }

    if !similar.is_empty() {
        report.warning(
            "file",
            format!(
                "values for 'applicable_to' are very similar, correct where necessary: {}",
                similar.join(", ")
            ),
        );
    }
}

fn has_duplicates(values: &[String]) -> bool {
    values
        .iter()
        .enumerate()
        .any(|(i, v)| values[..i].contains(v))
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => serde_yaml_ng::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}
