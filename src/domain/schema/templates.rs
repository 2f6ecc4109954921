//! Default objects written for new files, records and nested rows

use serde_yaml_ng::{Mapping, Value};

use super::platforms::PLATFORM_ALL;
use crate::domain::entities::Record;

/// Data quality dimensions of a data source, each scored 0..=5
pub const DATA_QUALITY_DIMENSIONS: [&str; 5] = [
    "device_completeness",
    "data_field_completeness",
    "timeliness",
    "consistency",
    "retention",
];

/// Ordered mapping from literal pairs
pub(crate) fn mapping<const N: usize>(pairs: [(&str, Value); N]) -> Mapping {
    let mut m = Mapping::new();
    for (k, v) in pairs {
        m.insert(Value::from(k), v);
    }
    m
}

fn empty_list() -> Value {
    Value::Sequence(Vec::new())
}

fn all_list() -> Value {
    Value::Sequence(vec![Value::from(PLATFORM_ALL)])
}

fn empty_str() -> Value {
    Value::from("")
}

pub fn data_quality() -> Value {
    let mut m = Mapping::new();
    for dim in DATA_QUALITY_DIMENSIONS {
        m.insert(Value::from(dim), Value::from(0));
    }
    Value::Mapping(m)
}

/// Detail fields shared by the flat 1.0 data source and the 1.1 `data_source[]` row
fn data_source_details() -> [(&'static str, Value); 6] {
    [
        ("date_registered", Value::Null),
        ("date_connected", Value::Null),
        ("products", empty_list()),
        ("available_for_data_analytics", Value::from(false)),
        ("comment", empty_str()),
        ("data_quality", data_quality()),
    ]
}

/// Data source record of a 1.0 file
pub fn data_source_v10() -> Record {
    let mut m = mapping([("data_source_name", empty_str())]);
    for (k, v) in data_source_details() {
        m.insert(Value::from(k), v);
    }
    Record::from_mapping(m)
}

/// One `data_source[]` row of a 1.1 data source
pub fn data_source_detail_v11() -> Record {
    let mut m = mapping([("applicable_to", all_list())]);
    for (k, v) in data_source_details() {
        m.insert(Value::from(k), v);
    }
    Record::from_mapping(m)
}

/// Data source record of a 1.1 file
pub fn data_source_v11() -> Record {
    Record::from_mapping(mapping([
        ("data_source_name", empty_str()),
        (
            "data_source",
            Value::Sequence(vec![data_source_detail_v11().into_value()]),
        ),
    ]))
}

pub fn detection_score() -> Record {
    Record::from_mapping(mapping([
        ("date", Value::Null),
        ("score", Value::from(-1)),
        ("comment", empty_str()),
    ]))
}

pub fn visibility_score() -> Record {
    Record::from_mapping(mapping([
        ("date", Value::Null),
        ("score", Value::from(0)),
        ("comment", empty_str()),
        ("auto_generated", Value::from(false)),
    ]))
}

pub fn detection() -> Record {
    Record::from_mapping(mapping([
        ("applicable_to", all_list()),
        ("location", empty_list()),
        ("comment", empty_str()),
        (
            "score_logbook",
            Value::Sequence(vec![detection_score().into_value()]),
        ),
    ]))
}

pub fn visibility() -> Record {
    Record::from_mapping(mapping([
        ("applicable_to", all_list()),
        ("comment", empty_str()),
        (
            "score_logbook",
            Value::Sequence(vec![visibility_score().into_value()]),
        ),
    ]))
}

pub fn technique() -> Record {
    Record::from_mapping(mapping([
        ("technique_id", empty_str()),
        ("technique_name", empty_str()),
        ("detection", Value::Sequence(vec![detection().into_value()])),
        ("visibility", Value::Sequence(vec![visibility().into_value()])),
    ]))
}

pub fn group() -> Record {
    Record::from_mapping(mapping([
        ("group_name", empty_str()),
        ("campaign", empty_str()),
        ("technique_id", empty_list()),
        ("software_id", empty_list()),
        ("enabled", Value::from(true)),
    ]))
}

/// Default `systems` entry of a new 1.1 data source file
pub fn system() -> Value {
    Value::Mapping(mapping([
        ("applicable_to", Value::from("default")),
        ("platform", all_list()),
    ]))
}

pub fn platform_all() -> Value {
    all_list()
}
