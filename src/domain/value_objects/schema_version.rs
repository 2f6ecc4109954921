//! SchemaVersion value object - the decimal `version` of an administration file

use serde_yaml_ng::Value;

/// `major.minor` file format version (files use a single decimal, e.g. `1.2`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SchemaVersion {
    major: u8,
    minor: u8,
}

impl SchemaVersion {
    pub const fn new(major: u8, minor: u8) -> Self {
        Self { major, minor }
    }

    pub fn major(&self) -> u8 {
        self.major
    }

    pub fn minor(&self) -> u8 {
        self.minor
    }

    /// Read a version from a YAML scalar (`1.1` or `"1.1"`)
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_f64().and_then(Self::from_f64),
            Value::String(s) => s.trim().parse::<f64>().ok().and_then(Self::from_f64),
            _ => None,
        }
    }

    fn from_f64(v: f64) -> Option<Self> {
        if !v.is_finite() || v < 0.0 || v >= 256.0 {
            return None;
        }
        let major = v.trunc();
        let minor = ((v - major) * 10.0).round();
        // Only one decimal digit is meaningful; 1.25 is not a version.
        if ((v - major) * 10.0 - minor).abs() > 1e-6 || minor >= 10.0 {
            return None;
        }
        Some(Self::new(major as u8, minor as u8))
    }

    /// YAML scalar written for this version
    pub fn to_value(&self) -> Value {
        Value::from(self.major as f64 + self.minor as f64 / 10.0)
    }
}

impl std::fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}
