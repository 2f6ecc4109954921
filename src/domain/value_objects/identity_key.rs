//! Identity keys - how records are named inside a collection
//!
//! A key is the string form of one field, or of an ordered tuple of fields
//! joined with [`KEY_SEPARATOR`]. Comparison is a literal string comparison:
//! no trimming, no case folding. A field value containing the separator can
//! make two different tuples produce the same key; that ambiguity is kept.

use serde_yaml_ng::Value;

/// Separator between the parts of a composite key
pub const KEY_SEPARATOR: &str = "-";

/// Ordered field names forming a record's identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyFields(Vec<String>);

impl KeyFields {
    /// Single-field identity
    pub fn single(field: impl Into<String>) -> Self {
        Self(vec![field.into()])
    }

    /// Composite identity; at least one field is required
    pub fn composite<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        assert!(!fields.is_empty(), "identity needs at least one field");
        Self(fields)
    }

    pub fn fields(&self) -> &[String] {
        &self.0
    }

    pub fn is_composite(&self) -> bool {
        self.0.len() > 1
    }

    /// Build a key from already stringified parts, in field order
    pub fn join<S: AsRef<str>>(parts: &[S]) -> IdentityKey {
        IdentityKey(
            parts
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<_>>()
                .join(KEY_SEPARATOR),
        )
    }
}

/// String identity of a record
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct IdentityKey(String);

impl IdentityKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Empty-record marker
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for IdentityKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for IdentityKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for IdentityKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// String form of a field value as it takes part in a key.
///
/// Sequences join their elements with `,` (null elements render empty),
/// null renders as `null`, a missing field as the empty string.
pub fn key_fragment(value: Option<&Value>) -> String {
    match value {
        None => String::new(),
        Some(v) => scalar_fragment(v, false),
    }
}

fn scalar_fragment(value: &Value, nested: bool) -> String {
    match value {
        Value::Null if nested => String::new(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Sequence(items) => items
            .iter()
            .map(|v| scalar_fragment(v, true))
            .collect::<Vec<_>>()
            .join(","),
        Value::Mapping(_) => serde_yaml_ng::to_string(value)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
        Value::Tagged(tagged) => scalar_fragment(&tagged.value, nested),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_of_strings_is_verbatim() {
        let v = Value::from(" T1059 ");
        assert_eq!(key_fragment(Some(&v)), " T1059 ");
    }

    #[test]
    fn fragment_of_sequences_joins_with_comma() {
        let v: Value = serde_yaml_ng::from_str("[servers, workstations]").unwrap();
        assert_eq!(key_fragment(Some(&v)), "servers,workstations");

        let with_null: Value = serde_yaml_ng::from_str("[a, null, b]").unwrap();
        assert_eq!(key_fragment(Some(&with_null)), "a,,b");
    }

    #[test]
    fn fragment_of_missing_null_and_numbers() {
        assert_eq!(key_fragment(None), "");
        assert_eq!(key_fragment(Some(&Value::Null)), "null");
        assert_eq!(key_fragment(Some(&Value::from(5))), "5");
        assert_eq!(key_fragment(Some(&Value::from(true))), "true");
    }

    #[test]
    fn join_uses_separator() {
        assert_eq!(KeyFields::join(&["T1059", "all"]).as_str(), "T1059-all");
        assert_eq!(KeyFields::join(&["only"]).as_str(), "only");
    }

    #[test]
    fn separator_collisions_are_not_disambiguated() {
        let a = KeyFields::join(&["a-b", "c"]);
        let b = KeyFields::join(&["a", "b-c"]);
        assert_eq!(a, b);
    }

    #[test]
    fn empty_key_marks_empty_record() {
        assert!(IdentityKey::new("").is_empty());
        assert!(!IdentityKey::new(" ").is_empty());
    }
}
