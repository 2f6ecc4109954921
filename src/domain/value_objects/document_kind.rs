//! DocumentKind value object - which administration file a page edits

use serde::{Deserialize, Serialize};

/// Kind of DeTT&CT administration file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentKind {
    /// `data-source-administration`
    DataSources,
    /// `technique-administration`
    Techniques,
    /// `group-administration`
    Groups,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 3] = [
        DocumentKind::DataSources,
        DocumentKind::Techniques,
        DocumentKind::Groups,
    ];

    /// Value of the `file_type` key
    pub fn file_type(&self) -> &'static str {
        match self {
            DocumentKind::DataSources => "data-source-administration",
            DocumentKind::Techniques => "technique-administration",
            DocumentKind::Groups => "group-administration",
        }
    }

    /// Parse a `file_type` value (exact match)
    pub fn from_file_type(file_type: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.file_type() == file_type)
    }

    /// Root key holding the editable records
    pub fn collection_key(&self) -> &'static str {
        match self {
            DocumentKind::DataSources => "data_sources",
            DocumentKind::Techniques => "techniques",
            DocumentKind::Groups => "groups",
        }
    }

    /// Field naming a record within the collection
    pub fn identity_field(&self) -> &'static str {
        match self {
            DocumentKind::DataSources => "data_source_name",
            DocumentKind::Techniques => "technique_id",
            DocumentKind::Groups => "group_name",
        }
    }

    /// Singular record noun used in messages ("data source")
    pub fn record_noun(&self) -> &'static str {
        match self {
            DocumentKind::DataSources => "data source",
            DocumentKind::Techniques => "technique",
            DocumentKind::Groups => "group",
        }
    }

    /// Capitalized record noun ("Data source")
    pub fn record_title(&self) -> &'static str {
        match self {
            DocumentKind::DataSources => "Data source",
            DocumentKind::Techniques => "Technique",
            DocumentKind::Groups => "Group",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.file_type())
    }
}
