//! AttackDomain value object - the ATT&CK matrix a file applies to

use serde::{Deserialize, Serialize};

/// ATT&CK domain declared by the `domain` key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AttackDomain {
    #[default]
    #[serde(rename = "enterprise-attack")]
    Enterprise,
    #[serde(rename = "ics-attack")]
    Ics,
    #[serde(rename = "mobile-attack")]
    Mobile,
}

impl AttackDomain {
    pub const ALL: [AttackDomain; 3] = [
        AttackDomain::Enterprise,
        AttackDomain::Ics,
        AttackDomain::Mobile,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AttackDomain::Enterprise => "enterprise-attack",
            AttackDomain::Ics => "ics-attack",
            AttackDomain::Mobile => "mobile-attack",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == s)
    }
}

impl std::fmt::Display for AttackDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
