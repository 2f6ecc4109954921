//! ATT&CK platform enumerations per domain

use crate::domain::value_objects::AttackDomain;

/// Meta platform meaning "every platform of the domain"
pub const PLATFORM_ALL: &str = "all";

const ENTERPRISE: &[&str] = &[
    "Windows",
    "Linux",
    "macOS",
    "AWS",
    "GCP",
    "Azure",
    "Azure AD",
    "Office 365",
    "SaaS",
    "IaaS",
    "Google Workspace",
    "Containers",
    "Network",
    "PRE",
];

const ICS: &[&str] = &[
    "Windows",
    "Control Server",
    "Data Historian",
    "Engineering Workstation",
    "Field Controller/RTU/PLC/IED",
    "Human-Machine Interface",
    "Input/Output Server",
    "Safety Instrumented System/Protection Relay",
];

const MOBILE: &[&str] = &["Android", "iOS"];

/// Canonical platform names of a domain (without `all`)
pub fn platforms(domain: AttackDomain) -> &'static [&'static str] {
    match domain {
        AttackDomain::Enterprise => ENTERPRISE,
        AttackDomain::Ics => ICS,
        AttackDomain::Mobile => MOBILE,
    }
}

/// Canonical casing of a platform name, matched case-insensitively.
///
/// `all` maps to itself; unknown names give `None`.
pub fn canonical_platform(domain: AttackDomain, name: &str) -> Option<&'static str> {
    let lower = name.to_lowercase();
    if lower == PLATFORM_ALL {
        return Some(PLATFORM_ALL);
    }
    platforms(domain)
        .iter()
        .copied()
        .find(|p| p.to_lowercase() == lower)
}

/// The lower-case to canonical conversion table of a domain
pub fn platform_conversion(domain: AttackDomain) -> Vec<(String, &'static str)> {
    platforms(domain)
        .iter()
        .map(|p| (p.to_lowercase(), *p))
        .collect()
}
