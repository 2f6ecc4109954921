//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod attack_domain;
mod document_kind;
mod identity_key;
mod schema_version;

pub use attack_domain::AttackDomain;
pub use document_kind::DocumentKind;
pub use identity_key::{key_fragment, IdentityKey, KeyFields, KEY_SEPARATOR};
pub use schema_version::SchemaVersion;
