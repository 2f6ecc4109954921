//! Domain Policies
//!
//! Business rules that decide whether an operation may proceed.

mod save_validation;

pub use save_validation::{validate_for_save, ValidationIssue};
