//! Common test utilities for integration, scenario and property tests.
//!
//! This module provides:
//! - `TestEnv`: isolated temp directory plus helpers to run the CLI
//! - `Recorder`: port implementation that remembers what the page did
//! - Fixtures: administration files of every supported generation

#![allow(dead_code)]

pub mod env;
pub mod fixtures;
pub mod ports;

pub use env::*;
pub use fixtures::*;
pub use ports::*;
