//! Common test utilities for deployinfo CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated execution root, output tree and config home
//! - Fixtures: Reusable manifest content and descriptor builders

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
