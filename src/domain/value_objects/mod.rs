//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod path_filter;
mod target_label;

pub use path_filter::{PathFilter, DEFAULT_DESCRIPTOR_SUFFIX};
pub use target_label::TargetLabel;
