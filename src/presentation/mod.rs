//! Presentation Layer
//!
//! Rendering of plans and descriptors for the CLI.

pub mod output;

pub use output::{render_descriptor, render_located, render_plan};
