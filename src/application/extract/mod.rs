//! Extract Module
//!
//! Turns a build target into a deployment plan.
//!
//! ## Structure
//!
//! - `options` - Per-invocation inputs (`ExtractOptions`)
//! - `use_case` - Wiring of collaborators (`ExtractUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use deployinfo::application::extract::{DefaultExtractUseCase, ExtractOptions};
//!
//! let use_case = DefaultExtractUseCase::from_config(&config);
//! let plan = use_case.execute(&ExtractOptions::from_config(target, &config))?;
//! ```

mod options;
mod use_case;

pub use options::ExtractOptions;
pub use use_case::{describe, DefaultExtractUseCase, ExtractUseCase};
