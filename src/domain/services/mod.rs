//! Domain Services
//!
//! - `extractor` - locate, decode and resolve a deploy descriptor

mod extractor;

pub use extractor::{read_descriptor, DeployDescriptorExtractor};
