//! Domain Layer
//!
//! Deploy-info extraction without any knowledge of a concrete build tool.
//!
//! ## Structure
//!
//! - `entities/` - Descriptor wire messages and the resulting plan
//! - `value_objects/` - Target labels and path filters
//! - `services/` - The extractor pipeline
//! - `ports/` - Interfaces for the build output and manifest collaborators
//!
//! The only I/O done here is opening the single descriptor file; everything
//! else goes through ports.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
