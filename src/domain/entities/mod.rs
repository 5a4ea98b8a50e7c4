//! Domain Entities
//!
//! - `DeployDescriptor` - decoded deploy-info record produced by the build
//! - `DeploymentPlan` - manifests and packages resolved against an execution root

mod descriptor;
mod plan;

pub use descriptor::{ArtifactRef, DeployDescriptor};
pub use plan::DeploymentPlan;
