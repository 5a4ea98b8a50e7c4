//! Output Rendering
//!
//! Renders results as human-readable text or JSON. Renderers return strings;
//! printing is left to the caller.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;

use crate::config::OutputFormat;
use crate::domain::entities::{ArtifactRef, DeployDescriptor, DeploymentPlan};
use crate::domain::value_objects::TargetLabel;
use crate::infrastructure::RawManifest;

#[derive(Serialize)]
struct PlanJson<'a> {
    target: String,
    merged_manifest: &'a Path,
    test_target_manifest: Option<&'a Path>,
    packages: &'a [PathBuf],
}

#[derive(Serialize)]
struct DescriptorJson<'a> {
    merged_manifest: Option<&'a str>,
    additional_merged_manifests: Vec<&'a str>,
    packages_to_deploy: Vec<&'a str>,
    data_to_deploy: Vec<&'a str>,
}

#[derive(Serialize)]
struct LocatedJson<'a> {
    target: String,
    descriptor: &'a Path,
}

pub fn render_plan(
    target: &TargetLabel,
    plan: &DeploymentPlan<Arc<RawManifest>>,
    format: OutputFormat,
) -> String {
    match format {
        OutputFormat::Json => to_json(&PlanJson {
            target: target.to_string(),
            merged_manifest: plan.merged_manifest().path(),
            test_target_manifest: plan.test_target_manifest().map(|m| m.path()),
            packages: plan.packages(),
        }),
        OutputFormat::Text => {
            let mut out = String::new();
            let _ = writeln!(out, "target: {}", target);
            let _ = writeln!(
                out,
                "merged manifest: {}",
                plan.merged_manifest().path().display()
            );
            match plan.test_target_manifest() {
                Some(manifest) => {
                    let _ = writeln!(out, "test target manifest: {}", manifest.path().display());
                }
                None => out.push_str("test target manifest: (none)\n"),
            }
            let _ = writeln!(out, "packages ({}):", plan.packages().len());
            for (i, package) in plan.packages().iter().enumerate() {
                let _ = writeln!(out, "  {}. {}", i + 1, package.display());
            }
            out
        }
    }
}

pub fn render_descriptor(descriptor: &DeployDescriptor, format: OutputFormat) -> String {
    let merged_manifest = descriptor
        .merged_manifest
        .as_ref()
        .map(|m| m.exec_root_path.as_str());

    match format {
        OutputFormat::Json => to_json(&DescriptorJson {
            merged_manifest,
            additional_merged_manifests: as_strs(&descriptor.additional_merged_manifests),
            packages_to_deploy: as_strs(&descriptor.packages_to_deploy),
            data_to_deploy: as_strs(&descriptor.data_to_deploy),
        }),
        OutputFormat::Text => {
            let mut out = String::new();
            let _ = writeln!(out, "merged manifest: {}", merged_manifest.unwrap_or("(none)"));
            for (title, refs) in [
                (
                    "additional merged manifests",
                    &descriptor.additional_merged_manifests,
                ),
                ("packages to deploy", &descriptor.packages_to_deploy),
                ("data to deploy", &descriptor.data_to_deploy),
            ] {
                let _ = writeln!(out, "{} ({}):", title, refs.len());
                for entry in as_strs(refs) {
                    let _ = writeln!(out, "  - {}", entry);
                }
            }
            out
        }
    }
}

pub fn render_located(target: &TargetLabel, descriptor: &Path, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => to_json(&LocatedJson {
            target: target.to_string(),
            descriptor,
        }),
        OutputFormat::Text => format!("{}\n", descriptor.display()),
    }
}

fn as_strs(refs: &[ArtifactRef]) -> Vec<&str> {
    refs.iter().map(|r| r.exec_root_path.as_str()).collect()
}

fn to_json<T: Serialize>(value: &T) -> String {
    // Only non-UTF-8 paths can make this fail.
    match serde_json::to_string_pretty(value) {
        Ok(json) => format!("{}\n", json),
        Err(e) => format!("{{\"error\": {:?}}}\n", e.to_string()),
    }
}
