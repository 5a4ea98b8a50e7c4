//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::value_objects::{PathFilter, DEFAULT_DESCRIPTOR_SUFFIX};
use crate::error::DeployInfoResult;

use super::loader::{self, ConfigWarning};

/// Descriptor lookup configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DescriptorConfig {
    /// File suffix that marks the deploy-info output
    #[serde(default = "default_suffix")]
    pub suffix: String,
}

impl Default for DescriptorConfig {
    fn default() -> Self {
        Self {
            suffix: default_suffix(),
        }
    }
}

fn default_suffix() -> String {
    DEFAULT_DESCRIPTOR_SUFFIX.to_string()
}

/// How plans are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Directory the build reports outputs relative to
    #[serde(default = "default_execution_root")]
    pub execution_root: PathBuf,

    /// Build output tree; relative paths are taken from `execution_root`
    #[serde(default = "default_output_root")]
    pub output_root: PathBuf,

    #[serde(default)]
    pub descriptor: DescriptorConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            execution_root: default_execution_root(),
            output_root: default_output_root(),
            descriptor: DescriptorConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

fn default_execution_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_output_root() -> PathBuf {
    PathBuf::from("bazel-bin")
}

impl Config {
    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> DeployInfoResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Output root with relative paths anchored at the execution root
    pub fn resolved_output_root(&self) -> PathBuf {
        if self.output_root.is_absolute() {
            self.output_root.clone()
        } else {
            self.execution_root.join(&self.output_root)
        }
    }

    pub fn path_filter(&self) -> PathFilter {
        PathFilter::suffix(self.descriptor.suffix.clone())
    }
}
