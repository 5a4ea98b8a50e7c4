//! Extract Options

use std::path::PathBuf;

use crate::config::Config;
use crate::domain::value_objects::{PathFilter, TargetLabel};

/// Inputs for one extraction
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Target whose deploy info is wanted
    pub target: TargetLabel,
    /// Directory descriptor paths are relative to
    pub execution_root: PathBuf,
    /// Selects the descriptor among the target's outputs
    pub filter: PathFilter,
}

impl ExtractOptions {
    pub fn new(target: TargetLabel, execution_root: impl Into<PathBuf>) -> Self {
        Self {
            target,
            execution_root: execution_root.into(),
            filter: PathFilter::default(),
        }
    }

    pub fn from_config(target: TargetLabel, config: &Config) -> Self {
        Self {
            target,
            execution_root: config.execution_root.clone(),
            filter: config.path_filter(),
        }
    }

    pub fn with_filter(mut self, filter: PathFilter) -> Self {
        self.filter = filter;
        self
    }
}
