//! PathFilter value object - selects which build output is the descriptor

use std::fmt;
use std::sync::Arc;

/// Default file suffix of the deploy-info descriptor
pub const DEFAULT_DESCRIPTOR_SUFFIX: &str = ".deployinfo.pb";

/// Predicate over build output paths.
#[derive(Clone)]
pub enum PathFilter {
    /// Path ends with the given suffix
    Suffix(String),
    /// Arbitrary predicate supplied by the caller
    Custom(Arc<dyn Fn(&str) -> bool + Send + Sync>),
}

impl PathFilter {
    pub fn suffix(suffix: impl Into<String>) -> Self {
        PathFilter::Suffix(suffix.into())
    }

    pub fn custom(predicate: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        PathFilter::Custom(Arc::new(predicate))
    }

    pub fn matches(&self, path: &str) -> bool {
        match self {
            PathFilter::Suffix(suffix) => path.ends_with(suffix.as_str()),
            PathFilter::Custom(predicate) => predicate(path),
        }
    }
}

impl Default for PathFilter {
    fn default() -> Self {
        PathFilter::suffix(DEFAULT_DESCRIPTOR_SUFFIX)
    }
}

impl fmt::Debug for PathFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathFilter::Suffix(suffix) => f.debug_tuple("Suffix").field(suffix).finish(),
            PathFilter::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
