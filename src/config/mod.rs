//! Configuration module for deployinfo
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (DEPLOYINFO_*)
//! 3. Project config (./deployinfo.toml)
//! 4. User config (~/.config/deployinfo/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    load_or_default, load_with_warnings, with_env_overrides, with_env_overrides_from,
    ConfigWarning, PROJECT_CONFIG_FILE,
};
pub use types::{Config, DescriptorConfig, OutputConfig, OutputFormat};
