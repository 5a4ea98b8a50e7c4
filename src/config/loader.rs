//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DeployInfoError, DeployInfoResult};

use super::types::{Config, OutputFormat};

/// File name of the project-level config
pub const PROJECT_CONFIG_FILE: &str = "deployinfo.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> DeployInfoResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| DeployInfoError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults.
///
/// The first config file that exists wins; a file that exists but does not
/// parse is an error rather than a silent fallback.
pub fn load_or_default(
    project_root: Option<&Path>,
) -> DeployInfoResult<(Config, Vec<ConfigWarning>)> {
    let candidates = project_root
        .map(|root| root.join(PROJECT_CONFIG_FILE))
        .into_iter()
        .chain(dirs::config_dir().map(|dir| dir.join("deployinfo").join("config.toml")));

    for candidate in candidates {
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "loading config");
            let (config, warnings) = load_with_warnings(&candidate)?;
            return Ok((with_env_overrides(config), warnings));
        }
    }

    Ok((with_env_overrides(Config::default()), Vec::new()))
}

/// Apply environment variable overrides (DEPLOYINFO_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply overrides read through `lookup`
pub fn with_env_overrides_from(
    mut config: Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> Config {
    if let Some(root) = lookup("DEPLOYINFO_EXECUTION_ROOT").filter(|v| !v.is_empty()) {
        config.execution_root = PathBuf::from(root);
    }

    if let Some(root) = lookup("DEPLOYINFO_OUTPUT_ROOT").filter(|v| !v.is_empty()) {
        config.output_root = PathBuf::from(root);
    }

    if let Some(suffix) = lookup("DEPLOYINFO_DESCRIPTOR_SUFFIX").filter(|v| !v.is_empty()) {
        config.descriptor.suffix = suffix;
    }

    if let Some(format) = lookup("DEPLOYINFO_FORMAT").filter(|v| !v.is_empty()) {
        match parse_format(&format) {
            Ok(format) => config.output.format = format,
            Err(message) => tracing::warn!("{}", message),
        }
    }

    config
}

const FORMAT_VALUES: &[&str] = &["text", "json"];

/// Parse a `DEPLOYINFO_FORMAT` value; the error names the valid values.
pub(crate) fn parse_format(value: &str) -> Result<OutputFormat, String> {
    match value.to_lowercase().as_str() {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => {
            let hint = closest(other, FORMAT_VALUES)
                .map(|s| format!(" (did you mean '{}'?)", s))
                .unwrap_or_default();
            Err(format!(
                "invalid DEPLOYINFO_FORMAT value '{}'{}; valid values: {}",
                value,
                hint,
                FORMAT_VALUES.join(", ")
            ))
        }
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "execution_root",
        "output_root",
        "descriptor",
        "suffix",
        "output",
        "format",
    ];

    closest(unknown, CANDIDATES).map(str::to_string)
}

/// Nearest candidate within two edits
fn closest<'a>(input: &str, candidates: &[&'a str]) -> Option<&'a str> {
    let mut best: Option<(&'a str, usize)> = None;
    for &candidate in candidates {
        let dist = levenshtein(input, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
