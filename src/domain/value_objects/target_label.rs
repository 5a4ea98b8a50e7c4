//! TargetLabel value object - identifies a build target

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::DeployInfoError;

/// A build target label such as `//java/com/app:app` or `@repo//pkg:name`.
///
/// The short form `//java/com/app` names the target after the last package
/// segment, the way the build tool does.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetLabel {
    repository: Option<String>,
    package: String,
    name: String,
}

impl TargetLabel {
    pub fn parse(label: &str) -> Result<Self, DeployInfoError> {
        let invalid = |reason: &str| DeployInfoError::InvalidLabel {
            label: label.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = label.trim();
        let (repository, rest) = match trimmed.strip_prefix('@') {
            Some(after_at) => {
                let (repo, rest) = after_at
                    .split_once("//")
                    .ok_or_else(|| invalid("external labels need '//' after the repository"))?;
                if repo.is_empty() {
                    return Err(invalid("repository name is empty"));
                }
                (Some(repo.to_string()), rest)
            }
            None => {
                let rest = trimmed
                    .strip_prefix("//")
                    .ok_or_else(|| invalid("labels must start with '//' or '@'"))?;
                (None, rest)
            }
        };

        let (package, name) = match rest.split_once(':') {
            Some((package, name)) => (package, name.to_string()),
            None => {
                let name = rest.rsplit('/').next().unwrap_or(rest);
                (rest, name.to_string())
            }
        };

        if name.is_empty() {
            return Err(invalid("target name is empty"));
        }
        if name.contains(':') {
            return Err(invalid("more than one ':'"));
        }
        if package.starts_with('/') || package.ends_with('/') || package.contains("//") {
            return Err(invalid("package path has an empty segment"));
        }
        if package.split('/').any(|seg| seg == "..") || name.split('/').any(|seg| seg == "..") {
            return Err(invalid("'..' is not allowed"));
        }

        Ok(Self {
            repository,
            package: package.to_string(),
            name,
        })
    }

    pub fn repository(&self) -> Option<&str> {
        self.repository.as_deref()
    }

    /// Package path, e.g. `java/com/app`
    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Package as a relative directory under a build output root
    pub fn package_dir(&self) -> PathBuf {
        let mut dir = PathBuf::new();
        if let Some(repo) = &self.repository {
            dir.push("external");
            dir.push(repo);
        }
        for segment in self.package.split('/').filter(|s| !s.is_empty()) {
            dir.push(segment);
        }
        dir
    }
}

impl fmt::Display for TargetLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(repo) = &self.repository {
            write!(f, "@{}", repo)?;
        }
        write!(f, "//{}:{}", self.package, self.name)
    }
}

impl FromStr for TargetLabel {
    type Err = DeployInfoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
