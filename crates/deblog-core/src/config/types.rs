//! Configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults;

/// Main configuration for Deblog
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Package metadata configuration
    pub package: PackageConfig,

    /// Git configuration
    pub git: GitConfig,

    /// Output configuration
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            package: PackageConfig::default(),
            git: GitConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Package metadata configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageConfig {
    /// Path to the Debian changelog whose first line names the package
    pub changelog: PathBuf,
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            changelog: PathBuf::from(defaults::DEFAULT_CHANGELOG),
        }
    }
}

/// Git configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GitConfig {
    /// Path to the git configuration store holding the remote origin URL
    pub config: PathBuf,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            config: PathBuf::from(defaults::DEFAULT_GIT_CONFIG),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory for intermediate and final output files
    pub dir: PathBuf,

    /// File stem shared by all output files
    pub basename: String,

    /// Body written when no commits were processed
    pub placeholder: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            basename: defaults::DEFAULT_BASENAME.to_string(),
            placeholder: defaults::DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.package.changelog, PathBuf::from("debian/changelog"));
        assert_eq!(config.git.config, PathBuf::from(".git/config"));
        assert_eq!(config.output.basename, ".deblog");
        assert_eq!(config.output.placeholder, "* without changes");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = toml::from_str("[output]\ndir = \"build\"").unwrap();
        assert_eq!(config.output.dir, PathBuf::from("build"));
        assert_eq!(config.output.basename, ".deblog");
        assert_eq!(config.package.changelog, PathBuf::from("debian/changelog"));
    }
}
