//! Default configuration values

/// Default configuration file name
pub const DEFAULT_CONFIG_TOML: &str = "deblog.toml";

/// Alternative (hidden) configuration file name
pub const ALT_CONFIG_FILE: &str = ".deblog.toml";

/// Default path to the Debian changelog
pub const DEFAULT_CHANGELOG: &str = "debian/changelog";

/// Default path to the git configuration store
pub const DEFAULT_GIT_CONFIG: &str = ".git/config";

/// Default output file stem
pub const DEFAULT_BASENAME: &str = ".deblog";

/// Default body for a run that processed no commits
pub const DEFAULT_PLACEHOLDER: &str = "* without changes";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![DEFAULT_CONFIG_TOML, ALT_CONFIG_FILE]
}
