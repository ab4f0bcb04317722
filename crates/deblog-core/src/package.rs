//! Package metadata resolution
//!
//! Reads the first line of a Debian-style changelog
//! (`<name> (<version>[+suffix]) ...`) and derives the next patch version.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::VersionError;

/// Regex for the changelog header line. Only the first two fields matter.
static HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<name>\S+)\s+(?P<version>\S+)").expect("Invalid regex")
});

/// Package name and version resolved from the changelog header
#[derive(Debug, Clone, Serialize)]
pub struct PackageInfo {
    /// Package name
    pub name: String,
    /// Next version, formatted `(major.minor.patch)` when the bump succeeded
    pub version: String,
    /// Original `<name> (<version>)` header fields, unmodified
    pub fullname: String,
}

impl PackageInfo {
    /// Placeholder used when the changelog file is absent
    pub fn unknown() -> Self {
        Self {
            name: "unknown".to_string(),
            version: "0".to_string(),
            fullname: "unknown 0".to_string(),
        }
    }

    /// Resolve package metadata from a changelog file.
    ///
    /// A missing file yields the placeholder. A malformed version token is
    /// logged and kept unincremented; the run continues either way.
    pub fn from_changelog(path: &Path) -> Self {
        if !path.is_file() {
            warn!(path = %path.display(), "changelog not found, using placeholder package");
            return Self::unknown();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => {
                let first_line = content.lines().next().unwrap_or("");
                Self::from_header_line(first_line)
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "failed to read changelog");
                Self::unknown()
            }
        }
    }

    /// Resolve package metadata from the changelog header line
    pub fn from_header_line(line: &str) -> Self {
        let Some(caps) = HEADER_REGEX.captures(line) else {
            warn!(line, "malformed changelog header");
            return Self::unknown();
        };

        let name = caps["name"].to_string();
        let token = caps["version"].to_string();
        let fullname = format!("{name} {token}");

        let version = match bump_patch(&token) {
            Ok(bumped) => bumped,
            Err(err) => {
                warn!(version = %token, error = %err, "version bump failed");
                token
            }
        };

        debug!(%name, %version, %fullname, "resolved package");
        Self {
            name,
            version,
            fullname,
        }
    }
}

/// Increment the patch component of a parenthesized version token.
///
/// `(1.2.3+deb1)` becomes `(1.2.4)`; any build suffix is dropped.
pub fn bump_patch(token: &str) -> Result<String, VersionError> {
    let inner = token
        .strip_prefix('(')
        .and_then(|t| t.strip_suffix(')'))
        .ok_or_else(|| VersionError::InvalidFormat(token.to_string()))?;

    let version = semver::Version::parse(inner)
        .map_err(|e| VersionError::ParseFailed(inner.to_string(), e.to_string()))?;

    Ok(format!(
        "({}.{}.{})",
        version.major,
        version.minor,
        version.patch + 1
    ))
}
