//! Git configuration store parsing
//!
//! Parses the INI-like `.git/config` text into a typed section/key map and
//! normalizes the remote origin URL into an HTTPS browsing URL. Every
//! failure mode here degrades to "no URL"; commit links are simply omitted.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, warn};

/// Typed view of an INI-like git configuration file.
///
/// Section headers are normalized: brackets and quotes stripped, inner
/// whitespace replaced by `-`, lowercased. `[remote "origin"]` is therefore
/// addressed as `remote-origin`.
#[derive(Debug, Default)]
pub struct GitConfigFile {
    sections: BTreeMap<String, BTreeMap<String, String>>,
}

impl GitConfigFile {
    /// Parse configuration text
    pub fn parse(content: &str) -> Self {
        let mut sections: BTreeMap<String, BTreeMap<String, String>> = BTreeMap::new();
        let mut section_name = String::new();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if line.starts_with('[') {
                section_name = normalize_section(line);
                sections.entry(section_name.clone()).or_default();
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            sections
                .entry(section_name.clone())
                .or_default()
                .insert(key.trim().to_string(), value.trim().to_string());
        }

        Self { sections }
    }

    /// Load and parse a configuration file, `None` when absent or unreadable
    pub fn load(path: &Path) -> Option<Self> {
        if !path.is_file() {
            warn!(path = %path.display(), "git config not found");
            return None;
        }

        match std::fs::read_to_string(path) {
            Ok(content) => Some(Self::parse(&content)),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "failed to read git config");
                None
            }
        }
    }

    /// Look up a key in a normalized section
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections.get(section)?.get(key).map(String::as_str)
    }

    /// The `remote "origin"` URL, if configured
    pub fn remote_origin_url(&self) -> Option<&str> {
        self.get("remote-origin", "url")
    }
}

/// Normalize a `[section "subsection"]` header line into a lookup key
fn normalize_section(line: &str) -> String {
    line.trim_matches(|c| c == '[' || c == ']')
        .replace('"', "")
        .trim()
        .replace(' ', "-")
        .to_lowercase()
}

/// Normalize a remote URL into an HTTPS browsing URL.
///
/// A `user@host:path` form becomes `https://` plus everything after the `@`,
/// with the GitHub SSH colon rewritten to a path separator. A trailing
/// `.git` suffix is stripped in all cases.
pub fn browse_url(raw: &str) -> String {
    let mut url = raw.to_string();

    let parts: Vec<&str> = url.split('@').collect();
    if parts.len() == 2 {
        url = format!("https://{}", parts[1]);
        url = url.replace("https://github.com:", "https://github.com/");
    }

    if let Some(stripped) = url.strip_suffix(".git") {
        url = stripped.to_string();
    }

    url
}

/// Resolve the origin browsing URL from a git config path.
///
/// Returns `None` when the file, section, or key is missing; the caller
/// renders link-less output in that case.
pub fn resolve_repo_url(path: &Path) -> Option<String> {
    let config = GitConfigFile::load(path)?;
    let Some(raw) = config.remote_origin_url() else {
        warn!(path = %path.display(), "no remote origin url in git config");
        return None;
    };

    let url = browse_url(raw);
    debug!(raw, %url, "resolved repository url");
    Some(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE_CONFIG: &str = r#"[core]
	repositoryformatversion = 0
	filemode = true
[remote "origin"]
	url = git@github.com:org/repo.git
	fetch = +refs/heads/*:refs/remotes/origin/*
[branch "main"]
	remote = origin
"#;

    #[test]
    fn test_parse_sections_and_keys() {
        let config = GitConfigFile::parse(SAMPLE_CONFIG);
        assert_eq!(config.get("core", "filemode"), Some("true"));
        assert_eq!(
            config.remote_origin_url(),
            Some("git@github.com:org/repo.git")
        );
        assert_eq!(config.get("branch-main", "remote"), Some("origin"));
    }

    #[test]
    fn test_missing_section_is_none() {
        let config = GitConfigFile::parse("[core]\n\tbare = false\n");
        assert_eq!(config.remote_origin_url(), None);
        assert_eq!(config.get("remote-origin", "url"), None);
    }

    #[test]
    fn test_browse_url_github_ssh() {
        assert_eq!(
            browse_url("git@github.com:org/repo.git"),
            "https://github.com/org/repo"
        );
    }

    #[test]
    fn test_browse_url_https_passthrough() {
        assert_eq!(
            browse_url("https://github.com/org/repo.git"),
            "https://github.com/org/repo"
        );
    }

    #[test]
    fn test_browse_url_other_host_keeps_colon() {
        assert_eq!(
            browse_url("git@gitlab.example.com:group/project.git"),
            "https://gitlab.example.com:group/project"
        );
    }

    #[test]
    fn test_browse_url_multiple_at_signs_untouched() {
        assert_eq!(browse_url("a@b@c"), "a@b@c");
    }

    #[test]
    fn test_resolve_repo_url_missing_file() {
        let temp = TempDir::new().unwrap();
        assert_eq!(resolve_repo_url(&temp.path().join(".git/config")), None);
    }

    #[test]
    fn test_resolve_repo_url_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config");
        std::fs::write(&path, SAMPLE_CONFIG).unwrap();

        assert_eq!(
            resolve_repo_url(&path).as_deref(),
            Some("https://github.com/org/repo")
        );
    }
}
