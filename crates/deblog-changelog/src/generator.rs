//! Changelog generation pipeline
//!
//! Strictly linear: resolve metadata, resolve the repository URL, extract
//! history, write outputs. No phase branches back and nothing is retried;
//! only a failing log invocation aborts the run.

use std::path::{Path, PathBuf};

use deblog_core::config::Config;
use deblog_core::{PackageInfo, Result};
use deblog_git::{git_log, split_blocks};
use serde::Serialize;
use tracing::{info, instrument};

use crate::extractor::extract;
use crate::formatter::FormatterRegistry;
use crate::writer::OutputWriter;

/// Changelog generator holding the resolved configuration
pub struct ChangelogGenerator {
    config: Config,
    registry: FormatterRegistry,
}

/// Outcome of one pipeline run
#[derive(Debug, Serialize)]
pub struct GenerateReport {
    /// Resolved package metadata
    pub package: PackageInfo,
    /// Normalized repository browsing URL, when available
    pub repo_url: Option<String>,
    /// Commit blocks processed before the release sentinel
    pub commit_count: usize,
    /// Final output files, one per flavor
    pub outputs: Vec<PathBuf>,
}

impl ChangelogGenerator {
    /// Create a generator from configuration
    pub fn new(config: Config) -> Self {
        Self {
            config,
            registry: FormatterRegistry::new(),
        }
    }

    /// Run the full pipeline in `dir`
    #[instrument(skip(self), fields(dir = %dir.display()))]
    pub fn run(&self, dir: &Path) -> Result<GenerateReport> {
        let package = PackageInfo::from_changelog(&dir.join(&self.config.package.changelog));
        info!(package = %package.fullname, version = %package.version, "package resolved");

        let repo_url = deblog_git::resolve_repo_url(&dir.join(&self.config.git.config));
        info!(repo_url = ?repo_url, "repository url resolved");

        let raw = git_log(dir)?;
        let blocks = split_blocks(&raw);
        let extraction = extract(&blocks, &package, repo_url.as_deref(), &self.registry);
        info!(commit_count = extraction.commit_count, "history extracted");

        let writer = OutputWriter::new(dir, &self.config.output);
        writer.write_intermediates(&self.registry, &extraction.bodies)?;
        let outputs = writer.write_finals(&self.registry, extraction.commit_count)?;

        Ok(GenerateReport {
            package,
            repo_url,
            commit_count: extraction.commit_count,
            outputs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deblog_core::config::OutputConfig;
    use tempfile::TempDir;

    // The pipeline minus the `git log` invocation, driven by fixture text.
    fn run_on_fixture(dir: &Path, config: &Config, raw_log: &str) -> GenerateReport {
        let registry = FormatterRegistry::new();
        let package = PackageInfo::from_changelog(&dir.join(&config.package.changelog));
        let repo_url = deblog_git::resolve_repo_url(&dir.join(&config.git.config));

        let blocks = split_blocks(raw_log);
        let extraction = extract(&blocks, &package, repo_url.as_deref(), &registry);

        let writer = OutputWriter::new(dir, &config.output);
        writer.write_intermediates(&registry, &extraction.bodies).unwrap();
        let outputs = writer.write_finals(&registry, extraction.commit_count).unwrap();

        GenerateReport {
            package,
            repo_url,
            commit_count: extraction.commit_count,
            outputs,
        }
    }

    fn setup(temp: &TempDir) -> Config {
        std::fs::create_dir_all(temp.path().join("debian")).unwrap();
        std::fs::write(
            temp.path().join("debian/changelog"),
            "mypkg (1.2.3) unstable; urgency=low\n",
        )
        .unwrap();
        std::fs::create_dir_all(temp.path().join(".git")).unwrap();
        std::fs::write(
            temp.path().join(".git/config"),
            "[remote \"origin\"]\n\turl = git@github.com:org/repo.git\n",
        )
        .unwrap();

        Config {
            output: OutputConfig::default(),
            ..Config::default()
        }
    }

    const RAW_LOG: &str = "commit aaa111\nAuthor: Dev <d@e>\nDate:   now\n\n    add feature\n\ncommit bbb222\nAuthor: Dev <d@e>\nDate:   then\n\n    mypkg (1.2.3) unstable; urgency=low\n";

    #[test]
    fn test_pipeline_end_to_end() {
        let temp = TempDir::new().unwrap();
        let config = setup(&temp);

        let report = run_on_fixture(temp.path(), &config, RAW_LOG);

        assert_eq!(report.package.version, "(1.2.4)");
        assert_eq!(report.repo_url.as_deref(), Some("https://github.com/org/repo"));
        assert_eq!(report.commit_count, 1);
        assert_eq!(report.outputs.len(), 4);

        let md = std::fs::read_to_string(temp.path().join(".deblog-commit.md")).unwrap();
        assert_eq!(
            md,
            "* add feature [#aaa111](https://github.com/org/repo/commit/aaa111)\n"
        );

        let jira = std::fs::read_to_string(temp.path().join(".deblog-commit.jira")).unwrap();
        assert_eq!(
            jira,
            "* add feature [#aaa111|https://github.com/org/repo/commit/aaa111]\n"
        );

        let txt = std::fs::read_to_string(temp.path().join(".deblog-commit.txt")).unwrap();
        assert_eq!(
            txt,
            "* add feature https://github.com/org/repo/commit/aaa111\n"
        );

        let html = std::fs::read_to_string(temp.path().join(".deblog-commit.html")).unwrap();
        assert_eq!(
            html,
            "<li> add feature <a href=\"https://github.com/org/repo/commit/aaa111\">#aaa111</a>."
        );
    }

    #[test]
    fn test_pipeline_without_repo_url() {
        let temp = TempDir::new().unwrap();
        let mut config = setup(&temp);
        config.git.config = PathBuf::from("nonexistent/config");

        let report = run_on_fixture(temp.path(), &config, RAW_LOG);

        assert_eq!(report.repo_url, None);
        let md = std::fs::read_to_string(temp.path().join(".deblog-commit.md")).unwrap();
        assert_eq!(md, "* add feature\n");
    }

    #[test]
    fn test_pipeline_sentinel_only_history() {
        let temp = TempDir::new().unwrap();
        let config = setup(&temp);
        let raw = "commit ccc333\nAuthor: Dev <d@e>\nDate:   then\n\n    mypkg (1.2.3) unstable; urgency=low\n";

        let report = run_on_fixture(temp.path(), &config, raw);

        assert_eq!(report.commit_count, 0);
        let md = std::fs::read_to_string(temp.path().join(".deblog-commit.md")).unwrap();
        assert_eq!(md, "* without changes");
        let html = std::fs::read_to_string(temp.path().join(".deblog-commit.html")).unwrap();
        assert_eq!(html, "<li> without changes");
    }

    #[test]
    fn test_pipeline_missing_changelog_degrades() {
        let temp = TempDir::new().unwrap();
        let mut config = setup(&temp);
        config.package.changelog = PathBuf::from("missing/changelog");

        let report = run_on_fixture(temp.path(), &config, RAW_LOG);

        assert_eq!(report.package.name, "unknown");
        // without the real package name the sentinel never fires
        assert_eq!(report.commit_count, 2);
    }

    #[test]
    fn test_pipeline_reruns_byte_identical() {
        let temp = TempDir::new().unwrap();
        let config = setup(&temp);

        run_on_fixture(temp.path(), &config, RAW_LOG);
        let first = std::fs::read(temp.path().join(".deblog-commit.md")).unwrap();
        run_on_fixture(temp.path(), &config, RAW_LOG);
        let second = std::fs::read(temp.path().join(".deblog-commit.md")).unwrap();

        assert_eq!(first, second);
    }
}
