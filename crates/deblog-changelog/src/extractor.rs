//! Message line extraction
//!
//! Walks commit blocks in log order and applies the line rules: keep only
//! indented message lines, drop merge-boundary artifacts, stop at the
//! previous release's own changelog entry, bullet-prefix, and deduplicate
//! across the whole run. Dedup keys are the trimmed, bullet-prefixed lines;
//! the sentinel check runs on the trimmed line before prefixing.

use deblog_core::PackageInfo;
use deblog_git::CommitBlock;
use tracing::debug;

use crate::formatter::FormatterRegistry;

/// Message-body lines are indented in the log output; metadata lines are not
pub fn is_message_line(raw: &str) -> bool {
    raw.chars().next().is_some_and(char::is_whitespace)
}

/// Merge-boundary artifact lines echo the boundary marker into the message
pub fn is_boundary_artifact(line: &str) -> bool {
    line.starts_with("* commit '")
}

/// A line reproducing the package's own changelog header marks the previous
/// release; nothing at or after it belongs in the new entry
pub fn is_release_sentinel(line: &str, package: &PackageInfo) -> bool {
    line.starts_with(&package.fullname)
        || line.starts_with(&format!("{} (", package.name))
        || line.starts_with(&format!("{} ", package.name))
}

/// Ensure the uniform leading bullet
pub fn bulleted(line: &str) -> String {
    if line.starts_with('*') {
        line.to_string()
    } else {
        format!("* {line}")
    }
}

/// Ordered, membership-checked set of lines emitted during one run
#[derive(Debug, Default)]
pub struct EmittedLines {
    lines: Vec<String>,
}

impl EmittedLines {
    /// Record a line; returns false when it was already emitted
    pub fn insert(&mut self, line: &str) -> bool {
        if self.lines.iter().any(|l| l == line) {
            return false;
        }
        self.lines.push(line.to_string());
        true
    }

    /// Number of distinct lines emitted so far
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True when nothing has been emitted
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Result of one extraction run
#[derive(Debug)]
pub struct Extraction {
    /// Accumulated bodies, parallel to `FormatterRegistry::all`
    pub bodies: Vec<String>,
    /// Commit blocks fully processed before the sentinel
    pub commit_count: usize,
}

/// Extract changelog lines from commit blocks into per-flavor bodies.
///
/// The first kept line of each block carries the flavor's commit link when a
/// repository URL is available; the block containing the sentinel is not
/// counted and nothing from it onward is emitted.
pub fn extract(
    blocks: &[CommitBlock],
    package: &PackageInfo,
    repo_url: Option<&str>,
    registry: &FormatterRegistry,
) -> Extraction {
    let mut seen = EmittedLines::default();
    let mut bodies = vec![String::new(); registry.all().len()];
    let mut commit_count = 0;

    'blocks: for block in blocks {
        let mut line_no = 0;

        for raw in &block.lines {
            if raw.is_empty() || !is_message_line(raw) {
                continue;
            }

            let line = raw.trim();
            if line.is_empty() || is_boundary_artifact(line) {
                continue;
            }

            if is_release_sentinel(line, package) {
                debug!(line, "release sentinel reached");
                break 'blocks;
            }

            let line = bulleted(line);
            if !seen.insert(&line) {
                continue;
            }
            line_no += 1;

            for (body, formatter) in bodies.iter_mut().zip(registry.all()) {
                body.push_str(&line);
                if line_no == 1 {
                    if let Some(url) = repo_url {
                        body.push_str(&formatter.commit_link(url, &block.hash));
                    }
                }
                body.push('\n');
            }

            debug!(hash = %block.hash, line = %line, "emitted");
        }

        commit_count += 1;
    }

    debug!(commit_count, lines = seen.len(), "extraction finished");
    Extraction {
        bodies,
        commit_count,
    }
}
