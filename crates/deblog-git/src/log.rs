//! Commit history capture
//!
//! Invokes `git log` once as an external command and splits its raw output
//! into per-commit blocks on the command's own boundary marker. The log
//! convention: message-body lines are indented, metadata lines are not.

use std::path::Path;
use std::process::Command;

use tracing::{debug, info};

use deblog_core::error::HistoryError;

/// Arguments for the single log invocation
pub const LOG_ARGS: &[&str] = &["log", "--no-decorate", "--source"];

/// One commit's segment of the raw log output
#[derive(Debug, Clone)]
pub struct CommitBlock {
    /// Commit hash from the block's first line
    pub hash: String,
    /// All lines of the block, metadata included
    pub lines: Vec<String>,
}

/// Run `git log` in `dir` and capture its raw output.
///
/// A nonzero exit status is fatal; everything else in the pipeline degrades,
/// this does not.
pub fn git_log(dir: &Path) -> Result<String, HistoryError> {
    let start = std::time::Instant::now();
    info!(dir = %dir.display(), "running git log");

    let output = Command::new("git")
        .args(LOG_ARGS)
        .current_dir(dir)
        .output()
        .map_err(HistoryError::Io)?;

    if !output.status.success() {
        return Err(HistoryError::CommandFailed {
            command: format!("git {}", LOG_ARGS.join(" ")),
            reason: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    let raw = String::from_utf8_lossy(&output.stdout).into_owned();
    info!(
        bytes = raw.len(),
        duration_ms = start.elapsed().as_millis(),
        "git log captured"
    );
    Ok(raw)
}

/// Split raw log output into commit blocks on the `\ncommit ` boundary
pub fn split_blocks(raw: &str) -> Vec<CommitBlock> {
    let blocks: Vec<CommitBlock> = raw
        .split("\ncommit ")
        .filter(|segment| !segment.is_empty())
        .map(parse_block)
        .collect();

    debug!(count = blocks.len(), "split commit blocks");
    blocks
}

/// Parse one block: the hash is the first tab-separated field of the first
/// line, with the `commit ` prefix the first block still carries stripped.
fn parse_block(segment: &str) -> CommitBlock {
    let lines: Vec<String> = segment.lines().map(String::from).collect();

    let mut hash = lines
        .first()
        .and_then(|line| line.split('\t').next())
        .unwrap_or("")
        .to_string();

    if let Some(stripped) = hash.strip_prefix("commit ") {
        hash = stripped.to_string();
    }

    CommitBlock { hash, lines }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_LOG: &str = "commit aaa111\tHEAD\nAuthor: Dev <dev@example.com>\nDate:   Mon Jan 5 10:00:00 2026 +0100\n\n    add feature X\n\ncommit bbb222\nAuthor: Dev <dev@example.com>\nDate:   Sun Jan 4 09:00:00 2026 +0100\n\n    fix crash on empty input\n    more detail here\n";

    #[test]
    fn test_split_blocks_count() {
        let blocks = split_blocks(SAMPLE_LOG);
        assert_eq!(blocks.len(), 2);
    }

    #[test]
    fn test_first_block_hash_strips_commit_prefix() {
        let blocks = split_blocks(SAMPLE_LOG);
        assert_eq!(blocks[0].hash, "aaa111");
    }

    #[test]
    fn test_later_block_hash_is_first_field() {
        let blocks = split_blocks(SAMPLE_LOG);
        assert_eq!(blocks[1].hash, "bbb222");
    }

    #[test]
    fn test_blocks_keep_all_lines() {
        let blocks = split_blocks(SAMPLE_LOG);
        assert!(blocks[1]
            .lines
            .iter()
            .any(|l| l.contains("fix crash on empty input")));
        assert!(blocks[1].lines.iter().any(|l| l.starts_with("Author:")));
    }

    #[test]
    fn test_empty_log_has_no_blocks() {
        assert!(split_blocks("").is_empty());
    }
}
