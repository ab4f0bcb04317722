//! Markdown flavor

use super::FlavorFormatter;

/// Markdown formatter
#[derive(Debug, Default)]
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Create a new markdown formatter
    pub fn new() -> Self {
        Self
    }
}

impl FlavorFormatter for MarkdownFormatter {
    fn extension(&self) -> &'static str {
        "md"
    }

    fn commit_link(&self, repo_url: &str, hash: &str) -> String {
        format!(" [#{hash}]({repo_url}/commit/{hash})")
    }
}
