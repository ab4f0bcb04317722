//! Plain text flavor

use super::FlavorFormatter;

/// Plain text formatter
#[derive(Debug, Default)]
pub struct TextFormatter;

impl TextFormatter {
    /// Create a new plain text formatter
    pub fn new() -> Self {
        Self
    }
}

impl FlavorFormatter for TextFormatter {
    fn extension(&self) -> &'static str {
        "txt"
    }

    fn commit_link(&self, repo_url: &str, hash: &str) -> String {
        format!(" {repo_url}/commit/{hash}")
    }
}
