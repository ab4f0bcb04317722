//! Jira markup flavor

use super::FlavorFormatter;

/// Jira markup formatter
#[derive(Debug, Default)]
pub struct JiraFormatter;

impl JiraFormatter {
    /// Create a new Jira formatter
    pub fn new() -> Self {
        Self
    }
}

impl FlavorFormatter for JiraFormatter {
    fn extension(&self) -> &'static str {
        "jira"
    }

    fn commit_link(&self, repo_url: &str, hash: &str) -> String {
        format!(" [#{hash}|{repo_url}/commit/{hash}]")
    }
}
