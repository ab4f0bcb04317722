//! Output flavor formatters

mod html;
mod jira;
mod markdown;
mod registry;
mod text;

pub use html::HtmlFormatter;
pub use jira::JiraFormatter;
pub use markdown::MarkdownFormatter;
pub use registry::FormatterRegistry;
pub use text::TextFormatter;

/// Trait for flavor formatters.
///
/// All flavors receive the same deduplicated line sequence; only the commit
/// link syntax and the final post-processing pass differ.
pub trait FlavorFormatter: Send + Sync {
    /// File extension for this flavor
    fn extension(&self) -> &'static str;

    /// Render the link suffix appended to a block's first kept line
    fn commit_link(&self, repo_url: &str, hash: &str) -> String;

    /// Post-process the final body; identity for most flavors
    fn finalize(&self, body: &str) -> String {
        body.to_string()
    }
}
