//! HTML flavor
//!
//! The final pass replaces each `*` bullet with `<li>` and each newline with
//! a literal `.`. This rendering is lossy on purpose; consumers of the HTML
//! flavor expect exactly this transformation.

use super::FlavorFormatter;

/// HTML formatter
#[derive(Debug, Default)]
pub struct HtmlFormatter;

impl HtmlFormatter {
    /// Create a new HTML formatter
    pub fn new() -> Self {
        Self
    }
}

impl FlavorFormatter for HtmlFormatter {
    fn extension(&self) -> &'static str {
        "html"
    }

    fn commit_link(&self, repo_url: &str, hash: &str) -> String {
        format!(" <a href=\"{repo_url}/commit/{hash}\">#{hash}</a>")
    }

    fn finalize(&self, body: &str) -> String {
        body.replace('*', "<li>").replace('\n', ".")
    }
}
