//! Formatter registry

use std::sync::Arc;

use super::{FlavorFormatter, HtmlFormatter, JiraFormatter, MarkdownFormatter, TextFormatter};

/// Registry of the four output flavors
pub struct FormatterRegistry {
    formatters: Vec<Arc<dyn FlavorFormatter>>,
}

impl FormatterRegistry {
    /// Create a registry with all built-in flavors
    pub fn new() -> Self {
        Self {
            formatters: vec![
                Arc::new(MarkdownFormatter::new()),
                Arc::new(JiraFormatter::new()),
                Arc::new(HtmlFormatter::new()),
                Arc::new(TextFormatter::new()),
            ],
        }
    }

    /// Get formatter by file extension
    pub fn get(&self, extension: &str) -> Option<Arc<dyn FlavorFormatter>> {
        self.formatters
            .iter()
            .find(|f| f.extension() == extension)
            .cloned()
    }

    /// Get all registered formatters
    pub fn all(&self) -> &[Arc<dyn FlavorFormatter>] {
        &self.formatters
    }

    /// Get all supported file extensions
    pub fn extensions(&self) -> Vec<&'static str> {
        self.formatters.iter().map(|f| f.extension()).collect()
    }
}

impl Default for FormatterRegistry {
    fn default() -> Self {
        Self::new()
    }
}
