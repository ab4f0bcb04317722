//! Deblog Changelog - commit-log-to-changelog transformation
//!
//! This crate turns raw commit blocks into deduplicated changelog lines and
//! writes them in four flavors (Markdown, Jira markup, HTML, plain text).

pub mod extractor;
pub mod formatter;
pub mod generator;
pub mod writer;

pub use extractor::{extract, EmittedLines, Extraction};
pub use formatter::{FlavorFormatter, FormatterRegistry};
pub use generator::{ChangelogGenerator, GenerateReport};
pub use writer::OutputWriter;
