//! CLI commands

mod completions;
mod generate;
mod version;

pub use completions::CompletionsCommand;
pub use generate::GenerateCommand;
pub use version::VersionCommand;
