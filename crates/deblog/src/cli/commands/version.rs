//! Version command

use clap::Args;
use console::style;
use tracing::info;

use deblog_core::config::load_config_or_default;
use deblog_core::PackageInfo;

use crate::cli::{Cli, OutputFormat};

/// Resolve the package name and next version
#[derive(Debug, Args)]
pub struct VersionCommand {
    /// Show the current changelog header fields instead of the next version
    #[arg(long)]
    pub current: bool,
}

impl VersionCommand {
    /// Execute the version command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(current = self.current, "executing version command");
        let cwd = std::env::current_dir()?;
        let (config, _) = load_config_or_default(&cwd);

        let package = PackageInfo::from_changelog(&cwd.join(&config.package.changelog));

        if cli.quiet {
            return Ok(());
        }

        match cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&package)?);
            }
            OutputFormat::Text => {
                if self.current {
                    println!("{}", package.fullname);
                } else {
                    println!(
                        "{} {}",
                        package.name,
                        style(&package.version).green().bold()
                    );
                }
            }
        }

        Ok(())
    }
}
