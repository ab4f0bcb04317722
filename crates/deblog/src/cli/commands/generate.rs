//! Generate command

use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use deblog_changelog::ChangelogGenerator;
use deblog_core::config::load_config_or_default;

use crate::cli::{Cli, OutputFormat};

/// Generate the changelog files
#[derive(Debug, Args)]
pub struct GenerateCommand {
    /// Path to the Debian changelog to read package metadata from
    #[arg(long, value_name = "PATH")]
    pub changelog: Option<PathBuf>,

    /// Directory for intermediate and final output files
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

impl GenerateCommand {
    /// Execute the generate command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(changelog = ?self.changelog, output_dir = ?self.output_dir, "executing generate command");
        let cwd = std::env::current_dir()?;
        let (mut config, _) = load_config_or_default(&cwd);

        if let Some(path) = &self.changelog {
            config.package.changelog = path.clone();
        }
        if let Some(dir) = &self.output_dir {
            config.output.dir = dir.clone();
        }

        let generator = ChangelogGenerator::new(config);
        let report = generator.run(&cwd)?;

        if cli.quiet {
            return Ok(());
        }

        match cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            OutputFormat::Text => {
                println!(
                    "{} {} {} ({} commits)",
                    style("✓").green().bold(),
                    report.package.name,
                    style(&report.package.version).green().bold(),
                    report.commit_count
                );
                for path in &report.outputs {
                    println!("  {}", style(path.display()).cyan());
                }
                if cli.verbose {
                    match &report.repo_url {
                        Some(url) => println!("  links: {}", style(url).dim()),
                        None => println!("  links: {}", style("none (no origin url)").dim()),
                    }
                }
            }
        }

        Ok(())
    }
}
