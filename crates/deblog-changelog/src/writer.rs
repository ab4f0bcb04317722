//! Intermediate and final output files
//!
//! The history phase fills one intermediate file per flavor; the write phase
//! assembles each final file from its intermediate (or the no-changes
//! placeholder) and applies the flavor's post-processing pass. Each file is
//! fully written and closed before the next phase touches it, so re-running
//! with identical inputs overwrites everything idempotently.

use std::path::{Path, PathBuf};

use deblog_core::config::OutputConfig;
use deblog_core::error::ChangelogError;
use tracing::{debug, info};

use crate::formatter::FormatterRegistry;

/// Writer for the per-flavor output files
#[derive(Debug, Clone)]
pub struct OutputWriter {
    dir: PathBuf,
    basename: String,
    placeholder: String,
}

impl OutputWriter {
    /// Create a writer rooted at `base`, honoring the output configuration
    pub fn new(base: &Path, config: &OutputConfig) -> Self {
        Self {
            dir: base.join(&config.dir),
            basename: config.basename.clone(),
            placeholder: config.placeholder.clone(),
        }
    }

    /// Path of a flavor's intermediate file
    pub fn intermediate_path(&self, extension: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", self.basename, extension))
    }

    /// Path of a flavor's final file
    pub fn final_path(&self, extension: &str) -> PathBuf {
        self.dir
            .join(format!("{}-commit.{}", self.basename, extension))
    }

    /// Write the accumulated bodies to the intermediate files.
    ///
    /// `bodies` is parallel to `registry.all()`.
    pub fn write_intermediates(
        &self,
        registry: &FormatterRegistry,
        bodies: &[String],
    ) -> Result<(), ChangelogError> {
        std::fs::create_dir_all(&self.dir).map_err(ChangelogError::Io)?;

        for (formatter, body) in registry.all().iter().zip(bodies) {
            let path = self.intermediate_path(formatter.extension());
            std::fs::write(&path, body).map_err(|e| {
                ChangelogError::WriteFailed(format!("{}: {}", path.display(), e))
            })?;
            debug!(path = %path.display(), bytes = body.len(), "intermediate written");
        }

        Ok(())
    }

    /// Assemble the final files from the intermediates.
    ///
    /// A zero commit count yields the placeholder body in every flavor; the
    /// HTML flavor's post-processing pass applies either way.
    pub fn write_finals(
        &self,
        registry: &FormatterRegistry,
        commit_count: usize,
    ) -> Result<Vec<PathBuf>, ChangelogError> {
        let mut outputs = Vec::with_capacity(registry.all().len());

        for formatter in registry.all() {
            let body = if commit_count == 0 {
                self.placeholder.clone()
            } else {
                let path = self.intermediate_path(formatter.extension());
                std::fs::read_to_string(&path).map_err(ChangelogError::Io)?
            };

            let body = formatter.finalize(&body);
            let path = self.final_path(formatter.extension());
            std::fs::write(&path, &body).map_err(|e| {
                ChangelogError::WriteFailed(format!("{}: {}", path.display(), e))
            })?;

            info!(path = %path.display(), bytes = body.len(), "changelog written");
            outputs.push(path);
        }

        Ok(outputs)
    }
}
