//! Deblog Git - Git plumbing for changelog generation
//!
//! This crate reads the repository's configuration store for the remote
//! origin URL and captures raw `git log` output as per-commit blocks.

mod config_file;
mod log;

pub use config_file::{browse_url, resolve_repo_url, GitConfigFile};
pub use log::{git_log, split_blocks, CommitBlock, LOG_ARGS};
