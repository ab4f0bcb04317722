//! Deblog Core - Core library for the deblog changelog generator
//!
//! This crate provides the foundational types, error handling, configuration,
//! and package metadata resolution for the deblog tool.

pub mod config;
pub mod error;
pub mod package;

pub use error::{DeblogError, Result};
pub use package::PackageInfo;
