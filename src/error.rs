//! Error types for template discovery and parsing.
//!
//! This module defines [`TemplateError`] and a [`Result`] type alias.
//!
//! # Error Handling Strategy
//!
//! - The lenient operations (`find_*`, `extract_*`) never surface errors;
//!   they degrade to an empty or fallback result and log the reason
//! - The strict `try_*` operations return `TemplateError` so callers can
//!   tell a missing file from malformed front-matter

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for template operations.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template file could not be read.
    #[error("Failed to read template {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Front-matter block is present but is not a valid YAML mapping.
    #[error("Failed to parse front-matter in {path}: {message}")]
    FrontmatterParse { path: PathBuf, message: String },

    /// Family name is not one of the known template families.
    #[error("Unknown template family: {name}")]
    UnknownFamily { name: String },

    /// Locator configuration could not be parsed.
    #[error("Invalid locator configuration: {message}")]
    Config { message: String },
}

impl TemplateError {
    /// Wrap an IO error with the path that produced it.
    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TemplateError::Read {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for template operations.
pub type Result<T> = std::result::Result<T, TemplateError>;
