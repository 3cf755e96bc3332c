//! ghtemplate - locate and parse GitHub issue and pull request templates.
//!
//! Repositories provide templates either as a directory of files
//! (`.github/ISSUE_TEMPLATE/*.md`) or as a single legacy file
//! (`.github/PULL_REQUEST_TEMPLATE.md`). Both layouts are searched in
//! `.github/`, the repository root, and `docs/`, in that order.
//!
//! # Modules
//!
//! - [`config`] - Search directories and template extension
//! - [`error`] - Error types and result aliases
//! - [`extract`] - Template names and bodies
//! - [`frontmatter`] - YAML front-matter detection and parsing
//! - [`handler`] - All operations behind one [`TemplateHandler`]
//! - [`locator`] - Template file discovery
//! - [`template`] - Template families and loaded templates
//!
//! # Example
//!
//! ```
//! use ghtemplate::frontmatter::split_frontmatter;
//!
//! let contents = b"---\nname: Bug Report\n---\nBody text here\n";
//! let (yaml, body) = split_frontmatter(contents).unwrap();
//! assert_eq!(yaml, b"name: Bug Report\n");
//! assert_eq!(body, b"Body text here\n");
//! ```
//!
//! For file-based discovery, see the integration tests.

use std::path::{Path, PathBuf};

pub mod config;
pub mod error;
pub mod extract;
pub mod frontmatter;
pub mod handler;
pub mod locator;
pub mod template;

pub use config::LocatorConfig;
pub use error::{Result, TemplateError};
pub use extract::{extract_contents, extract_name, try_extract_contents, try_extract_name};
pub use frontmatter::{detect_frontmatter, frontmatter_boundaries, Frontmatter, TemplateMeta};
pub use handler::TemplateHandler;
pub use template::{Discovery, Template, TemplateFamily};

/// Template files in the family subdirectory of the first candidate
/// directory that has any, sorted.
pub fn find_non_legacy(root: &Path, family: impl AsRef<str>) -> Vec<PathBuf> {
    locator::find_non_legacy(&LocatorConfig::default(), root, family.as_ref())
}

/// The first `<family>.md` file across the candidate directories.
pub fn find_legacy(root: &Path, family: impl AsRef<str>) -> Option<PathBuf> {
    locator::find_legacy(&LocatorConfig::default(), root, family.as_ref())
}
