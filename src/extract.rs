//! Template name and body extraction.
//!
//! The lenient functions never fail: a template without usable
//! front-matter is named after its file, and an unreadable template has an
//! empty body. The `try_` variants report why.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use crate::error::{Result, TemplateError};
use crate::frontmatter::{parse_meta, split_frontmatter};

/// Display name of the template at `path`.
///
/// Uses the front-matter `name` when present and non-empty, otherwise the
/// file name (with extension).
pub fn extract_name(path: &Path) -> String {
    match fs::read(path) {
        Ok(contents) => name_or_base(path, &contents),
        Err(e) => {
            tracing::debug!(
                "Using file name for template: {}",
                TemplateError::read(path, e)
            );
            base_name(path).into_owned()
        }
    }
}

/// Front-matter `name` of the template at `path`, if it declares one.
pub fn try_extract_name(path: &Path) -> Result<Option<String>> {
    let contents = fs::read(path).map_err(|e| TemplateError::read(path, e))?;
    name_from_contents(path, &contents)
}

/// Body of the template at `path` with any leading front-matter removed.
///
/// Returns an empty body if the file cannot be read.
pub fn extract_contents(path: &Path) -> Vec<u8> {
    try_extract_contents(path).unwrap_or_else(|e| {
        tracing::debug!("Treating template as empty: {}", e);
        Vec::new()
    })
}

/// Body of the template at `path` with any leading front-matter removed.
pub fn try_extract_contents(path: &Path) -> Result<Vec<u8>> {
    let contents = fs::read(path).map_err(|e| TemplateError::read(path, e))?;
    Ok(strip_frontmatter(contents))
}

pub(crate) fn name_from_contents(path: &Path, contents: &[u8]) -> Result<Option<String>> {
    let Some((yaml, _)) = split_frontmatter(contents) else {
        return Ok(None);
    };

    let meta = parse_meta(yaml).map_err(|e| TemplateError::FrontmatterParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    Ok(meta.name.filter(|name| !name.is_empty()))
}

/// Front-matter name from already-read `contents`, falling back to the
/// file name.
pub(crate) fn name_or_base(path: &Path, contents: &[u8]) -> String {
    match name_from_contents(path, contents) {
        Ok(Some(name)) => name,
        Ok(None) => base_name(path).into_owned(),
        Err(e) => {
            tracing::debug!("Using file name for template: {}", e);
            base_name(path).into_owned()
        }
    }
}

pub(crate) fn strip_frontmatter(contents: Vec<u8>) -> Vec<u8> {
    match split_frontmatter(&contents) {
        Some((_, body)) => body.to_vec(),
        None => contents,
    }
}

/// Final path component, or the whole path when it has none.
pub(crate) fn base_name(path: &Path) -> Cow<'_, str> {
    match path.file_name() {
        Some(name) => name.to_string_lossy(),
        None => path.to_string_lossy(),
    }
}
