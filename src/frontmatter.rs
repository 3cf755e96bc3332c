//! YAML front-matter detection and parsing.
//!
//! Front-matter is a YAML block at the very start of a template, delimited
//! by two `---` lines:
//!
//! ```text
//! ---
//! name: Bug Report
//! ---
//! Body text here
//! ```
//!
//! Each delimiter may be followed by one blank line, which is treated as
//! part of the delimiter. A file with fewer than two delimiter lines has
//! no front-matter.

use std::ops::Range;
use std::sync::LazyLock;

use regex::bytes::Regex;
use serde::Deserialize;

/// Regex for a front-matter delimiter line plus an optional blank line.
///
/// Blank means ASCII whitespace only; other Unicode spaces are body text.
static DELIMITER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^---\r?\n([\t\n\f\r ]*\r?\n)?").expect("DELIMITER_REGEX must compile")
});

/// Location of a front-matter block within raw file contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frontmatter {
    /// Whole block, from the start of the opening delimiter to the end of
    /// the closing delimiter.
    pub span: Range<usize>,
    /// YAML between the two delimiters.
    pub yaml: Range<usize>,
}

impl Frontmatter {
    /// Whether the block starts at offset 0.
    ///
    /// Only a leading block counts as front-matter for templates; a pair of
    /// `---` lines further down is ordinary Markdown.
    pub fn is_leading(&self) -> bool {
        self.span.start == 0
    }
}

/// Metadata read from a template's front-matter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TemplateMeta {
    /// Display name of the template
    #[serde(default, alias = "Name")]
    pub name: Option<String>,
}

/// Find the first two delimiter lines in `contents`.
///
/// Returns `None` when fewer than two delimiters are present. The block is
/// reported wherever it occurs; use [`Frontmatter::is_leading`] to check
/// that it starts the file.
pub fn detect_frontmatter(contents: &[u8]) -> Option<Frontmatter> {
    let mut delimiters = DELIMITER_REGEX.find_iter(contents);
    let open = delimiters.next()?;
    let close = delimiters.next()?;

    Some(Frontmatter {
        span: open.start()..close.end(),
        yaml: open.end()..close.start(),
    })
}

/// Front-matter boundaries as a `(start, end)` pair, or `(-1, -1)` when
/// there is none.
pub fn frontmatter_boundaries(contents: &[u8]) -> (isize, isize) {
    match detect_frontmatter(contents) {
        Some(fm) => (fm.span.start as isize, fm.span.end as isize),
        None => (-1, -1),
    }
}

/// Split `contents` into leading front-matter YAML and the remaining body.
///
/// Returns `None` if the file does not start with a front-matter block.
pub fn split_frontmatter(contents: &[u8]) -> Option<(&[u8], &[u8])> {
    let fm = detect_frontmatter(contents).filter(Frontmatter::is_leading)?;
    Some((&contents[fm.yaml], &contents[fm.span.end..]))
}

/// Parse front-matter YAML into [`TemplateMeta`].
///
/// An empty block yields default metadata.
pub fn parse_meta(yaml: &[u8]) -> Result<TemplateMeta, serde_yaml::Error> {
    if yaml.iter().all(u8::is_ascii_whitespace) {
        return Ok(TemplateMeta::default());
    }
    serde_yaml::from_slice(yaml)
}
