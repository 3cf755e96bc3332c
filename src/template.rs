//! Template families and loaded templates.

use std::borrow::Cow;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::TemplateError;
use crate::extract::{base_name, name_or_base, strip_frontmatter};

/// Kind of template a repository can provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateFamily {
    /// Issue templates (`ISSUE_TEMPLATE`)
    Issue,
    /// Pull request templates (`PULL_REQUEST_TEMPLATE`)
    PullRequest,
}

impl TemplateFamily {
    /// Directory / file stem used for this family.
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateFamily::Issue => "ISSUE_TEMPLATE",
            TemplateFamily::PullRequest => "PULL_REQUEST_TEMPLATE",
        }
    }
}

impl AsRef<str> for TemplateFamily {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TemplateFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TemplateFamily {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "issue_template" | "issue" => Ok(TemplateFamily::Issue),
            "pull_request_template" | "pull_request" | "pr" => Ok(TemplateFamily::PullRequest),
            _ => Err(TemplateError::UnknownFamily {
                name: s.to_string(),
            }),
        }
    }
}

/// A template file read from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    /// Location of the template file
    pub path: PathBuf,

    /// Front-matter `name`, or the file name when there is none
    pub name: String,

    /// Contents with front-matter removed
    pub body: Vec<u8>,
}

impl Template {
    /// Read the template at `path`.
    ///
    /// Never fails: an unreadable file gives a template named after the
    /// file with an empty body.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();

        let contents = match fs::read(&path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::debug!("Failed to read template {}: {}", path.display(), e);
                let name = base_name(&path).into_owned();
                return Self {
                    path,
                    name,
                    body: Vec::new(),
                };
            }
        };

        let name = name_or_base(&path, &contents);

        Self {
            path,
            name,
            body: strip_frontmatter(contents),
        }
    }

    /// Body as text, replacing invalid UTF-8.
    pub fn body_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// File name of the template (with extension).
    pub fn file_name(&self) -> Cow<'_, str> {
        base_name(&self.path)
    }

    /// Whether the template path is inside `dir`.
    pub fn is_in(&self, dir: &Path) -> bool {
        self.path.starts_with(dir)
    }
}

/// Templates a repository offers for one family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Discovery {
    /// One or more templates from a family subdirectory
    Multiple(Vec<Template>),
    /// A single legacy `<family>.md` template
    Legacy(Template),
    /// No templates
    Empty,
}

impl Discovery {
    /// All discovered templates, in order.
    pub fn templates(&self) -> &[Template] {
        match self {
            Discovery::Multiple(templates) => templates,
            Discovery::Legacy(template) => std::slice::from_ref(template),
            Discovery::Empty => &[],
        }
    }

    /// Whether nothing was found.
    pub fn is_empty(&self) -> bool {
        matches!(self, Discovery::Empty)
    }

    /// Whether the user has to pick between several templates.
    pub fn needs_choice(&self) -> bool {
        matches!(self, Discovery::Multiple(templates) if templates.len() > 1)
    }
}
