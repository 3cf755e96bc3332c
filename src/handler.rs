//! The template handler: all template operations behind one value.

use std::path::{Path, PathBuf};

use crate::config::LocatorConfig;
use crate::error::Result;
use crate::template::{Discovery, Template};
use crate::{extract, locator};

/// Finds and reads issue / pull request templates.
///
/// # Example
///
/// ```no_run
/// use ghtemplate::{Discovery, TemplateFamily, TemplateHandler};
/// use std::path::Path;
///
/// let handler = TemplateHandler::default();
/// match handler.discover(Path::new("."), TemplateFamily::PullRequest) {
///     Discovery::Multiple(templates) => {
///         for t in &templates {
///             println!("{}", t.name);
///         }
///     }
///     Discovery::Legacy(t) => println!("{}", t.body_text()),
///     Discovery::Empty => println!("no templates"),
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct TemplateHandler {
    config: LocatorConfig,
}

impl TemplateHandler {
    /// Create a handler with a custom search configuration.
    pub fn new(config: LocatorConfig) -> Self {
        Self { config }
    }

    /// The search configuration in use.
    pub fn config(&self) -> &LocatorConfig {
        &self.config
    }

    /// Template files from the family subdirectory (e.g. `.github/ISSUE_TEMPLATE/*.md`).
    pub fn find_non_legacy(&self, root: &Path, family: impl AsRef<str>) -> Vec<PathBuf> {
        locator::find_non_legacy(&self.config, root, family.as_ref())
    }

    /// The single legacy template file (e.g. `.github/ISSUE_TEMPLATE.md`).
    pub fn find_legacy(&self, root: &Path, family: impl AsRef<str>) -> Option<PathBuf> {
        locator::find_legacy(&self.config, root, family.as_ref())
    }

    /// Display name from front-matter, falling back to the file name.
    pub fn extract_name(&self, path: &Path) -> String {
        extract::extract_name(path)
    }

    /// Front-matter name, reporting read and parse failures.
    pub fn try_extract_name(&self, path: &Path) -> Result<Option<String>> {
        extract::try_extract_name(path)
    }

    /// Contents without front-matter; empty if the file is unreadable.
    pub fn extract_contents(&self, path: &Path) -> Vec<u8> {
        extract::extract_contents(path)
    }

    /// Contents without front-matter, reporting read failures.
    pub fn try_extract_contents(&self, path: &Path) -> Result<Vec<u8>> {
        extract::try_extract_contents(path)
    }

    /// Read a template's name and body.
    pub fn load(&self, path: impl Into<PathBuf>) -> Template {
        Template::load(path)
    }

    /// Display names for `paths`, in the same order.
    pub fn template_names(&self, paths: &[PathBuf]) -> Vec<String> {
        paths.iter().map(|p| self.extract_name(p)).collect()
    }

    /// Templates the repository at `root` offers for `family`.
    ///
    /// Templates from a family subdirectory take precedence over a legacy
    /// template file.
    pub fn discover(&self, root: &Path, family: impl AsRef<str>) -> Discovery {
        let family = family.as_ref();

        let paths = self.find_non_legacy(root, family);
        if !paths.is_empty() {
            tracing::debug!("Discovered {} {} template(s)", paths.len(), family);
            return Discovery::Multiple(paths.into_iter().map(Template::load).collect());
        }

        match self.find_legacy(root, family) {
            Some(path) => {
                tracing::debug!("Discovered legacy {} at {}", family, path.display());
                Discovery::Legacy(Template::load(path))
            }
            None => {
                tracing::debug!("No {} templates under {}", family, root.display());
                Discovery::Empty
            }
        }
    }
}
