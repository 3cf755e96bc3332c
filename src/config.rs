//! Locator configuration.
//!
//! The defaults reproduce GitHub's template lookup: `.github/`, then the
//! repository root, then `docs/`, considering only `.md` files.
//!
//! A host tool can embed [`LocatorConfig`] in its own YAML config:
//!
//! ```
//! use ghtemplate::LocatorConfig;
//!
//! let config = LocatorConfig::from_yaml("search_dirs: [.github, docs]").unwrap();
//! assert_eq!(config.search_dirs, vec![".github", "docs"]);
//! assert_eq!(config.extension, "md");
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TemplateError};

/// Where and how templates are searched for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LocatorConfig {
    /// Candidate directories relative to the repository root, in priority
    /// order. An empty string is the root itself.
    pub search_dirs: Vec<String>,

    /// Template file extension, without the leading dot
    pub extension: String,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            search_dirs: vec![".github".to_string(), String::new(), "docs".to_string()],
            extension: "md".to_string(),
        }
    }
}

impl LocatorConfig {
    /// Parse configuration from YAML. Missing fields take their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| TemplateError::Config {
            message: e.to_string(),
        })
    }

    /// Candidate directories under `root`, in priority order.
    pub fn candidate_dirs(&self, root: &Path) -> Vec<PathBuf> {
        self.search_dirs
            .iter()
            .map(|dir| {
                if dir.is_empty() {
                    root.to_path_buf()
                } else {
                    root.join(dir)
                }
            })
            .collect()
    }

    /// File suffix including the leading dot, e.g. `.md`.
    pub fn suffix(&self) -> String {
        format!(".{}", self.extension)
    }
}
