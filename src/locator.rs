//! Template file discovery in a repository checkout.
//!
//! Two layouts are recognised, each searched across the candidate
//! directories from [`LocatorConfig`] in priority order:
//!
//! - **Multiple templates**: a subdirectory named after the family (e.g.
//!   `.github/ISSUE_TEMPLATE/`) holding one `.md` file per template
//! - **Legacy template**: a single `<family>.md` file (e.g.
//!   `.github/PULL_REQUEST_TEMPLATE.md`)
//!
//! Family names are compared case-insensitively. Directories that cannot
//! be read are skipped.

use std::ffi::OsStr;
use std::fs::{self, DirEntry};
use std::io;
use std::path::{Path, PathBuf};

use crate::config::LocatorConfig;

/// Find templates stored as separate files in a family subdirectory.
///
/// The first candidate directory whose family subdirectory holds at least
/// one template wins; later candidates are not consulted. Results are
/// sorted.
///
/// Only files count as templates: a subdirectory whose name ends in `.md`
/// is skipped.
pub fn find_non_legacy(config: &LocatorConfig, root: &Path, family: &str) -> Vec<PathBuf> {
    let suffix = config.suffix();
    let mut results = Vec::new();

    for dir in config.candidate_dirs(root) {
        let Some(entries) = read_dir_sorted(&dir) else {
            continue;
        };

        let Some(family_dir) = entries
            .iter()
            .find(|e| names_match(&e.file_name(), family) && is_dir(e))
        else {
            continue;
        };

        let family_dir = family_dir.path();
        let Some(templates) = read_dir_sorted(&family_dir) else {
            continue;
        };

        results.extend(
            templates
                .iter()
                .filter(|e| !is_dir(e) && has_suffix(&e.file_name(), &suffix))
                .map(DirEntry::path),
        );

        if !results.is_empty() {
            tracing::trace!(
                "Found {} template(s) in {}",
                results.len(),
                family_dir.display()
            );
            break;
        }
    }

    results.sort();
    results
}

/// Find a single `<family>.md` template file.
///
/// Returns the first match across the candidate directories. A directory
/// named `<family>.md` is not a match.
pub fn find_legacy(config: &LocatorConfig, root: &Path, family: &str) -> Option<PathBuf> {
    let file_name = format!("{}{}", family, config.suffix());

    for dir in config.candidate_dirs(root) {
        let Some(entries) = read_dir_sorted(&dir) else {
            continue;
        };

        if let Some(entry) = entries
            .iter()
            .find(|e| names_match(&e.file_name(), &file_name) && !is_dir(e))
        {
            let path = entry.path();
            tracing::trace!("Found legacy template {}", path.display());
            return Some(path);
        }
    }

    None
}

/// Directory entries ordered by file name, or `None` if unreadable.
fn read_dir_sorted(dir: &Path) -> Option<Vec<DirEntry>> {
    let read = || -> io::Result<Vec<DirEntry>> {
        let mut entries = fs::read_dir(dir)?.collect::<io::Result<Vec<_>>>()?;
        entries.sort_by_key(DirEntry::file_name);
        Ok(entries)
    };

    match read() {
        Ok(entries) => Some(entries),
        Err(e) => {
            tracing::debug!("Skipping template directory {}: {}", dir.display(), e);
            None
        }
    }
}

fn names_match(file_name: &OsStr, expected: &str) -> bool {
    file_name
        .to_str()
        .is_some_and(|name| name.to_lowercase() == expected.to_lowercase())
}

fn has_suffix(file_name: &OsStr, suffix: &str) -> bool {
    file_name
        .to_str()
        .is_some_and(|name| name.ends_with(suffix))
}

/// Symlinks are not followed.
fn is_dir(entry: &DirEntry) -> bool {
    entry.file_type().map(|t| t.is_dir()).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "template").unwrap();
    }

    #[test]
    fn non_legacy_empty_without_templates() {
        let temp = TempDir::new().unwrap();
        let found = find_non_legacy(&LocatorConfig::default(), temp.path(), "ISSUE_TEMPLATE");
        assert!(found.is_empty());
    }

    #[test]
    fn non_legacy_missing_root_is_empty() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("does-not-exist");
        assert!(find_non_legacy(&LocatorConfig::default(), &root, "ISSUE_TEMPLATE").is_empty());
    }

    #[test]
    fn non_legacy_finds_sorted_templates() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".github").join("ISSUE_TEMPLATE");
        touch(&dir.join("b.md"));
        touch(&dir.join("a.md"));

        let found = find_non_legacy(&LocatorConfig::default(), temp.path(), "ISSUE_TEMPLATE");
        assert_eq!(found, vec![dir.join("a.md"), dir.join("b.md")]);
    }

    #[test]
    fn non_legacy_ignores_other_extensions() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".github").join("ISSUE_TEMPLATE");
        touch(&dir.join("bug.md"));
        touch(&dir.join("config.yml"));
        touch(&dir.join("notes.MD"));

        let found = find_non_legacy(&LocatorConfig::default(), temp.path(), "ISSUE_TEMPLATE");
        assert_eq!(found, vec![dir.join("bug.md")]);
    }

    #[test]
    fn non_legacy_ignores_nested_directories() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".github").join("ISSUE_TEMPLATE");
        touch(&dir.join("nested.md").join("inner.md"));
        touch(&dir.join("bug.md"));

        let found = find_non_legacy(&LocatorConfig::default(), temp.path(), "ISSUE_TEMPLATE");
        assert_eq!(found, vec![dir.join("bug.md")]);
    }

    #[test]
    fn non_legacy_first_directory_wins() {
        let temp = TempDir::new().unwrap();
        let github = temp.path().join(".github").join("ISSUE_TEMPLATE");
        let docs = temp.path().join("docs").join("ISSUE_TEMPLATE");
        touch(&github.join("bug.md"));
        touch(&docs.join("feature.md"));

        let found = find_non_legacy(&LocatorConfig::default(), temp.path(), "ISSUE_TEMPLATE");
        assert_eq!(found, vec![github.join("bug.md")]);
    }

    #[test]
    fn non_legacy_falls_through_empty_directory() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join(".github").join("ISSUE_TEMPLATE")).unwrap();
        let root_dir = temp.path().join("ISSUE_TEMPLATE");
        touch(&root_dir.join("bug.md"));

        let found = find_non_legacy(&LocatorConfig::default(), temp.path(), "ISSUE_TEMPLATE");
        assert_eq!(found, vec![root_dir.join("bug.md")]);
    }

    #[test]
    fn non_legacy_matches_family_case_insensitively() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("docs").join("issue_template");
        touch(&dir.join("bug.md"));

        let found = find_non_legacy(&LocatorConfig::default(), temp.path(), "ISSUE_TEMPLATE");
        assert_eq!(found, vec![dir.join("bug.md")]);
    }

    #[test]
    fn non_legacy_ignores_file_named_like_family() {
        let temp = TempDir::new().unwrap();
        touch(&temp.path().join(".github").join("ISSUE_TEMPLATE"));

        let found = find_non_legacy(&LocatorConfig::default(), temp.path(), "ISSUE_TEMPLATE");
        assert!(found.is_empty());
    }

    #[test]
    fn legacy_none_without_templates() {
        let temp = TempDir::new().unwrap();
        assert!(find_legacy(&LocatorConfig::default(), temp.path(), "ISSUE_TEMPLATE").is_none());
    }

    #[test]
    fn legacy_matches_case_insensitively() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".github").join("ISSUE_TEMPLATE.md");
        touch(&path);

        let found = find_legacy(&LocatorConfig::default(), temp.path(), "issue_template");
        assert_eq!(found, Some(path));
    }

    #[test]
    fn legacy_prefers_github_over_root_and_docs() {
        let temp = TempDir::new().unwrap();
        let github = temp.path().join(".github").join("PULL_REQUEST_TEMPLATE.md");
        touch(&github);
        touch(&temp.path().join("PULL_REQUEST_TEMPLATE.md"));
        touch(&temp.path().join("docs").join("PULL_REQUEST_TEMPLATE.md"));

        let found = find_legacy(&LocatorConfig::default(), temp.path(), "PULL_REQUEST_TEMPLATE");
        assert_eq!(found, Some(github));
    }

    #[test]
    fn legacy_found_in_docs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("docs").join("pull_request_template.md");
        touch(&path);

        let found = find_legacy(&LocatorConfig::default(), temp.path(), "PULL_REQUEST_TEMPLATE");
        assert_eq!(found, Some(path));
    }

    #[test]
    fn legacy_ignores_multi_template_directory() {
        let temp = TempDir::new().unwrap();
        touch(&temp.path().join(".github").join("ISSUE_TEMPLATE").join("bug.md"));

        assert!(find_legacy(&LocatorConfig::default(), temp.path(), "ISSUE_TEMPLATE").is_none());
    }

    #[test]
    fn legacy_ignores_directory_named_like_template() {
        let temp = TempDir::new().unwrap();
        touch(&temp.path().join(".github").join("ISSUE_TEMPLATE.md").join("x.md"));
        let path = temp.path().join("docs").join("ISSUE_TEMPLATE.md");
        touch(&path);

        let found = find_legacy(&LocatorConfig::default(), temp.path(), "ISSUE_TEMPLATE");
        assert_eq!(found, Some(path));
    }

    #[test]
    fn non_legacy_falls_through_to_docs() {
        let temp = TempDir::new().unwrap();
        touch(&temp.path().join("ISSUE_TEMPLATE").join("config.yml"));
        let docs = temp.path().join("docs").join("ISSUE_TEMPLATE");
        touch(&docs.join("bug.md"));

        let found = find_non_legacy(&LocatorConfig::default(), temp.path(), "ISSUE_TEMPLATE");
        assert_eq!(found, vec![docs.join("bug.md")]);
    }

    #[test]
    fn non_legacy_empty_when_last_candidate_is_empty() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join(".github").join("ISSUE_TEMPLATE")).unwrap();
        touch(&temp.path().join("ISSUE_TEMPLATE").join("notes.txt"));
        fs::create_dir_all(temp.path().join("docs").join("ISSUE_TEMPLATE")).unwrap();

        let found = find_non_legacy(&LocatorConfig::default(), temp.path(), "ISSUE_TEMPLATE");
        assert!(found.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn non_legacy_skips_unreadable_family_directory() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let root_dir = temp.path().join("ISSUE_TEMPLATE");
        touch(&root_dir.join("bug.md"));
        let docs = temp.path().join("docs").join("ISSUE_TEMPLATE");
        touch(&docs.join("feature.md"));
        fs::set_permissions(&root_dir, fs::Permissions::from_mode(0o000)).unwrap();

        // Privileged users can still list the directory
        let readable = fs::read_dir(&root_dir).is_ok();
        let found = find_non_legacy(&LocatorConfig::default(), temp.path(), "ISSUE_TEMPLATE");
        fs::set_permissions(&root_dir, fs::Permissions::from_mode(0o755)).unwrap();

        if readable {
            assert_eq!(found, vec![root_dir.join("bug.md")]);
        } else {
            assert_eq!(found, vec![docs.join("feature.md")]);
        }
    }

    #[test]
    fn custom_search_dirs_are_respected() {
        let temp = TempDir::new().unwrap();
        touch(&temp.path().join(".github").join("ISSUE_TEMPLATE.md"));
        let path = temp.path().join(".gitea").join("ISSUE_TEMPLATE.md");
        touch(&path);

        let config = LocatorConfig {
            search_dirs: vec![".gitea".to_string()],
            ..Default::default()
        };
        assert_eq!(find_legacy(&config, temp.path(), "ISSUE_TEMPLATE"), Some(path));
    }
}
