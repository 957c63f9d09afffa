//! Path composition for library assets.
//!
//! Pure string/path manipulation; nothing here touches the filesystem.

use std::path::{Path, PathBuf, MAIN_SEPARATOR_STR};
use std::sync::OnceLock;

use regex_lite::Regex;

use crate::config::CONFIGURATION_TOKEN;
use crate::types::AssetEntry;

/// Runs of either separator style.
fn separator_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[\\/]+").expect("separator pattern is valid"))
}

/// Rewrite `/` and `\` (and runs of them) to the platform separator.
pub fn normalize_separators(path: &str) -> String {
    separator_pattern()
        .replace_all(path, MAIN_SEPARATOR_STR)
        .into_owned()
}

/// Join a relative path, in either separator style, onto `root`.
pub fn compose(root: &Path, relative: &str) -> PathBuf {
    root.join(normalize_separators(relative))
}

/// Compose the absolute path of a package asset.
///
/// Returns `None` for placeholder entries.
pub fn compose_asset(root: &Path, asset: &AssetEntry) -> Option<PathBuf> {
    if asset.placeholder {
        return None;
    }
    Some(compose(root, &asset.path))
}

/// Resolve a pre-built binary template against the project root.
///
/// `{configuration}` is replaced with `configuration`. An absent or empty
/// template yields `None`. Absolute templates are returned as-is.
pub fn compose_template(
    project_root: &Path,
    template: Option<&str>,
    configuration: &str,
) -> Option<PathBuf> {
    let template = template.filter(|t| !t.is_empty())?;
    let expanded = template.replace(CONFIGURATION_TOKEN, configuration);
    Some(compose(project_root, &expanded))
}

/// Whether a package-relative file lives under the `folder` segment.
///
/// Matches `folder/...` in either separator style; the segment match is
/// case-sensitive.
pub fn is_under_folder(relative: &str, folder: &str) -> bool {
    let normalized = separator_pattern().replace_all(relative, "/");
    normalized
        .strip_prefix(folder)
        .is_some_and(|rest| rest.starts_with('/'))
}
