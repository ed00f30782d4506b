//! Path rewriting: trailing slash, GUID/integer placeholders, language segment.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

use super::{GUID_PLACEHOLDER, INT_PLACEHOLDER, LANG_PLACEHOLDER};

static GUID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}")
        .expect("GUID pattern is valid")
});

static INT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[0-9]+\b").expect("integer pattern is valid"));

/// Drop one trailing `/`, except from the root path.
pub fn strip_trailing_slash(path: &str) -> &str {
    if path.len() > 1 && path.ends_with('/') {
        &path[..path.len() - 1]
    } else {
        path
    }
}

/// Replace every GUID, then every standalone integer, with placeholders.
///
/// GUIDs go first so their digit groups are not split into `{int}` runs.
pub fn replace_guids_and_integers(path: &str) -> String {
    let without_guids = GUID_RE.replace_all(path, GUID_PLACEHOLDER);
    INT_RE.replace_all(&without_guids, INT_PLACEHOLDER).into_owned()
}

/// Replace the leftmost segment whose lowercase form is in `codes`.
pub fn replace_language_segment(path: &str, codes: &BTreeSet<String>) -> String {
    let mut replaced = false;
    path.split('/')
        .map(|segment| {
            if !replaced && !segment.is_empty() && codes.contains(&segment.to_lowercase()) {
                replaced = true;
                LANG_PLACEHOLDER
            } else {
                segment
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}
