//! Include/exclude predicates.
//!
//! Each predicate is pure and takes only the piece of the URL it inspects plus
//! the run config. They return `true` when the URL may stay.

use std::collections::BTreeSet;

use crate::config::{NormalizeConfig, MEDIA_EXTENSIONS};

fn ends_with_extension(path: &str, exts: &BTreeSet<String>) -> bool {
    let lower = path.to_ascii_lowercase();
    let bytes = lower.as_bytes();
    exts.iter().any(|ext| {
        lower.len() > ext.len()
            && lower.ends_with(ext.as_str())
            && bytes[lower.len() - ext.len() - 1] == b'.'
    })
}

/// Extension policy on the un-rewritten path.
///
/// A non-empty match list is the only policy applied; otherwise the filter list
/// is applied; with neither, everything passes.
pub fn extension_allowed(path: &str, config: &NormalizeConfig) -> bool {
    let matches = config.match_extensions();
    if !matches.is_empty() {
        return ends_with_extension(path, matches);
    }
    let filters = config.filter_extensions();
    filters.is_empty() || !ends_with_extension(path, filters)
}

/// Query-string-only policy, given the number of parsed query parameters.
pub fn query_allowed(param_count: usize, config: &NormalizeConfig) -> bool {
    !config.query_string_only() || param_count > 0
}

/// True for paths that carry any digit or end in an image/font extension.
pub fn looks_similar(path: &str) -> bool {
    if path.bytes().any(|b| b.is_ascii_digit()) {
        return true;
    }
    let lower = path.to_ascii_lowercase();
    MEDIA_EXTENSIONS
        .iter()
        .any(|ext| lower.strip_suffix(ext).is_some_and(|rest| rest.ends_with('.')))
}

/// Similar-URL policy.
pub fn similar_allowed(path: &str, config: &NormalizeConfig) -> bool {
    !config.similar() || !looks_similar(path)
}
