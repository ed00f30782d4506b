//! URL normalization into canonical dedup keys.
//!
//! A key has the form `scheme://host<path>[?<names>]` where `<names>` are the
//! distinct query parameter names, sorted and joined by `&`. Two lines with the
//! same key are duplicates no matter how they were spelled.
//!
//! The steps run in a fixed order (see [`canonical_key`]): extension filtering
//! sees the path before any rewriting, the trailing slash is stripped before
//! placeholder substitution, and the query-string filter looks at the parsed
//! parameters rather than the finished key.

mod lang;
mod parse;
mod path;
mod query;

pub use lang::BUILTIN_LANGUAGE_CODES;
pub use parse::ParsedUrl;
pub use path::{replace_guids_and_integers, replace_language_segment, strip_trailing_slash};
pub use query::sorted_key_names;

use crate::config::NormalizeConfig;
use crate::filter;

pub const GUID_PLACEHOLDER: &str = "{guid}";
pub const INT_PLACEHOLDER: &str = "{int}";
pub const LANG_PLACEHOLDER: &str = "{lang}";

/// Why a line produced no key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Exclusion {
    /// Not an absolute URL with a host.
    Unparseable,
    /// Rejected by the match/filter extension policy.
    Extension,
    /// Rejected by the similar-URL filter.
    Similar,
    /// No query parameters while query-string-only is set.
    NoQuery,
}

/// Compute the canonical key for `raw`, or the reason it is excluded.
pub fn canonical_key(raw: &str, config: &NormalizeConfig) -> Result<String, Exclusion> {
    let parsed = ParsedUrl::parse(raw).ok_or(Exclusion::Unparseable)?;

    if !filter::extension_allowed(&parsed.path, config) {
        return Err(Exclusion::Extension);
    }
    if !filter::similar_allowed(&parsed.path, config) {
        return Err(Exclusion::Similar);
    }

    let mut path = strip_trailing_slash(&parsed.path).to_string();
    if config.regex_normalize() {
        path = replace_guids_and_integers(&path);
    }
    if config.lang_country_normalize() {
        path = replace_language_segment(&path, config.language_codes());
    }

    if !filter::query_allowed(parsed.query.len(), config) {
        return Err(Exclusion::NoQuery);
    }

    let mut key = format!("{}://{}{}", parsed.scheme, parsed.host, path);
    if !parsed.query.is_empty() {
        key.push('?');
        key.push_str(&sorted_key_names(&parsed.query));
    }
    Ok(key)
}

/// Canonical key for `raw`, or `None` when any filter or the parser rejects it.
pub fn normalize(raw: &str, config: &NormalizeConfig) -> Option<String> {
    canonical_key(raw, config).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(raw: &str) -> Option<String> {
        normalize(raw, &NormalizeConfig::default())
    }

    #[test]
    fn plain_key_shape() {
        assert_eq!(key("http://a.com/x").as_deref(), Some("http://a.com/x"));
        assert_eq!(key("http://a.com").as_deref(), Some("http://a.com/"));
        assert_eq!(key("http://a.com/x/").as_deref(), Some("http://a.com/x"));
    }

    #[test]
    fn query_values_and_order_ignored() {
        assert_eq!(key("http://a.com/x?b=2&a=1"), key("http://a.com/x?a=9&b=8"));
        assert_eq!(key("http://a.com/x?b=2&a=1").as_deref(), Some("http://a.com/x?a&b"));
        assert_ne!(key("http://a.com/x?a=1"), key("http://a.com/x?a=1&c=2"));
    }

    #[test]
    fn fragment_and_default_ports_ignored() {
        assert_eq!(key("https://a.com:443/x#top"), key("https://a.com/x"));
        assert_eq!(key("http://a.com:80/x"), key("http://a.com/x"));
        assert_ne!(key("http://a.com:8080/x"), key("http://a.com/x"));
    }

    #[test]
    fn scheme_is_part_of_key() {
        assert_ne!(key("http://a.com/x"), key("https://a.com/x"));
    }

    #[test]
    fn unparseable_is_excluded() {
        let cfg = NormalizeConfig::default();
        assert_eq!(canonical_key("::::", &cfg), Err(Exclusion::Unparseable));
        assert_eq!(canonical_key("a.com/x", &cfg), Err(Exclusion::Unparseable));
    }

    #[test]
    fn regex_normalize_applies_to_path_only() {
        let cfg = NormalizeConfig::default().with_regex_normalize(true);
        assert_eq!(
            normalize("http://a.com/page/42/?id=7", &cfg).as_deref(),
            Some("http://a.com/page/{int}?id")
        );
        assert_eq!(
            normalize("http://a.com/u/123e4567-e89b-12d3-a456-426614174000", &cfg).as_deref(),
            Some("http://a.com/u/{guid}")
        );
        // Host digits are untouched.
        assert_eq!(
            normalize("http://10.0.0.1/a/5", &cfg).as_deref(),
            Some("http://10.0.0.1/a/{int}")
        );
    }

    #[test]
    fn regex_normalize_ignores_percent_escape_digits() {
        let cfg = NormalizeConfig::default().with_regex_normalize(true);
        let space = normalize("http://a.com/x%20/y", &cfg);
        let quote = normalize("http://a.com/x%22/y", &cfg);
        assert_ne!(space, quote);
        assert_eq!(space.as_deref(), Some("http://a.com/x /y"));
        assert_eq!(
            normalize("http://a.com/p/%31%32", &cfg).as_deref(),
            Some("http://a.com/p/{int}")
        );
    }

    #[test]
    fn explicit_ftp_port_stays_in_key() {
        assert_eq!(key("ftp://a.com:21/x").as_deref(), Some("ftp://a.com:21/x"));
        assert_ne!(key("ftp://a.com:21/x"), key("ftp://a.com/x"));
    }

    #[test]
    fn lang_normalize_uses_configured_codes() {
        let cfg = NormalizeConfig::default().with_lang_country_normalize(true);
        assert_eq!(
            normalize("http://a.com/en-US/home/", &cfg).as_deref(),
            Some("http://a.com/{lang}/home")
        );

        let custom = cfg.with_language_codes(&["xx"]);
        assert_eq!(
            normalize("http://a.com/en/home", &custom).as_deref(),
            Some("http://a.com/en/home")
        );
        assert_eq!(
            normalize("http://a.com/xx/home", &custom).as_deref(),
            Some("http://a.com/{lang}/home")
        );
    }

    #[test]
    fn lang_codes_ignored_when_disabled() {
        let cfg = NormalizeConfig::default();
        assert_ne!(
            normalize("http://a.com/en/home", &cfg),
            normalize("http://a.com/fr/home", &cfg)
        );
    }

    #[test]
    fn extension_filter_sees_unrewritten_path() {
        // The trailing slash is stripped after extension checks, so `/img.png/`
        // does not end in `.png` and survives the filter.
        let cfg = NormalizeConfig::default().with_filter_extensions(&["png"]);
        assert_eq!(
            canonical_key("http://a.com/img.png", &cfg),
            Err(Exclusion::Extension)
        );
        assert!(normalize("http://a.com/img.png/", &cfg).is_some());
        assert!(normalize("http://a.com/img.PNG?x=1", &cfg).is_none());
        assert_eq!(
            canonical_key("http://a.com/img.pn%67", &cfg),
            Err(Exclusion::Extension)
        );
    }

    #[test]
    fn query_string_only_checks_parameters() {
        let cfg = NormalizeConfig::default().with_query_string_only(true);
        assert_eq!(canonical_key("http://a.com/x", &cfg), Err(Exclusion::NoQuery));
        assert_eq!(canonical_key("http://a.com/x?", &cfg), Err(Exclusion::NoQuery));
        assert_eq!(
            normalize("http://a.com/x?q", &cfg).as_deref(),
            Some("http://a.com/x?q")
        );
    }

    #[test]
    fn similar_filter() {
        let cfg = NormalizeConfig::default().with_similar(true);
        assert_eq!(canonical_key("http://a.com/p/3", &cfg), Err(Exclusion::Similar));
        assert_eq!(canonical_key("http://a.com/logo.svg", &cfg), Err(Exclusion::Similar));
        assert!(normalize("http://a.com/about", &cfg).is_some());
    }
}
