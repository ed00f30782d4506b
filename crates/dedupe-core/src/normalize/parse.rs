//! Raw line -> [`ParsedUrl`].

/// A URL split into the parts that take part in dedup keys.
///
/// The fragment is never kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUrl {
    pub scheme: String,
    /// Host, plus `:port` for any explicit port other than 80 or 443.
    pub host: String,
    /// Percent-decoded path.
    pub path: String,
    /// Decoded query parameters in the order they appear.
    pub query: Vec<(String, String)>,
}

impl ParsedUrl {
    /// Parse an absolute URL. Returns `None` for anything the `url` crate rejects
    /// and for host-less URLs such as `mailto:` or `data:`.
    pub fn parse(raw: &str) -> Option<Self> {
        let parsed = url::Url::parse(raw).ok()?;
        let host_str = parsed.host_str().filter(|h| !h.is_empty())?;

        let port = parsed.port().or_else(|| explicit_default_port(raw, &parsed));
        let host = match port {
            Some(80) | Some(443) | None => host_str.to_string(),
            Some(port) => format!("{host_str}:{port}"),
        };

        let query = parsed
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        Some(Self {
            scheme: parsed.scheme().to_string(),
            host,
            path: decode_path(parsed.path()),
            query,
        })
    }
}

/// `url` drops a port equal to the scheme's known default (`ftp://h:21`), so
/// recover it from the authority of the raw text.
fn explicit_default_port(raw: &str, parsed: &url::Url) -> Option<u16> {
    let default = parsed.port_or_known_default()?;
    let (_, rest) = raw.trim().split_once("://")?;
    let authority = rest.split(['/', '?', '#']).next()?;
    let host_port = authority.rsplit_once('@').map_or(authority, |(_, h)| h);
    let (_, port) = host_port.rsplit_once(':')?;
    (port.parse::<u16>().ok()? == default).then_some(default)
}

/// Invalid UTF-8 after decoding is replaced rather than rejected.
fn decode_path(encoded: &str) -> String {
    String::from_utf8_lossy(&urlencoding::decode_binary(encoded.as_bytes())).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_components() {
        let p = ParsedUrl::parse("https://Example.com/a/b?x=1&y=2#frag").unwrap();
        assert_eq!(p.scheme, "https");
        assert_eq!(p.host, "example.com");
        assert_eq!(p.path, "/a/b");
        assert_eq!(
            p.query,
            vec![("x".to_string(), "1".to_string()), ("y".to_string(), "2".to_string())]
        );
    }

    #[test]
    fn strips_ports_80_and_443_regardless_of_scheme() {
        assert_eq!(ParsedUrl::parse("http://a.com:80/").unwrap().host, "a.com");
        assert_eq!(ParsedUrl::parse("https://a.com:443/").unwrap().host, "a.com");
        assert_eq!(ParsedUrl::parse("https://a.com:80/").unwrap().host, "a.com");
        assert_eq!(ParsedUrl::parse("http://a.com:443/").unwrap().host, "a.com");
    }

    #[test]
    fn keeps_other_ports() {
        assert_eq!(
            ParsedUrl::parse("http://a.com:8080/x").unwrap().host,
            "a.com:8080"
        );
    }

    #[test]
    fn keeps_explicit_scheme_default_port_other_than_80_443() {
        assert_eq!(ParsedUrl::parse("ftp://a.com:21/x").unwrap().host, "a.com:21");
        assert_eq!(ParsedUrl::parse("ftp://user@a.com:21/x").unwrap().host, "a.com:21");
        assert_eq!(ParsedUrl::parse("ftp://a.com/x").unwrap().host, "a.com");
        assert_eq!(ParsedUrl::parse("ftp://a.com:80/x").unwrap().host, "a.com");
        assert_eq!(ParsedUrl::parse("http://[::1]:80/").unwrap().host, "[::1]");
    }

    #[test]
    fn path_is_percent_decoded() {
        assert_eq!(ParsedUrl::parse("http://a.com/x%20/y").unwrap().path, "/x /y");
        assert_eq!(ParsedUrl::parse("http://a.com/img.pn%67").unwrap().path, "/img.png");
        assert_eq!(ParsedUrl::parse("http://a.com/a+b").unwrap().path, "/a+b");
        assert_eq!(ParsedUrl::parse("http://a.com/%FF").unwrap().path, "/\u{FFFD}");
    }

    #[test]
    fn rejects_relative_and_hostless() {
        assert!(ParsedUrl::parse("example.com/path").is_none());
        assert!(ParsedUrl::parse("/just/a/path").is_none());
        assert!(ParsedUrl::parse("mailto:someone@example.com").is_none());
        assert!(ParsedUrl::parse("http://").is_none());
        assert!(ParsedUrl::parse("not a url").is_none());
    }

    #[test]
    fn repeated_query_keys_are_kept_in_order() {
        let p = ParsedUrl::parse("http://a.com/?b=1&a=2&b=3").unwrap();
        let keys: Vec<&str> = p.query.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["b", "a", "b"]);
    }
}
