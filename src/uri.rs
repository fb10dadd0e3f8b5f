//! Resource locator parsing: scheme prefix splitting and S3 bucket/key
//! extraction.

use crate::error::{Error, Result};

/// A parsed resource locator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Uri<'a> {
    /// The locator exactly as the caller gave it.
    pub raw: &'a str,
    /// Scheme prefix, when the locator has one.
    pub scheme: Option<&'a str>,
    /// Remainder after the scheme prefix (the whole locator when absent).
    pub path: &'a str,
}

impl<'a> Uri<'a> {
    /// Parse a locator. A locator with no recognizable scheme prefix has no
    /// scheme and is treated as a local filesystem path by the registry.
    pub fn parse(raw: &'a str) -> Self {
        let (scheme, path) = split_uri(raw);
        Uri { raw, scheme, path }
    }
}

/// Split a locator into scheme and remainder at the first `://`.
pub fn split_uri(uri: &str) -> (Option<&str>, &str) {
    match uri.find("://") {
        Some(i) => (Some(&uri[..i]), &uri[i + 3..]),
        None => (None, uri),
    }
}

/// Parse an object-store remainder (`bucket/key/to/object`) into bucket and
/// key. Both parts must be non-empty.
pub fn parse_object_path<'a>(uri: &Uri<'a>) -> Result<(&'a str, &'a str)> {
    match uri.path.split_once('/') {
        Some((bucket, key)) if !bucket.is_empty() && !key.is_empty() => Ok((bucket, key)),
        _ => Err(Error::Transport {
            uri: uri.raw.to_string(),
            status: None,
            detail: "expected bucket/key after the scheme prefix".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_local_path() {
        let uri = Uri::parse("/data/file.csv");
        assert_eq!(uri.scheme, None);
        assert_eq!(uri.path, "/data/file.csv");
    }

    #[test]
    fn test_parse_file_prefix() {
        let uri = Uri::parse("file:///data/file.csv");
        assert_eq!(uri.scheme, Some("file"));
        assert_eq!(uri.path, "/data/file.csv");
    }

    #[test]
    fn test_parse_https_url() {
        let uri = Uri::parse("https://example.com/data.csv");
        assert_eq!(uri.scheme, Some("https"));
        assert_eq!(uri.path, "example.com/data.csv");
        assert_eq!(uri.raw, "https://example.com/data.csv");
    }

    #[test]
    fn test_parse_object_path_valid() {
        let uri = Uri::parse("s3://my-bucket/path/to/file.csv");
        let (bucket, key) = parse_object_path(&uri).unwrap();
        assert_eq!(bucket, "my-bucket");
        assert_eq!(key, "path/to/file.csv");
    }

    #[test]
    fn test_parse_object_path_no_key() {
        let uri = Uri::parse("s3://my-bucket");
        assert!(parse_object_path(&uri).is_err());
    }

    #[test]
    fn test_parse_object_path_empty_key() {
        let uri = Uri::parse("s3://my-bucket/");
        assert!(parse_object_path(&uri).is_err());
    }

    #[test]
    fn test_split_relative_path_with_colon() {
        // No "://", so the whole string is the path
        let (scheme, path) = split_uri("data:file.csv");
        assert_eq!(scheme, None);
        assert_eq!(path, "data:file.csv");
    }
}
