//! Scheme registry: resolves resource locators to transport openers.

mod http;
mod local;
mod s3;
mod stdio;

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::stream::{ByteReader, RawWriter};
use crate::uri::Uri;

/// Opens raw transport streams for one URI scheme.
///
/// Openers establish the transport session eagerly: a connection failure
/// surfaces from `open_read`/`open_write`, never lazily from the returned
/// stream. An opener that cannot serve one direction fails that call with
/// `UnsupportedScheme`.
pub trait SchemeOpener: Send + Sync {
    fn open_read(&self, uri: &Uri<'_>) -> Result<ByteReader>;

    fn open_write(&self, uri: &Uri<'_>, append: bool) -> Result<RawWriter>;
}

/// Maps scheme names to openers.
///
/// Populated at construction and read-only afterwards, so concurrent lookups
/// need no locking. Scheme matching is case-insensitive.
pub struct SchemeRegistry {
    entries: BTreeMap<String, Arc<dyn SchemeOpener>>,
}

impl SchemeRegistry {
    /// An empty registry, for callers assembling their own set of schemes.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// All built-in schemes.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        let web = Arc::new(http::HttpScheme);
        registry.register("file", Arc::new(local::LocalScheme));
        registry.register("http", web.clone());
        registry.register("https", web);
        registry.register("s3", Arc::new(s3::S3Scheme));
        registry.register("stderr", Arc::new(stdio::StderrScheme));
        registry.register("stdin", Arc::new(stdio::StdinScheme));
        registry.register("stdout", Arc::new(stdio::StdoutScheme));
        registry
    }

    pub fn register(&mut self, name: &str, opener: Arc<dyn SchemeOpener>) {
        self.entries.insert(name.to_ascii_lowercase(), opener);
    }

    /// Registered scheme names, in stable alphabetical order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    pub fn open_read(&self, locator: &str) -> Result<ByteReader> {
        let uri = Uri::parse(locator);
        self.opener_for(resolve_scheme(&uri, "stdin"))?
            .open_read(&uri)
    }

    pub fn open_write(&self, locator: &str, append: bool) -> Result<RawWriter> {
        let uri = Uri::parse(locator);
        self.opener_for(resolve_scheme(&uri, "stdout"))?
            .open_write(&uri, append)
    }

    fn opener_for(&self, scheme: &str) -> Result<&Arc<dyn SchemeOpener>> {
        self.entries
            .get(&scheme.to_ascii_lowercase())
            .ok_or_else(|| Error::UnsupportedScheme(scheme.to_string()))
    }
}

impl Default for SchemeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Sentinel names resolve before prefix splitting: `-` means the
/// direction-appropriate standard stream, and the bare names address a
/// specific one. Everything else goes by scheme prefix, defaulting to the
/// local filesystem.
fn resolve_scheme<'a>(uri: &Uri<'a>, dash: &'a str) -> &'a str {
    match uri.raw {
        "-" => dash,
        "stdin" | "stdout" | "stderr" => uri.raw,
        _ => uri.scheme.unwrap_or("file"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_scheme_fails_closed() {
        let registry = SchemeRegistry::builtin();
        let err = registry.open_read("bogus-scheme://x").err().unwrap();
        assert!(matches!(err, Error::UnsupportedScheme(_)));
    }

    #[test]
    fn test_names_sorted_and_stable() {
        let registry = SchemeRegistry::builtin();
        let names = registry.names();
        assert!(names.contains(&"file"));
        let mut sorted = names.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(names, sorted);
        assert_eq!(names, registry.names());
    }

    #[test]
    fn test_dash_resolves_by_direction() {
        let uri = Uri::parse("-");
        assert_eq!(resolve_scheme(&uri, "stdin"), "stdin");
        assert_eq!(resolve_scheme(&uri, "stdout"), "stdout");
    }

    #[test]
    fn test_bare_path_resolves_to_file() {
        let uri = Uri::parse("/tmp/data.txt");
        assert_eq!(resolve_scheme(&uri, "stdin"), "file");
    }
}
