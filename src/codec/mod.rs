//! Algorithm registry: named stream transforms applied over raw transports.

mod base64;
mod bzip2;
mod flate;
mod gzip;
mod none;
mod snappy;
mod zip;
mod zlib;

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::stream::{ByteReader, EncodedWriter, RawWriter};

/// A named transform that wraps arbitrary byte streams with the algorithm's
/// framing, without knowing anything about the underlying transport.
pub trait Codec: Send + Sync {
    /// Wrap a raw stream so reads yield decoded bytes.
    fn decoder(&self, src: ByteReader) -> Result<ByteReader>;

    /// Wrap a transport so writes are encoded before reaching it.
    ///
    /// Level meaning is algorithm-specific; algorithms without a level
    /// concept reject anything but `None`.
    fn encoder(&self, dst: RawWriter, level: Option<i32>) -> Result<Box<dyn EncodedWriter>>;
}

/// Maps algorithm names to codecs.
///
/// Populated at construction and read-only afterwards, so concurrent lookups
/// need no locking. Lookups are case-insensitive and the empty string is an
/// alias of `none`.
pub struct CodecRegistry {
    entries: BTreeMap<String, Arc<dyn Codec>>,
}

impl CodecRegistry {
    /// An empty registry, for callers assembling their own set of transforms.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// All built-in algorithms.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register("base64", Arc::new(base64::Base64));
        registry.register("bzip2", Arc::new(bzip2::Bzip2));
        registry.register("flate", Arc::new(flate::Flate));
        registry.register("gzip", Arc::new(gzip::Gzip));
        registry.register("none", Arc::new(none::Identity));
        registry.register("snappy", Arc::new(snappy::Snappy));
        registry.register("zip", Arc::new(zip::Zip));
        registry.register("zlib", Arc::new(zlib::Zlib));
        registry
    }

    pub fn register(&mut self, name: &str, codec: Arc<dyn Codec>) {
        self.entries.insert(name.to_ascii_lowercase(), codec);
    }

    pub fn resolve(&self, name: &str) -> Result<&Arc<dyn Codec>> {
        let mut key = name.trim().to_ascii_lowercase();
        if key.is_empty() {
            key.push_str("none");
        }
        self.entries
            .get(&key)
            .ok_or_else(|| Error::UnsupportedAlgorithm(name.to_string()))
    }

    /// Registered algorithm names, in stable alphabetical order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }
}

impl Default for CodecRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Level policy shared by the DEFLATE family (gzip, zlib, flate): 0 through
/// 9, defaulting to 6 when unspecified.
pub(crate) fn deflate_level(algorithm: &str, level: Option<i32>) -> Result<flate2::Compression> {
    match level {
        None => Ok(flate2::Compression::new(6)),
        Some(l @ 0..=9) => Ok(flate2::Compression::new(l as u32)),
        Some(level) => Err(Error::InvalidLevel {
            algorithm: algorithm.to_string(),
            level,
        }),
    }
}

/// Algorithms with no level concept accept only "unspecified".
pub(crate) fn reject_level(algorithm: &str, level: Option<i32>) -> Result<()> {
    match level {
        None => Ok(()),
        Some(level) => Err(Error::InvalidLevel {
            algorithm: algorithm.to_string(),
            level,
        }),
    }
}
