//! Whole-resource convenience layer over the composed streams.

use std::io::{Read, Write};

use crate::codec::CodecRegistry;
use crate::compose::{self, Reader, Writer};
use crate::error::{Error, Result};
use crate::scheme::SchemeRegistry;

/// Library version, for diagnostics and help output.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// The entry point: owns the scheme and algorithm registries and composes
/// them per call.
///
/// Registries are populated at construction and read-only afterwards, so a
/// `Conduit` can be shared freely across threads. Every call produces its
/// own logical stream; streams are never shared between callers.
pub struct Conduit {
    schemes: SchemeRegistry,
    codecs: CodecRegistry,
    buffer_size: usize,
}

impl Conduit {
    /// Built-in schemes and algorithms.
    pub fn new() -> Self {
        Self::with_registries(SchemeRegistry::builtin(), CodecRegistry::builtin())
    }

    /// Caller-assembled registries. This is the seam tests and extensions
    /// use; nothing here is process-global.
    pub fn with_registries(schemes: SchemeRegistry, codecs: CodecRegistry) -> Self {
        Self {
            schemes,
            codecs,
            buffer_size: crate::DEFAULT_BUFFER_SIZE,
        }
    }

    /// Override the transport buffer size.
    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    /// Open a decoded read stream. This is the streaming escape hatch for
    /// callers that need bounded memory.
    pub fn open_read(&self, uri: &str, algorithm: &str) -> Result<Reader> {
        let codec = self.codecs.resolve(algorithm)?;
        let raw = self.schemes.open_read(uri)?;
        compose::compose_read(raw, codec.as_ref(), self.buffer_size)
    }

    /// Open an encoding write stream. The codec is resolved before the
    /// transport is opened so an unknown algorithm never touches the
    /// destination.
    pub fn open_write(
        &self,
        uri: &str,
        algorithm: &str,
        level: Option<i32>,
        append: bool,
    ) -> Result<Writer> {
        let codec = self.codecs.resolve(algorithm)?;
        let raw = self.schemes.open_write(uri, append)?;
        compose::compose_write(raw, codec.as_ref(), level, self.buffer_size)
    }

    /// Read the entire resource through the named algorithm into memory.
    /// No size limit is imposed here; use [`Conduit::open_read`] for
    /// bounded-memory reads.
    pub fn read_all(&self, uri: &str, algorithm: &str) -> Result<Vec<u8>> {
        let mut reader = self.open_read(uri, algorithm)?;
        let mut data = Vec::new();
        if let Err(err) = reader.read_to_end(&mut data) {
            return Err(compose::map_decode_error(err));
        }
        reader.close()?;
        Ok(data)
    }

    /// Write one buffer to the resource through the named algorithm.
    ///
    /// The close is always attempted and a close failure is reported even if
    /// every write succeeded; when both fail, the close error wins since it
    /// may indicate unflushed encoded bytes.
    pub fn write_all(
        &self,
        uri: &str,
        algorithm: &str,
        level: Option<i32>,
        data: &[u8],
        append: bool,
    ) -> Result<()> {
        let mut writer = self.open_write(uri, algorithm, level, append)?;
        let body = writer.write_all(data).map_err(Error::from);
        match writer.close() {
            Ok(()) => body,
            Err(close_err) => Err(close_err),
        }
    }

    /// Comma-joined algorithm names, in stable alphabetical order.
    pub fn algorithms(&self) -> String {
        self.codecs.names().join(",")
    }

    /// Comma-joined scheme names, in stable alphabetical order.
    pub fn schemes(&self) -> String {
        self.schemes.names().join(",")
    }
}

impl Default for Conduit {
    fn default() -> Self {
        Self::new()
    }
}
