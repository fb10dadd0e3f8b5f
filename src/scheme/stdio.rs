//! Standard-stream schemes.
//!
//! These are process-scoped, not resource-scoped: closing the logical stream
//! flushes but never closes the underlying process stream. The append flag
//! is meaningless here and ignored.

use std::io;

use crate::error::{Error, Result};
use crate::scheme::SchemeOpener;
use crate::stream::{ByteReader, RawWriter, TransportWrite};
use crate::uri::Uri;

pub struct StdinScheme;

impl SchemeOpener for StdinScheme {
    fn open_read(&self, _uri: &Uri<'_>) -> Result<ByteReader> {
        Ok(Box::new(io::stdin()))
    }

    fn open_write(&self, _uri: &Uri<'_>, _append: bool) -> Result<RawWriter> {
        Err(Error::UnsupportedScheme("stdin (read-only)".to_string()))
    }
}

pub struct StdoutScheme;

impl SchemeOpener for StdoutScheme {
    fn open_read(&self, _uri: &Uri<'_>) -> Result<ByteReader> {
        Err(Error::UnsupportedScheme("stdout (write-only)".to_string()))
    }

    fn open_write(&self, _uri: &Uri<'_>, _append: bool) -> Result<RawWriter> {
        Ok(Box::new(io::stdout()))
    }
}

pub struct StderrScheme;

impl SchemeOpener for StderrScheme {
    fn open_read(&self, _uri: &Uri<'_>) -> Result<ByteReader> {
        Err(Error::UnsupportedScheme("stderr (write-only)".to_string()))
    }

    fn open_write(&self, _uri: &Uri<'_>, _append: bool) -> Result<RawWriter> {
        Ok(Box::new(io::stderr()))
    }
}

impl TransportWrite for io::Stdout {}
impl TransportWrite for io::Stderr {}
