//! Shared byte-stream handle types.
//!
//! Scheme openers produce raw handles and codecs wrap them; both sides of
//! that seam speak these types, which is what lets any scheme compose with
//! any algorithm.

use std::io;

use crate::error::Result;

/// A readable byte stream. Dropping it releases the underlying transport.
pub type ByteReader = Box<dyn io::Read + Send>;

/// The write half of a transport.
///
/// `close` flushes anything still buffered and releases the resource.
/// Process-scoped streams (stdout, stderr) flush but stay open; transports
/// that upload whole objects perform the upload here.
pub trait TransportWrite: io::Write + Send {
    fn close(&mut self) -> Result<()> {
        self.flush()?;
        Ok(())
    }
}

/// A boxed transport write half, as handed out by scheme openers.
pub type RawWriter = Box<dyn TransportWrite>;

/// A transport wrapped by a codec's encoder.
///
/// `finish` writes whatever trailing framing the algorithm requires and
/// hands the transport back, so the composed stream can close it after the
/// encoded tail has been flushed through.
pub trait EncodedWriter: io::Write + Send {
    fn finish(self: Box<Self>) -> Result<RawWriter>;
}
