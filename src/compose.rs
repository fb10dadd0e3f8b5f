//! Stream composition: wraps a raw transport stream with a codec to produce
//! the logical stream handed to callers. Pure composition, no I/O of its
//! own.

use std::io::{self, BufReader, BufWriter, Read, Write};

use crate::codec::Codec;
use crate::error::{Error, Result};
use crate::stream::{ByteReader, EncodedWriter, RawWriter};

/// Logical read handle: yields decoded bytes from the underlying transport.
///
/// Reading to end-of-stream drains the underlying raw stream even when the
/// transform buffers internally. Dropping the handle releases the transport.
pub struct Reader {
    inner: ByteReader,
}

impl Read for Reader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl Reader {
    pub fn close(self) -> Result<()> {
        Ok(())
    }
}

/// Logical write handle: encodes bytes on their way to the transport.
///
/// `close` flushes the write buffer, finishes the codec framing, then closes
/// the transport, in that order, so every buffered encoded byte reaches the
/// transport before it is released. Transports that upload at close (S3)
/// lose the object if the handle is dropped without closing.
pub struct Writer {
    inner: BufWriter<Box<dyn EncodedWriter>>,
}

impl Write for Writer {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.inner.write(data)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl Writer {
    pub fn close(self) -> Result<()> {
        let encoder = self
            .inner
            .into_inner()
            .map_err(|e| Error::Io(e.into_error()))?;
        let mut transport = encoder.finish()?;
        transport.close()
    }
}

pub(crate) fn compose_read(
    raw: ByteReader,
    codec: &dyn Codec,
    buffer_size: usize,
) -> Result<Reader> {
    let buffered: ByteReader = Box::new(BufReader::with_capacity(buffer_size, raw));
    Ok(Reader {
        inner: codec.decoder(buffered)?,
    })
}

pub(crate) fn compose_write(
    raw: RawWriter,
    codec: &dyn Codec,
    level: Option<i32>,
    buffer_size: usize,
) -> Result<Writer> {
    let encoded = codec.encoder(raw, level)?;
    Ok(Writer {
        inner: BufWriter::with_capacity(buffer_size, encoded),
    })
}

/// Decode-side io errors that indicate corrupt input surface as transform
/// failures rather than generic I/O failures.
pub(crate) fn map_decode_error(err: io::Error) -> Error {
    match err.kind() {
        io::ErrorKind::InvalidData | io::ErrorKind::InvalidInput => Error::Transform(err.to_string()),
        _ => Error::Io(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use crate::codec::CodecRegistry;
    use crate::testutil::SharedBuf;

    #[test]
    fn test_close_flushes_through_to_transport() {
        let registry = CodecRegistry::builtin();
        let codec = registry.resolve("gzip").unwrap();
        let buf = SharedBuf::default();

        // Small buffer forces multiple flushes through the encoder
        let mut writer = compose_write(Box::new(buf.clone()), codec.as_ref(), None, 8).unwrap();
        writer.write_all(b"hello world, hello world").unwrap();
        writer.close().unwrap();

        let encoded = buf.take();
        assert!(!encoded.is_empty());

        let mut reader =
            compose_read(Box::new(Cursor::new(encoded)), codec.as_ref(), 8).unwrap();
        let mut decoded = Vec::new();
        reader.read_to_end(&mut decoded).unwrap();
        assert_eq!(decoded, b"hello world, hello world".to_vec());
    }

    #[test]
    fn test_corrupt_input_is_transform_error() {
        let registry = CodecRegistry::builtin();
        let codec = registry.resolve("gzip").unwrap();

        let mut reader = compose_read(
            Box::new(Cursor::new(b"definitely not gzip".to_vec())),
            codec.as_ref(),
            64,
        )
        .unwrap();
        let err = reader.read_to_end(&mut Vec::new()).unwrap_err();
        assert!(matches!(map_decode_error(err), Error::Transform(_)));
    }
}
