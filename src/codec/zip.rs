//! zip archive codec.
//!
//! zip central directories need seeking, which sequential transports cannot
//! provide, so both directions stage the archive in memory: reads pull the
//! whole raw stream in and yield the first entry, writes build a
//! single-entry archive (named `data`) and emit it when the stream closes.
//! No compression levels.

use std::io::{self, Cursor, Read, Write};

use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

use crate::codec::{reject_level, Codec};
use crate::error::{Error, Result};
use crate::stream::{ByteReader, EncodedWriter, RawWriter};

pub struct Zip;

impl Codec for Zip {
    fn decoder(&self, mut src: ByteReader) -> Result<ByteReader> {
        let mut raw = Vec::new();
        src.read_to_end(&mut raw)?;
        let mut archive =
            ZipArchive::new(Cursor::new(raw)).map_err(|e| Error::Transform(format!("zip: {e}")))?;
        if archive.len() == 0 {
            return Err(Error::Transform("zip: archive has no entries".to_string()));
        }
        let mut entry = archive
            .by_index(0)
            .map_err(|e| Error::Transform(format!("zip: {e}")))?;
        let mut data = Vec::with_capacity(entry.size() as usize);
        entry.read_to_end(&mut data)?;
        Ok(Box::new(Cursor::new(data)))
    }

    fn encoder(&self, dst: RawWriter, level: Option<i32>) -> Result<Box<dyn EncodedWriter>> {
        reject_level("zip", level)?;
        let mut archive = ZipWriter::new(Cursor::new(Vec::new()));
        archive
            .start_file("data", SimpleFileOptions::default())
            .map_err(|e| Error::Transform(format!("zip: {e}")))?;
        Ok(Box::new(ZipEncoder {
            archive,
            transport: dst,
        }))
    }
}

struct ZipEncoder {
    archive: ZipWriter<Cursor<Vec<u8>>>,
    transport: RawWriter,
}

impl Write for ZipEncoder {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.archive.write(data)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.archive.flush()
    }
}

impl EncodedWriter for ZipEncoder {
    fn finish(self: Box<Self>) -> Result<RawWriter> {
        let ZipEncoder {
            archive,
            mut transport,
        } = *self;
        let cursor = archive
            .finish()
            .map_err(|e| Error::Transform(format!("zip: {e}")))?;
        transport.write_all(cursor.get_ref())?;
        Ok(transport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{decode_with, encode_with, SharedBuf};

    #[test]
    fn test_round_trip() {
        let payload = b"zipped payload".to_vec();
        let encoded = encode_with(&Zip, None, &payload);
        // "PK" local file header signature
        assert_eq!(&encoded[..2], &b"PK"[..]);
        assert_eq!(decode_with(&Zip, encoded), payload);
    }

    #[test]
    fn test_empty_archive_is_transform_error() {
        let empty = ZipWriter::new(Cursor::new(Vec::new())).finish().unwrap();
        let err = Zip
            .decoder(Box::new(Cursor::new(empty.into_inner())))
            .err().unwrap();
        assert!(matches!(err, Error::Transform(_)));
    }

    #[test]
    fn test_level_rejected() {
        let err = Zip
            .encoder(Box::new(SharedBuf::default()), Some(3))
            .err().unwrap();
        assert!(matches!(err, Error::InvalidLevel { level: 3, .. }));
    }
}
