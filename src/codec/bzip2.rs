//! bzip2 codec. Levels 1 through 9 select the block size; 6 when
//! unspecified.

use bzip2::read::BzDecoder;
use bzip2::write::BzEncoder;
use bzip2::Compression;

use crate::codec::Codec;
use crate::error::{Error, Result};
use crate::stream::{ByteReader, EncodedWriter, RawWriter};

pub struct Bzip2;

impl Codec for Bzip2 {
    fn decoder(&self, src: ByteReader) -> Result<ByteReader> {
        Ok(Box::new(BzDecoder::new(src)))
    }

    fn encoder(&self, dst: RawWriter, level: Option<i32>) -> Result<Box<dyn EncodedWriter>> {
        let compression = match level {
            None => Compression::new(6),
            Some(l @ 1..=9) => Compression::new(l as u32),
            Some(level) => {
                return Err(Error::InvalidLevel {
                    algorithm: "bzip2".to_string(),
                    level,
                })
            }
        };
        Ok(Box::new(BzEncoder::new(dst, compression)))
    }
}

impl EncodedWriter for BzEncoder<RawWriter> {
    fn finish(self: Box<Self>) -> Result<RawWriter> {
        (*self).finish().map_err(Error::from)
    }
}
