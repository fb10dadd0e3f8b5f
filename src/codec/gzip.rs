//! gzip codec. Reads accept multi-member streams, which is what `gzip`
//! itself produces when files are concatenated.

use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;

use crate::codec::{deflate_level, Codec};
use crate::error::{Error, Result};
use crate::stream::{ByteReader, EncodedWriter, RawWriter};

pub struct Gzip;

impl Codec for Gzip {
    fn decoder(&self, src: ByteReader) -> Result<ByteReader> {
        Ok(Box::new(MultiGzDecoder::new(src)))
    }

    fn encoder(&self, dst: RawWriter, level: Option<i32>) -> Result<Box<dyn EncodedWriter>> {
        Ok(Box::new(GzEncoder::new(dst, deflate_level("gzip", level)?)))
    }
}

impl EncodedWriter for GzEncoder<RawWriter> {
    fn finish(self: Box<Self>) -> Result<RawWriter> {
        (*self).finish().map_err(Error::from)
    }
}
