//! snappy codec, using the framing format so streams of any length can be
//! read back incrementally. snappy has no compression levels.

use std::io;

use snap::read::FrameDecoder;
use snap::write::FrameEncoder;

use crate::codec::{reject_level, Codec};
use crate::error::{Error, Result};
use crate::stream::{ByteReader, EncodedWriter, RawWriter};

pub struct Snappy;

impl Codec for Snappy {
    fn decoder(&self, src: ByteReader) -> Result<ByteReader> {
        Ok(Box::new(FrameDecoder::new(src)))
    }

    fn encoder(&self, dst: RawWriter, level: Option<i32>) -> Result<Box<dyn EncodedWriter>> {
        reject_level("snappy", level)?;
        Ok(Box::new(FrameEncoder::new(dst)))
    }
}

impl EncodedWriter for FrameEncoder<RawWriter> {
    fn finish(self: Box<Self>) -> Result<RawWriter> {
        (*self).into_inner().map_err(|e| {
            Error::Io(io::Error::new(e.error().kind(), e.error().to_string()))
        })
    }
}
