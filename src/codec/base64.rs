//! base64 codec over the standard alphabet. Streaming in both directions;
//! no compression levels.

use base64::engine::general_purpose::STANDARD;
use base64::engine::GeneralPurpose;
use base64::read::DecoderReader;
use base64::write::EncoderWriter;

use crate::codec::{reject_level, Codec};
use crate::error::{Error, Result};
use crate::stream::{ByteReader, EncodedWriter, RawWriter};

pub struct Base64;

impl Codec for Base64 {
    fn decoder(&self, src: ByteReader) -> Result<ByteReader> {
        Ok(Box::new(DecoderReader::new(src, &STANDARD)))
    }

    fn encoder(&self, dst: RawWriter, level: Option<i32>) -> Result<Box<dyn EncodedWriter>> {
        reject_level("base64", level)?;
        Ok(Box::new(EncoderWriter::new(dst, &STANDARD)))
    }
}

impl EncodedWriter for EncoderWriter<'static, GeneralPurpose, RawWriter> {
    fn finish(mut self: Box<Self>) -> Result<RawWriter> {
        (*self).finish().map_err(Error::from)
    }
}
