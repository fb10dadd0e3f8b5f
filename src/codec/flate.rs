//! Raw DEFLATE codec (RFC 1951, no container framing).

use flate2::read::DeflateDecoder;
use flate2::write::DeflateEncoder;

use crate::codec::{deflate_level, Codec};
use crate::error::{Error, Result};
use crate::stream::{ByteReader, EncodedWriter, RawWriter};

pub struct Flate;

impl Codec for Flate {
    fn decoder(&self, src: ByteReader) -> Result<ByteReader> {
        Ok(Box::new(DeflateDecoder::new(src)))
    }

    fn encoder(&self, dst: RawWriter, level: Option<i32>) -> Result<Box<dyn EncodedWriter>> {
        Ok(Box::new(DeflateEncoder::new(
            dst,
            deflate_level("flate", level)?,
        )))
    }
}

impl EncodedWriter for DeflateEncoder<RawWriter> {
    fn finish(self: Box<Self>) -> Result<RawWriter> {
        (*self).finish().map_err(Error::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{decode_with, encode_with};

    #[test]
    fn test_round_trip() {
        let payload = vec![0u8; 4096];
        let encoded = encode_with(&Flate, None, &payload);
        assert!(encoded.len() < payload.len());
        assert_eq!(decode_with(&Flate, encoded), payload);
    }
}
