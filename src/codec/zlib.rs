//! zlib codec (RFC 1950 framing around DEFLATE).

use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;

use crate::codec::{deflate_level, Codec};
use crate::error::{Error, Result};
use crate::stream::{ByteReader, EncodedWriter, RawWriter};

pub struct Zlib;

impl Codec for Zlib {
    fn decoder(&self, src: ByteReader) -> Result<ByteReader> {
        Ok(Box::new(ZlibDecoder::new(src)))
    }

    fn encoder(&self, dst: RawWriter, level: Option<i32>) -> Result<Box<dyn EncodedWriter>> {
        Ok(Box::new(ZlibEncoder::new(dst, deflate_level("zlib", level)?)))
    }
}

impl EncodedWriter for ZlibEncoder<RawWriter> {
    fn finish(self: Box<Self>) -> Result<RawWriter> {
        (*self).finish().map_err(Error::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::testutil::{decode_with, encode_with, SharedBuf};

    #[test]
    fn test_round_trip() {
        let payload = b"abcabcabcabcabc";
        let encoded = encode_with(&Zlib, Some(9), payload);
        assert_eq!(decode_with(&Zlib, encoded), payload.to_vec());
    }

    #[test]
    fn test_level_out_of_range() {
        let err = Zlib
            .encoder(Box::new(SharedBuf::default()), Some(12))
            .err().unwrap();
        assert!(matches!(err, Error::InvalidLevel { level: 12, .. }));
    }
}
