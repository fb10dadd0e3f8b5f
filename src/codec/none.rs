//! The identity transform. Reads pass the raw handle through untouched;
//! writes go through a transparent passthrough so the composed stream still
//! has a codec seam to finish. The level is ignored.

use std::io::{self, Write};

use crate::codec::Codec;
use crate::error::Result;
use crate::stream::{ByteReader, EncodedWriter, RawWriter};

pub struct Identity;

impl Codec for Identity {
    fn decoder(&self, src: ByteReader) -> Result<ByteReader> {
        Ok(src)
    }

    fn encoder(&self, dst: RawWriter, _level: Option<i32>) -> Result<Box<dyn EncodedWriter>> {
        Ok(Box::new(Passthrough(dst)))
    }
}

struct Passthrough(RawWriter);

impl Write for Passthrough {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.0.write(data)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.flush()
    }
}

impl EncodedWriter for Passthrough {
    fn finish(self: Box<Self>) -> Result<RawWriter> {
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{decode_with, encode_with};

    #[test]
    fn test_identity_both_directions() {
        let payload = b"exactly these bytes".to_vec();
        assert_eq!(encode_with(&Identity, None, &payload), payload);
        assert_eq!(decode_with(&Identity, payload.clone()), payload);
    }

    #[test]
    fn test_level_ignored() {
        // Unlike algorithms without a level concept, `none` accepts and
        // ignores whatever level it is given.
        assert_eq!(encode_with(&Identity, Some(9), b"x"), b"x".to_vec());
    }
}
