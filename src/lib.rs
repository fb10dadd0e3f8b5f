//! Universal reader/writer with transparent compression
//!
//! This crate separates *where* bytes live (the URI scheme) from *how* they
//! are encoded in transit (the algorithm), and composes the two so any scheme
//! pairs with any algorithm.
//!
//! # Schemes
//!
//! - **file**: local filesystem paths, with or without a `file://` prefix
//! - **http/https**: remote resources, read-only
//! - **s3**: objects in AWS S3 buckets
//! - **stdin/stdout/stderr**: the process standard streams (`-` means stdin
//!   when reading and stdout when writing)
//!
//! # Algorithms
//!
//! `base64`, `bzip2`, `flate`, `gzip`, `none`, `snappy`, `zip`, `zlib`.
//! Names are case-insensitive and `none` is the identity transform.
//!
//! # Example
//!
//! ```ignore
//! use conduit::Conduit;
//!
//! let conduit = Conduit::new();
//! conduit.write_all("/tmp/data.gz", "gzip", None, b"hello world", false)?;
//! let bytes = conduit.read_all("/tmp/data.gz", "gzip")?;
//! assert_eq!(bytes, b"hello world");
//! # Ok::<(), conduit::Error>(())
//! ```
//!
//! Whole-resource helpers buffer in memory; callers that need bounded memory
//! use the streaming handles from [`Conduit::open_read`] and
//! [`Conduit::open_write`] directly.

mod codec;
mod compose;
mod error;
mod facade;
mod scheme;
mod stream;
mod uri;

pub use codec::{Codec, CodecRegistry};
pub use compose::{Reader, Writer};
pub use error::{Error, Result};
pub use facade::{version, Conduit};
pub use scheme::{SchemeOpener, SchemeRegistry};
pub use stream::{ByteReader, EncodedWriter, RawWriter, TransportWrite};
pub use uri::Uri;

/// Default buffer size for transport-level buffering (1MB)
pub const DEFAULT_BUFFER_SIZE: usize = 1024 * 1024;
