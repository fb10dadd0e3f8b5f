//! Error taxonomy shared by registries, openers, codecs, and composed
//! streams.

use thiserror::Error;

/// Errors that can occur while opening, transforming, or draining a stream.
#[derive(Error, Debug)]
pub enum Error {
    /// URI scheme with no registered opener, or an opener that cannot
    /// serve the requested direction.
    #[error("Unsupported scheme: {0}")]
    UnsupportedScheme(String),

    /// Algorithm name with no registered codec.
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Compression level outside the algorithm's accepted range.
    #[error("Invalid compression level {level} for algorithm {algorithm}")]
    InvalidLevel { algorithm: String, level: i32 },

    /// No resource exists at the given locator.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// The transport refused access to the resource.
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Transport-level failure. `status` carries the response status when
    /// one was received; `detail` includes a snippet of the response body
    /// for remote schemes.
    #[error("Transport error for {uri}: {detail}")]
    Transport {
        uri: String,
        status: Option<u16>,
        detail: String,
    },

    /// Malformed or corrupt encoded data.
    #[error("Transform error: {0}")]
    Transform(String),

    /// Generic read/write/close failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
