//! HTTP/HTTPS opener. Read-only: these transports have no general write
//! story, and any non-success status is a transport error carrying the
//! status and a snippet of the response body.

use crate::error::{Error, Result};
use crate::scheme::SchemeOpener;
use crate::stream::{ByteReader, RawWriter};
use crate::uri::Uri;

/// Cap on how much of an error response body is carried into the error.
const BODY_SNIPPET_LIMIT: usize = 200;

pub struct HttpScheme;

impl SchemeOpener for HttpScheme {
    fn open_read(&self, uri: &Uri<'_>) -> Result<ByteReader> {
        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| transport_error(uri, None, e.to_string()))?;

        let response = client
            .get(uri.raw)
            .send()
            .map_err(|e| transport_error(uri, e.status().map(|s| s.as_u16()), e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            let snippet: String = body.chars().take(BODY_SNIPPET_LIMIT).collect();
            return Err(transport_error(
                uri,
                Some(status.as_u16()),
                format!("unexpected status {status}: {snippet}"),
            ));
        }

        tracing::debug!("Opened {} ({})", uri.raw, status);

        // The response body streams; bytes are pulled as the caller reads
        Ok(Box::new(response))
    }

    fn open_write(&self, uri: &Uri<'_>, _append: bool) -> Result<RawWriter> {
        Err(Error::UnsupportedScheme(format!(
            "{} (writing is not supported)",
            uri.scheme.unwrap_or("http")
        )))
    }
}

fn transport_error(uri: &Uri<'_>, status: Option<u16>, detail: String) -> Error {
    Error::Transport {
        uri: uri.raw.to_string(),
        status,
        detail,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_write_unsupported() {
        let uri = Uri::parse("https://example.com/upload");
        let err = HttpScheme.open_write(&uri, false).err().unwrap();
        assert!(matches!(err, Error::UnsupportedScheme(_)));
    }

    // Live status handling is covered by the loopback-listener tests in
    // tests/http.rs
}
