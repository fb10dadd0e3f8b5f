//! S3 opener.
//!
//! The AWS SDK is async; each operation blocks on a current-thread runtime
//! owned by the handle, keeping the rest of the crate synchronous. Reads
//! materialize the object body. Writes buffer locally and upload the whole
//! object in one `put_object` when the stream closes, since S3 objects are
//! immutable.

use std::io::{self, Cursor, Write};

use aws_config::BehaviorVersion;
use aws_sdk_s3::error::{DisplayErrorContext, SdkError};
use aws_sdk_s3::operation::get_object::GetObjectError;
use aws_sdk_s3::primitives::ByteStream;
use tokio::runtime::Runtime;

use crate::error::{Error, Result};
use crate::scheme::SchemeOpener;
use crate::stream::{ByteReader, RawWriter, TransportWrite};
use crate::uri::{parse_object_path, Uri};

pub struct S3Scheme;

impl SchemeOpener for S3Scheme {
    fn open_read(&self, uri: &Uri<'_>) -> Result<ByteReader> {
        let (bucket, key) = parse_object_path(uri)?;
        let runtime = new_runtime()?;
        let client = runtime.block_on(new_client());

        let output = runtime
            .block_on(client.get_object().bucket(bucket).key(key).send())
            .map_err(|e| map_get_error(e, uri))?;

        let body = runtime.block_on(output.body.collect()).map_err(|e| Error::Transport {
            uri: uri.raw.to_string(),
            status: None,
            detail: e.to_string(),
        })?;

        let data = body.to_vec();
        tracing::debug!("Fetched {} bytes from {}", data.len(), uri.raw);
        Ok(Box::new(Cursor::new(data)))
    }

    fn open_write(&self, uri: &Uri<'_>, append: bool) -> Result<RawWriter> {
        if append {
            return Err(Error::UnsupportedScheme(
                "s3 (append is not supported)".to_string(),
            ));
        }
        let (bucket, key) = parse_object_path(uri)?;
        let runtime = new_runtime()?;
        let client = runtime.block_on(new_client());
        Ok(Box::new(S3Sink {
            runtime,
            client,
            bucket: bucket.to_string(),
            key: key.to_string(),
            uri: uri.raw.to_string(),
            buf: Vec::new(),
        }))
    }
}

/// Buffers the object locally; `close` performs the upload.
struct S3Sink {
    runtime: Runtime,
    client: aws_sdk_s3::Client,
    bucket: String,
    key: String,
    uri: String,
    buf: Vec<u8>,
}

impl Write for S3Sink {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl TransportWrite for S3Sink {
    fn close(&mut self) -> Result<()> {
        let body = ByteStream::from(std::mem::take(&mut self.buf));
        let request = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(&self.key)
            .body(body);
        self.runtime
            .block_on(request.send())
            .map_err(|e| Error::Transport {
                uri: self.uri.clone(),
                status: None,
                detail: DisplayErrorContext(&e).to_string(),
            })?;
        tracing::debug!("Uploaded {}", self.uri);
        Ok(())
    }
}

async fn new_client() -> aws_sdk_s3::Client {
    let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    aws_sdk_s3::Client::new(&config)
}

fn new_runtime() -> Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(Error::from)
}

fn map_get_error(err: SdkError<GetObjectError>, uri: &Uri<'_>) -> Error {
    if let SdkError::ServiceError(context) = &err {
        if context.err().is_no_such_key() {
            return Error::NotFound(uri.raw.to_string());
        }
        let status = context.raw().status().as_u16();
        if status == 403 {
            return Error::PermissionDenied(uri.raw.to_string());
        }
        return Error::Transport {
            uri: uri.raw.to_string(),
            status: Some(status),
            detail: DisplayErrorContext(&err).to_string(),
        };
    }
    Error::Transport {
        uri: uri.raw.to_string(),
        status: None,
        detail: DisplayErrorContext(&err).to_string(),
    }
}
