//! Local filesystem opener.

use std::fs::{File, OpenOptions};
use std::io;

use crate::error::{Error, Result};
use crate::scheme::SchemeOpener;
use crate::stream::{ByteReader, RawWriter, TransportWrite};
use crate::uri::Uri;

pub struct LocalScheme;

impl SchemeOpener for LocalScheme {
    fn open_read(&self, uri: &Uri<'_>) -> Result<ByteReader> {
        let file = File::open(uri.path).map_err(|e| map_fs_error(e, uri.path))?;
        Ok(Box::new(file))
    }

    fn open_write(&self, uri: &Uri<'_>, append: bool) -> Result<RawWriter> {
        let mut options = OpenOptions::new();
        options.write(true).create(true);
        if append {
            options.append(true);
        } else {
            options.truncate(true);
        }
        let file = options
            .open(uri.path)
            .map_err(|e| map_fs_error(e, uri.path))?;
        Ok(Box::new(file))
    }
}

impl TransportWrite for File {}

fn map_fs_error(err: io::Error, path: &str) -> Error {
    match err.kind() {
        io::ErrorKind::NotFound => Error::NotFound(path.to_string()),
        io::ErrorKind::PermissionDenied => Error::PermissionDenied(path.to_string()),
        _ => Error::Io(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use tempfile::TempDir;

    #[test]
    fn test_open_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("test.txt");
        std::fs::write(&path, "hello world").unwrap();

        let uri_string = path.to_string_lossy().to_string();
        let uri = Uri::parse(&uri_string);
        let mut reader = LocalScheme.open_read(&uri).unwrap();
        let mut contents = String::new();
        reader.read_to_string(&mut contents).unwrap();
        assert_eq!(contents, "hello world");
    }

    #[test]
    fn test_open_read_not_found() {
        let uri = Uri::parse("/nonexistent/path/to/file");
        let err = LocalScheme.open_read(&uri).err().unwrap();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn test_open_write_truncates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "old contents").unwrap();

        let uri_string = path.to_string_lossy().to_string();
        let uri = Uri::parse(&uri_string);
        let mut writer = LocalScheme.open_write(&uri, false).unwrap();
        writer.write_all(b"new").unwrap();
        writer.close().unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"new");
    }

    #[test]
    fn test_open_write_appends() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("log.txt");

        let uri_string = path.to_string_lossy().to_string();
        let uri = Uri::parse(&uri_string);
        for part in ["one", "two"] {
            let mut writer = LocalScheme.open_write(&uri, true).unwrap();
            writer.write_all(part.as_bytes()).unwrap();
            writer.close().unwrap();
        }

        assert_eq!(std::fs::read(&path).unwrap(), b"onetwo");
    }
}
