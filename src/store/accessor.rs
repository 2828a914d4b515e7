//! Whole-file reads and writes

use super::release::{release_reader, release_writer, scoped, Durable};
use crate::{Error, Result};
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::Path;

/// How `write_all` opens its target. The file is created when missing in
/// every mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WriteMode {
    /// Fail with `AlreadyExists` if the file is already there
    CreateNew,
    /// Discard any previous contents
    Truncate,
    /// Keep previous contents and write after them
    Append,
}

impl WriteMode {
    fn options(self) -> OpenOptions {
        let mut options = OpenOptions::new();
        options.write(true);
        match self {
            WriteMode::CreateNew => options.create_new(true),
            WriteMode::Truncate => options.create(true).truncate(true),
            WriteMode::Append => options.create(true).append(true),
        };
        options
    }
}

/// Read a file from start to end-of-stream into one buffer.
pub fn read_all(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let file = open_for_read(path)?;

    scoped(
        file,
        |file| {
            let mut data = Vec::new();
            file.read_to_end(&mut data)?;
            Ok(data)
        },
        release_reader,
    )
}

/// Write `data` to `path` in one call, opened according to `mode`.
pub fn write_all(path: impl AsRef<Path>, data: &[u8], mode: WriteMode) -> Result<()> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(Error::EmptyFileName);
    }

    let file = mode.options().open(path).map_err(|e| match e.kind() {
        io::ErrorKind::AlreadyExists => Error::AlreadyExists(path.to_path_buf()),
        _ => Error::Io(e),
    })?;

    write_to(file, data)
}

/// Write `data` to an already opened target and release it. A release
/// failure is returned even though every byte was accepted.
pub(crate) fn write_to<W: Durable>(writer: W, data: &[u8]) -> Result<()> {
    scoped(
        writer,
        |writer| {
            writer.write_all(data)?;
            Ok(())
        },
        release_writer,
    )
}

/// Open an existing file for reading, distinguishing a missing file from
/// other failures.
pub(crate) fn open_for_read(path: &Path) -> Result<File> {
    if path.as_os_str().is_empty() {
        return Err(Error::EmptyFileName);
    }

    File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::NotFound(path.to_path_buf()),
        _ => Error::Io(e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_then_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.bin");

        write_all(&path, b"hello world", WriteMode::Truncate).unwrap();
        assert_eq!(read_all(&path).unwrap(), b"hello world");
    }

    #[test]
    fn test_append_keeps_previous_contents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.bin");

        write_all(&path, b"abc", WriteMode::Append).unwrap();
        write_all(&path, b"def", WriteMode::Append).unwrap();

        assert_eq!(read_all(&path).unwrap(), b"abcdef");
    }

    #[test]
    fn test_truncate_discards_previous_contents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.bin");

        write_all(&path, b"a much longer payload", WriteMode::Truncate).unwrap();
        write_all(&path, b"short", WriteMode::Truncate).unwrap();

        assert_eq!(read_all(&path).unwrap(), b"short");
    }

    #[test]
    fn test_create_new_refuses_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.bin");

        write_all(&path, b"first", WriteMode::CreateNew).unwrap();
        let err = write_all(&path, b"second", WriteMode::CreateNew).unwrap_err();

        assert!(matches!(err, Error::AlreadyExists(p) if p == path));
        assert_eq!(read_all(&path).unwrap(), b"first");
    }

    #[test]
    fn test_empty_write_creates_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.bin");

        write_all(&path, &[], WriteMode::Truncate).unwrap();

        assert!(path.exists());
        assert!(read_all(&path).unwrap().is_empty());
    }

    #[test]
    fn test_empty_names_rejected() {
        assert!(matches!(read_all(""), Err(Error::EmptyFileName)));
        assert!(matches!(
            write_all("", b"x", WriteMode::Append),
            Err(Error::EmptyFileName)
        ));
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.bin");

        let err = read_all(&path).unwrap_err();
        assert!(matches!(err, Error::NotFound(p) if p == path));
    }

    /// Accepts writes and fails when asked to flush them
    struct FailingFlush;

    impl Write for FailingFlush {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }
    }

    impl Durable for FailingFlush {
        fn sync(&self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_reports_failed_flush() {
        let err = write_to(FailingFlush, b"payload").unwrap_err();
        assert_eq!(err.to_string(), "IO error: disk full");
    }

    #[cfg(unix)]
    #[test]
    fn test_write_to_device_that_cannot_sync() {
        write_all("/dev/null", b"discarded", WriteMode::Truncate).unwrap();
        write_all("/dev/null", b"discarded", WriteMode::Append).unwrap();
    }
}
