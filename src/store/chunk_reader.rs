//! Bounded sequential reads over a source

use super::accessor::open_for_read;
use super::release::release_reader;
use crate::Result;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Reads a source as consecutive chunks of at most `chunk_size` bytes.
///
/// Every chunk except the last is exactly `chunk_size` bytes long: short
/// reads from the underlying reader are retried until the chunk is full or
/// the stream ends. The buffer grows with the data actually read, so a large
/// chunk size over a small source stays small.
pub struct ChunkReader<R = File> {
    reader: R,
    chunk_size: u64,
    buf: Vec<u8>,
}

impl ChunkReader<File> {
    /// Open a file for chunked reading
    pub fn open(path: impl AsRef<Path>, chunk_size: u64) -> Result<Self> {
        let file = open_for_read(path.as_ref())?;
        Ok(ChunkReader::new(file, chunk_size))
    }

    /// Release the underlying file handle
    pub fn close(self) -> Result<()> {
        release_reader(self.reader)
    }
}

impl<R: Read> ChunkReader<R> {
    pub fn new(reader: R, chunk_size: u64) -> Self {
        ChunkReader {
            reader,
            chunk_size,
            buf: Vec::new(),
        }
    }

    pub fn chunk_size(&self) -> u64 {
        self.chunk_size
    }

    /// Read the next chunk. Returns `None` at end-of-stream.
    pub fn next_chunk(&mut self) -> Result<Option<&[u8]>> {
        self.buf.clear();
        (&mut self.reader)
            .take(self.chunk_size)
            .read_to_end(&mut self.buf)?;

        if self.buf.is_empty() {
            Ok(None)
        } else {
            Ok(Some(&self.buf))
        }
    }
}
