//! Chunker: split a source file into numbered parts
//!
//! Parts are named `{prefix}.part{N}` with `N` starting at 1 and no zero
//! padding. Every part except the last holds exactly `chunk_size` bytes, and
//! concatenating the parts in index order reproduces the source.

use crate::config::{EmptySourcePolicy, OverwritePolicy, SplitConfig};
use crate::store::{self, ChunkReader, WriteMode};
use crate::{Error, Result, PART_SEPARATOR};
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Split `source` into parts of at most `chunk_size` bytes named after
/// `prefix` (or after `source` when `prefix` is empty), refusing to overwrite
/// existing parts.
pub fn split_file(
    source: impl AsRef<Path>,
    chunk_size: u64,
    prefix: impl AsRef<Path>,
) -> Result<Vec<PathBuf>> {
    let config = SplitConfig::new(source.as_ref(), chunk_size).with_prefix(prefix.as_ref());
    split(&config)
}

/// Split according to `config`, returning the created parts in index order.
///
/// Argument problems are reported before anything is opened. A failure after
/// that leaves the parts written so far on disk.
pub fn split(config: &SplitConfig) -> Result<Vec<PathBuf>> {
    let source = config.source.as_path();
    if source.as_os_str().is_empty() {
        return Err(Error::EmptyFileName);
    }
    if config.chunk_size == 0 {
        return Err(Error::NonPositiveSize);
    }

    let metadata = fs::metadata(source).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::NotFound(source.to_path_buf()),
        _ => Error::Io(e),
    })?;
    if metadata.is_dir() {
        return Err(Error::IsDirectory(source.to_path_buf()));
    }
    // A chunk must fit in memory on this platform.
    usize::try_from(config.chunk_size).map_err(|_| Error::SizeTooLarge(config.chunk_size))?;

    let mode = match config.overwrite {
        OverwritePolicy::Refuse => WriteMode::CreateNew,
        OverwritePolicy::Truncate => WriteMode::Truncate,
    };
    let prefix = config.effective_prefix();

    let reader = ChunkReader::open(source, config.chunk_size)?;
    let parts = store::scoped(
        reader,
        |reader| write_parts(reader, prefix, mode),
        |reader| reader.close(),
    )?;

    // Emptiness is judged by what was read, not by the reported length, so
    // sources like procfs files that report 0 bytes are still split. No part
    // exists at this point when nothing was read.
    if parts.is_empty() && config.empty_source == EmptySourcePolicy::Reject {
        return Err(Error::EmptySource(source.to_path_buf()));
    }

    Ok(parts)
}

/// Name of the `index`-th part (1-based) for `prefix`
pub fn part_name(prefix: impl AsRef<Path>, index: usize) -> PathBuf {
    let mut name = OsString::from(prefix.as_ref().as_os_str());
    name.push(format!("{}{}", PART_SEPARATOR, index));
    PathBuf::from(name)
}

fn write_parts(
    reader: &mut ChunkReader,
    prefix: &Path,
    mode: WriteMode,
) -> Result<Vec<PathBuf>> {
    let mut parts = Vec::with_capacity(2);
    let mut index = 1;

    while let Some(chunk) = reader.next_chunk()? {
        let part = part_name(prefix, index);
        store::write_all(&part, chunk, mode)?;
        parts.push(part);
        index += 1;
    }

    Ok(parts)
}
