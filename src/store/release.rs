//! Scoped handle release
//!
//! A handle is released after its operation no matter how the operation
//! ended. When both fail, the operation's error is reported; a release
//! failure after a successful operation becomes the result.

use crate::Result;
use std::fs::File;
use std::io::{self, Write};

/// Run `op` on `handle`, then hand the handle to `release`.
pub(crate) fn scoped<H, T>(
    mut handle: H,
    op: impl FnOnce(&mut H) -> Result<T>,
    release: impl FnOnce(H) -> Result<()>,
) -> Result<T> {
    let outcome = op(&mut handle);
    combine(outcome, release(handle))
}

/// Merge an operation's outcome with the outcome of releasing its handle.
pub(crate) fn combine<T>(primary: Result<T>, released: Result<()>) -> Result<T> {
    match (primary, released) {
        (Err(e), _) => Err(e),
        (Ok(_), Err(e)) => Err(e),
        (Ok(value), Ok(())) => Ok(value),
    }
}

/// Close a read handle. Nothing buffered, so nothing can fail here.
pub(crate) fn release_reader(file: File) -> Result<()> {
    drop(file);
    Ok(())
}

/// A write target whose data can be pushed down to storage
pub(crate) trait Durable: Write {
    fn sync(&self) -> io::Result<()>;
}

impl Durable for File {
    fn sync(&self) -> io::Result<()> {
        self.sync_data()
    }
}

/// Close a write handle, pushing its data to storage first so that deferred
/// write failures surface here rather than on drop.
///
/// Targets that cannot be synced at all, such as `/dev/null`, pipes and
/// FIFOs, answer with `EINVAL` or `ENOTSUP`; for those a successful flush is
/// enough.
pub(crate) fn release_writer<W: Durable>(mut writer: W) -> Result<()> {
    writer.flush()?;
    match writer.sync() {
        Ok(()) => Ok(()),
        Err(e) if matches!(e.kind(), io::ErrorKind::InvalidInput | io::ErrorKind::Unsupported) => {
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
