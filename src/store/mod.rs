//! Byte-store accessor
//!
//! This module owns every file handle partsplit touches. Handles are acquired,
//! used for exactly one pass and released explicitly, and a failure while
//! releasing is reported instead of being lost when the handle is dropped.

mod accessor;
mod chunk_reader;
mod release;

pub use accessor::{read_all, write_all, WriteMode};
pub use chunk_reader::ChunkReader;
pub(crate) use release::scoped;
