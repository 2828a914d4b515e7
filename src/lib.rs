//! # partsplit
//!
//! Split large files into fixed-size parts and merge them back.
//!
//! A source file is cut into consecutive parts named `{prefix}.part1`,
//! `{prefix}.part2`, ... Each part holds at most the chosen chunk size, and
//! concatenating the parts in index order gives back the original bytes.
//!
//! ## Core Concepts
//!
//! - **Split**: sequential bounded reads of a source, one new file per chunk
//! - **Merge**: whole-file reads of an ordered list, appended to one output
//! - **Store**: the file access layer both share; every handle is released
//!   explicitly and release failures are reported
//!
//! ## Example
//!
//! ```ignore
//! use partsplit::{merge_files, split_file};
//!
//! let parts = split_file("backup.tar", 20 * partsplit::MEBIBYTE, "")?;
//! merge_files(&parts, "backup.tar.new")?;
//! ```

pub mod config;
pub mod merge;
pub mod settings;
pub mod split;
pub mod store;

mod error;

pub use config::{mebibytes_to_bytes, EmptySourcePolicy, MergeConfig, OverwritePolicy, SplitConfig};
pub use error::{Error, ErrorClass, Result};
pub use merge::{merge, merge_files};
pub use settings::Settings;
pub use split::{part_name, split, split_file};

/// Token between the prefix and the part index in part names
pub const PART_SEPARATOR: &str = ".part";

/// Bytes per mebibyte, the unit of command-line sizes
pub const MEBIBYTE: u64 = 1024 * 1024;

/// Part size in mebibytes when none is configured
pub const DEFAULT_SIZE_MIB: i64 = 20;
