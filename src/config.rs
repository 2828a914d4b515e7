//! Explicit configuration for split and merge runs
//!
//! Callers build one of these once from their own inputs (command-line
//! arguments, settings) and pass it into the core by reference.

use crate::{Error, Result, MEBIBYTE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// What to do when a part file with the target name already exists
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverwritePolicy {
    /// Fail without touching the existing file
    #[default]
    Refuse,
    /// Replace the existing file's contents
    Truncate,
}

/// What to do when the source file has no bytes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptySourcePolicy {
    /// Succeed with zero parts
    #[default]
    Allow,
    /// Fail with a usage error before creating anything
    Reject,
}

/// Parameters of a single split run
#[derive(Clone, Debug)]
pub struct SplitConfig {
    pub source: PathBuf,
    /// Maximum part size in bytes
    pub chunk_size: u64,
    /// Part name prefix; the source path is used when `None` or empty
    pub prefix: Option<PathBuf>,
    pub overwrite: OverwritePolicy,
    pub empty_source: EmptySourcePolicy,
}

impl SplitConfig {
    pub fn new(source: impl Into<PathBuf>, chunk_size: u64) -> Self {
        SplitConfig {
            source: source.into(),
            chunk_size,
            prefix: None,
            overwrite: OverwritePolicy::default(),
            empty_source: EmptySourcePolicy::default(),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<PathBuf>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_overwrite(mut self, overwrite: OverwritePolicy) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn with_empty_source(mut self, empty_source: EmptySourcePolicy) -> Self {
        self.empty_source = empty_source;
        self
    }

    /// The prefix part names are built from
    pub fn effective_prefix(&self) -> &Path {
        match &self.prefix {
            Some(prefix) if !prefix.as_os_str().is_empty() => prefix,
            _ => &self.source,
        }
    }
}

/// Parameters of a single merge run
#[derive(Clone, Debug)]
pub struct MergeConfig {
    /// Inputs, concatenated in exactly this order
    pub inputs: Vec<PathBuf>,
    pub destination: PathBuf,
}

impl MergeConfig {
    pub fn new<I, P>(inputs: I, destination: impl Into<PathBuf>) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        MergeConfig {
            inputs: inputs.into_iter().map(Into::into).collect(),
            destination: destination.into(),
        }
    }
}

/// Convert a size in mebibytes to bytes. Zero and negative sizes are
/// rejected.
pub fn mebibytes_to_bytes(mib: i64) -> Result<u64> {
    if mib <= 0 {
        return Err(Error::NonPositiveSize);
    }
    let mib = mib as u64;
    mib.checked_mul(MEBIBYTE).ok_or(Error::SizeTooLarge(mib))
}
