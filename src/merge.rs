//! Concatenator: merge files into one by appending them in order

use crate::config::MergeConfig;
use crate::store::{self, WriteMode};
use crate::{Error, Result};
use std::path::Path;

/// Concatenate `inputs`, in the given order, into `destination`.
pub fn merge_files<P: AsRef<Path>>(inputs: &[P], destination: impl AsRef<Path>) -> Result<()> {
    let config = MergeConfig::new(
        inputs.iter().map(|p| p.as_ref().to_path_buf()),
        destination.as_ref(),
    );
    merge(&config)
}

/// Merge according to `config`.
///
/// The destination is emptied first and then extended one whole input at a
/// time. Inputs are neither validated as a sequence nor reordered. On failure
/// the destination keeps whatever was appended before the failing input.
pub fn merge(config: &MergeConfig) -> Result<()> {
    if config.inputs.is_empty() {
        return Err(Error::EmptyFileList);
    }
    let destination = config.destination.as_path();
    if destination.as_os_str().is_empty() {
        return Err(Error::EmptyOutputName);
    }

    store::write_all(destination, &[], WriteMode::Truncate).map_err(|e| Error::CreateOutput {
        path: destination.to_path_buf(),
        source: Box::new(e),
    })?;

    for input in &config.inputs {
        append(input, destination)?;
    }

    Ok(())
}

fn append(input: &Path, destination: &Path) -> Result<()> {
    let data = store::read_all(input)?;
    store::write_all(destination, &data, WriteMode::Append)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_merge_concatenates_in_order() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a");
        let b = dir.path().join("b");
        fs::write(&a, b"AAA").unwrap();
        fs::write(&b, b"bb").unwrap();
        let out = dir.path().join("out");

        merge_files(&[&b, &a, &b], &out).unwrap();

        assert_eq!(fs::read(&out).unwrap(), b"bbAAAbb");
    }

    #[test]
    fn test_merge_replaces_existing_destination() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a");
        fs::write(&a, b"new").unwrap();
        let out = dir.path().join("out");
        fs::write(&out, b"old contents that are longer").unwrap();

        merge_files(&[&a], &out).unwrap();

        assert_eq!(fs::read(&out).unwrap(), b"new");
    }

    #[test]
    fn test_argument_errors() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("out");
        let none: [&Path; 0] = [];

        assert!(matches!(merge_files(&none, &out), Err(Error::EmptyFileList)));
        assert!(matches!(
            merge_files(&[dir.path().join("a")], ""),
            Err(Error::EmptyOutputName)
        ));
        assert!(!out.exists());
    }

    #[test]
    fn test_empty_input_name() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("out");

        let err = merge_files(&[""], &out).unwrap_err();

        assert!(matches!(err, Error::EmptyFileName));
        assert_eq!(fs::read(&out).unwrap(), b"");
    }

    #[test]
    fn test_missing_input_stops_merge() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a");
        let c = dir.path().join("c");
        fs::write(&a, b"first").unwrap();
        fs::write(&c, b"never appended").unwrap();
        let missing = dir.path().join("missing");
        let out = dir.path().join("out");

        let err = merge_files(&[&a, &missing, &c], &out).unwrap_err();

        assert!(matches!(err, Error::NotFound(p) if p == missing));
        assert_eq!(fs::read(&out).unwrap(), b"first");
    }

    #[test]
    fn test_uncreatable_destination() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a");
        fs::write(&a, b"data").unwrap();
        let out = dir.path().join("no-such-dir").join("out");

        let err = merge_files(&[&a], &out).unwrap_err();

        assert!(matches!(err, Error::CreateOutput { .. }));
        assert!(err.to_string().starts_with("fail to create file"));
    }

    #[cfg(unix)]
    #[test]
    fn test_merge_into_device() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a");
        let b = dir.path().join("b");
        fs::write(&a, b"AAA").unwrap();
        fs::write(&b, b"bb").unwrap();

        merge_files(&[&a, &b], "/dev/null").unwrap();
    }
}
