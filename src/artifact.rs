//! Persistence of the final size-type set.
//!
//! The artifact is plain text, one value per line, replaced wholesale on
//! every successful refresh. Writes go to a temporary file in the same
//! directory and are renamed over the target, so a concurrent freshness
//! check never observes a half-written artifact.

use std::path::{Path, PathBuf};

use crate::error::RefreshError;

/// Write the sorted set to `path`, replacing any existing artifact.
pub fn write_artifact(path: &Path, values: &[String]) -> Result<(), RefreshError> {
    let mut body = String::new();
    for value in values {
        body.push_str(value);
        body.push('\n');
    }

    let tmp = staging_path(path);
    let persist = || -> std::io::Result<()> {
        std::fs::write(&tmp, &body)?;
        std::fs::rename(&tmp, path)
    };
    persist().map_err(|source| RefreshError::Persistence {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a previously written artifact back, skipping blank lines.
pub fn read_artifact(path: &Path) -> std::io::Result<Vec<String>> {
    let content = std::fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

fn staging_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "artifact".to_string());
    path.with_file_name(format!(".{}.tmp", name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_write_and_read_round_trip() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("sizes.txt");
        let values = strings(&["c5.xlarge", "m5.large"]);

        write_artifact(&path, &values).unwrap();
        assert_eq!(read_artifact(&path).unwrap(), values);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "c5.xlarge\nm5.large\n"
        );
    }

    #[test]
    fn test_replaces_existing_artifact_wholesale() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("sizes.txt");
        write_artifact(&path, &strings(&["m5.large", "t3.micro"])).unwrap();
        write_artifact(&path, &strings(&["a1.medium"])).unwrap();
        assert_eq!(read_artifact(&path).unwrap(), strings(&["a1.medium"]));
    }

    #[test]
    fn test_empty_set_writes_empty_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("sizes.txt");
        write_artifact(&path, &[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
        assert!(read_artifact(&path).unwrap().is_empty());
    }

    #[test]
    fn test_no_staging_file_left_behind() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("sizes.txt");
        write_artifact(&path, &strings(&["m5.large"])).unwrap();
        assert!(!tmp.path().join(".sizes.txt.tmp").exists());
    }

    #[test]
    fn test_missing_directory_is_persistence_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("missing").join("sizes.txt");
        let err = write_artifact(&path, &strings(&["m5.large"])).unwrap_err();
        assert!(matches!(err, RefreshError::Persistence { .. }));
    }
}
