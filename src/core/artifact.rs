//! Reading and writing the on-disk artifacts (root files, JSON records)

use crate::core::error::{MintkitError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Write `contents` to `path` atomically.
///
/// The data lands in a temporary file in the same directory and is then
/// renamed over the target, so readers never observe a half-written artifact.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(contents)?;
    temp.flush()?;
    temp.persist(path).map_err(|e| MintkitError::Io(e.error))?;

    tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote artifact");
    Ok(())
}

/// Serialize `value` as pretty JSON and write it atomically
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    write_atomic(path, json.as_bytes())
}

/// Read a text artifact produced by an earlier stage
pub fn read_text(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(MintkitError::missing_artifact(path));
    }
    Ok(fs::read_to_string(path)?)
}

/// Read and parse a JSON artifact produced by an earlier stage
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = read_text(path)?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Record {
        name: String,
        count: usize,
    }

    #[test]
    fn test_json_roundtrip() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("nested").join("record.json");
        let record = Record {
            name: "root".to_string(),
            count: 3,
        };

        write_json(&path, &record)?;
        let loaded: Record = read_json(&path)?;
        assert_eq!(loaded, record);
        Ok(())
    }

    #[test]
    fn test_write_atomic_overwrites() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("merkle_root.txt");

        write_atomic(&path, b"first")?;
        write_atomic(&path, b"second")?;
        assert_eq!(read_text(&path)?, "second");
        Ok(())
    }

    #[test]
    fn test_missing_artifact() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("whitelist_data.json");
        let result: Result<Record> = read_json(&path);
        assert!(matches!(result, Err(MintkitError::MissingArtifact { .. })));
    }
}
