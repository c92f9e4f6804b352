//! Provenance hashing for metadata directories
//!
//! Each file is hashed with SHA-256, the digests are concatenated in file
//! name order and the concatenation is hashed once more. Publishing the
//! result before a sale fixes the reveal order.

use crate::core::artifact;
use crate::core::error::{MintkitError, Result};
use crate::core::hash::{sha256, sha256_chunks, sha256_file};
use crate::core::types::Hash;
use chrono::{SecondsFormat, Utc};
use clap::ValueEnum;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// How per-file digests are joined before the final hash
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DigestScheme {
    /// Concatenate the raw 32-byte digests
    #[default]
    Raw,
    /// Concatenate lowercase hex digests (64 ASCII bytes each), as hashes
    /// published by the earlier provenance script were computed
    Hex,
}

impl DigestScheme {
    /// Identifier recorded in the provenance data file
    pub fn algorithm(self) -> &'static str {
        match self {
            DigestScheme::Raw => "SHA256 of concatenated raw SHA256 digests",
            DigestScheme::Hex => "SHA256 of concatenated SHA256 hashes",
        }
    }

    fn combine(self, digests: &[Hash]) -> Hash {
        match self {
            DigestScheme::Raw => sha256_chunks(digests),
            DigestScheme::Hex => sha256_chunks(digests.iter().map(Hash::to_hex)),
        }
    }
}

/// Provenance hash together with the per-file digests it commits to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provenance {
    pub hash: Hash,
    pub file_hashes: Vec<Hash>,
}

/// Compute the provenance hash over blobs already in their final order
pub fn provenance<B>(blobs: &[B], scheme: DigestScheme) -> Result<Provenance>
where
    B: AsRef<[u8]> + Sync,
{
    if blobs.is_empty() {
        return Err(MintkitError::empty_input("no files to hash"));
    }

    let file_hashes: Vec<Hash> = blobs.par_iter().map(|b| sha256(b.as_ref())).collect();
    Ok(Provenance {
        hash: scheme.combine(&file_hashes),
        file_hashes,
    })
}

/// A file that takes part in the provenance hash
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataFile {
    pub name: String,
    pub path: PathBuf,
}

/// List the regular files directly inside `dir` with the given extension,
/// sorted bytewise by file name so enumeration order never matters.
///
/// Symlinks are followed. A matching file whose name is not UTF-8 is an
/// error, since it could not be recorded in the data file.
pub fn collect_metadata_files(dir: &Path, extension: &str) -> Result<Vec<MetadataFile>> {
    if !dir.is_dir() {
        return Err(MintkitError::missing_artifact(dir));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true) {
        let entry = entry.map_err(|e| MintkitError::Io(e.into()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some(extension) {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            return Err(MintkitError::NonUtf8FileName {
                path: path.to_path_buf(),
            });
        };
        files.push(MetadataFile {
            name: name.to_string(),
            path: path.to_path_buf(),
        });
    }

    if files.is_empty() {
        return Err(MintkitError::empty_directory(dir, extension));
    }

    files.sort_by(|a, b| a.name.cmp(&b.name));
    tracing::debug!(dir = %dir.display(), files = files.len(), "collected metadata files");
    Ok(files)
}

/// Provenance data file (`provenance_data.json`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvenanceRecord {
    pub provenance_hash: Hash,
    pub total_files: usize,
    /// Lowercase hex, no prefix
    pub file_hashes: Vec<String>,
    pub files: Vec<String>,
    pub generated_at: String,
    pub algorithm: String,
}

impl ProvenanceRecord {
    pub fn save(&self, path: &Path) -> Result<()> {
        artifact::write_json(path, self)
    }
}

/// Hash every eligible file in `dir` and build the provenance record
pub fn hash_directory(
    dir: &Path,
    extension: &str,
    scheme: DigestScheme,
) -> Result<ProvenanceRecord> {
    let files = collect_metadata_files(dir, extension)?;

    let file_hashes = files
        .par_iter()
        .map(|file| sha256_file(&file.path))
        .collect::<std::io::Result<Vec<Hash>>>()?;
    let hash = scheme.combine(&file_hashes);

    tracing::info!(files = files.len(), hash = %hash, "computed provenance hash");

    Ok(ProvenanceRecord {
        provenance_hash: hash,
        total_files: files.len(),
        file_hashes: file_hashes.iter().map(Hash::to_hex).collect(),
        files: files.into_iter().map(|f| f.name).collect(),
        generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        algorithm: scheme.algorithm().to_string(),
    })
}
