//! Layered configuration
//!
//! Looked up in order: an explicit `--config` path, `./mintkit.toml`,
//! `~/.mintkit/config.toml`, then built-in defaults.

use crate::core::error::{MintkitError, Result};
use crate::proofs::merkle::DEFAULT_PARALLEL_THRESHOLD;
use crate::provenance::DigestScheme;
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the per-project configuration file
pub const LOCAL_CONFIG_FILE: &str = "mintkit.toml";

/// Settings for every command
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub output: OutputConfig,
    pub whitelist: WhitelistConfig,
    pub proof: ProofConfig,
    pub provenance: ProvenanceConfig,
}

/// Where artifacts are written
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory for all artifacts (default: current directory)
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WhitelistConfig {
    /// Raw root file
    pub root_file: String,
    /// Whitelist data record
    pub data_file: String,
    /// Level width at which tree hashing runs in parallel
    pub parallel_threshold: usize,
}

impl Default for WhitelistConfig {
    fn default() -> Self {
        Self {
            root_file: "merkle_root.txt".to_string(),
            data_file: "whitelist_data.json".to_string(),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProofConfig {
    pub file_prefix: String,
}

impl Default for ProofConfig {
    fn default() -> Self {
        Self {
            file_prefix: "proof_".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvenanceConfig {
    /// Extension of eligible metadata files, without the dot
    pub extension: String,
    pub hash_file: String,
    pub data_file: String,
    pub scheme: DigestScheme,
}

impl Default for ProvenanceConfig {
    fn default() -> Self {
        Self {
            extension: "json".to_string(),
            hash_file: "provenance.txt".to_string(),
            data_file: "provenance_data.json".to_string(),
            scheme: DigestScheme::Raw,
        }
    }
}

impl Settings {
    /// Load settings, preferring `explicit` when given (it must exist)
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(MintkitError::missing_artifact(path));
            }
            return Self::from_file(path);
        }

        for candidate in Self::search_paths() {
            if candidate.is_file() {
                return Self::from_file(&candidate);
            }
        }

        tracing::debug!("no configuration file found, using defaults");
        Ok(Self::default())
    }

    /// Parse a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings = Self::from_toml(&content).map_err(|e| {
            MintkitError::configuration(format!("{}: {}", path.display(), e))
        })?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(settings)
    }

    /// Parse TOML; missing keys fall back to defaults
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            MintkitError::configuration(format!("Failed to parse config: {}", e))
        })
    }

    /// Candidate configuration files, most specific first
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
        if let Some(user_dirs) = UserDirs::new() {
            paths.push(user_dirs.home_dir().join(".mintkit").join("config.toml"));
        }
        paths
    }

    /// Directory artifacts are written to and read from
    pub fn output_dir(&self) -> PathBuf {
        self.output.dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn root_file_path(&self) -> PathBuf {
        self.output_dir().join(&self.whitelist.root_file)
    }

    pub fn whitelist_data_path(&self) -> PathBuf {
        self.output_dir().join(&self.whitelist.data_file)
    }

    pub fn provenance_hash_path(&self) -> PathBuf {
        self.output_dir().join(&self.provenance.hash_file)
    }

    pub fn provenance_data_path(&self) -> PathBuf {
        self.output_dir().join(&self.provenance.data_file)
    }
}
