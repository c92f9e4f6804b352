//! Configuration management for mintkit
//!
//! Output locations, file names and hashing options, read from
//! `mintkit.toml` or `~/.mintkit/config.toml`.

pub mod settings;

// Re-export commonly used items
pub use settings::{
    OutputConfig, ProofConfig, ProvenanceConfig, Settings, WhitelistConfig, LOCAL_CONFIG_FILE,
};
